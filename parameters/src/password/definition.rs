/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

use super::{ValidatingPasswordParameterValue, DEFAULT_VALUE};
use crate::descriptor::failure_message;
use crate::error::compile;
use crate::{
    js_escape, ParameterDefinition, ParameterError, PasswordParameterDescriptor,
    ValidatedParameterDescriptor,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, debug_span};

/// Password parameter that only accepts values matching a regular
/// expression.
#[derive(Debug, Deserialize)]
pub struct ValidatingPasswordParameterDefinition {
    name: String,
    #[serde(default = "super::empty_secret")]
    default_value: SecretString,
    regex: String,
    #[serde(default)]
    failed_validation_message: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl ValidatingPasswordParameterDefinition {
    pub fn new<S1, S2>(
        name: S1,
        default_value: SecretString,
        regex: S2,
        failed_validation_message: Option<String>,
        description: Option<String>,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            name: name.into(),
            default_value,
            regex: regex.into(),
            failed_validation_message,
            description,
        }
    }

    pub fn default_value(&self) -> &SecretString {
        &self.default_value
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }

    pub fn failed_validation_message(&self) -> Option<&str> {
        self.failed_validation_message.as_deref()
    }

    pub fn set_failed_validation_message(&mut self, message: Option<String>) {
        self.failed_validation_message = message;
    }

    pub fn js_encoded_regex(&self) -> String {
        js_escape(&self.regex)
    }

    pub fn js_encoded_failed_validation_message(&self) -> String {
        js_escape(self.failed_validation_message.as_deref().unwrap_or_default())
    }

    fn check(&self, value: &str) -> Result<(), ParameterError> {
        let pattern = compile(&self.regex)?;
        if pattern.is_full_match(value) {
            debug!("value matches");
            Ok(())
        } else {
            debug!(regex = %pattern, "value does not match");
            Err(ParameterError::Failure {
                message: failure_message(
                    self.failed_validation_message(),
                    &self.regex,
                ),
            })
        }
    }
}

impl ParameterDefinition for ValidatingPasswordParameterDefinition {
    type Value = ValidatingPasswordParameterValue;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn descriptor(&self) -> &'static dyn ValidatedParameterDescriptor {
        &PasswordParameterDescriptor
    }

    fn default_parameter_value(&self) -> Self::Value {
        ValidatingPasswordParameterValue::validated(
            &self.name,
            self.default_value.expose_secret(),
            &self.regex,
            self.description(),
        )
    }

    fn create_value(
        &self,
        value: Option<&str>,
    ) -> Result<Self::Value, ParameterError> {
        let _span = debug_span!("create_value", parameter = %self.name).entered();

        match value {
            None | Some("") => Ok(self.default_parameter_value()),
            Some(value) => {
                self.check(value)?;
                Ok(ValidatingPasswordParameterValue::validated(
                    &self.name,
                    value,
                    &self.regex,
                    self.description(),
                ))
            }
        }
    }

    fn create_value_from_form(
        &self,
        form: &serde_json::Value,
    ) -> Result<Self::Value, ParameterError> {
        let _span =
            debug_span!("create_value_from_form", parameter = %self.name).entered();

        let mut value = ValidatingPasswordParameterValue::deserialize(form)
            .map_err(|source| ParameterError::Binding {
                name: self.name.clone(),
                source,
            })?;

        let submitted = value.value().expose_secret();
        if submitted.is_empty() || submitted == DEFAULT_VALUE {
            return Ok(self.default_parameter_value());
        }

        self.check(submitted)?;
        value.stamp(&self.regex, self.description());
        Ok(value)
    }
}
