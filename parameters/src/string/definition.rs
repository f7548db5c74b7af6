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

use super::ValidatingStringParameterValue;
use crate::descriptor::failure_message;
use crate::error::compile;
use crate::{
    js_escape, ParameterDefinition, ParameterError, StringParameterDescriptor,
    ValidatedParameterDescriptor,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// String based parameter that only accepts values matching a regular
/// expression. The form gives real-time feedback on the value through the
/// [StringParameterDescriptor] endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatingStringParameterDefinition {
    name: String,
    #[serde(default)]
    default_value: String,
    regex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failed_validation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ValidatingStringParameterDefinition {
    pub fn new<S1, S2, S3>(
        name: S1,
        default_value: S2,
        regex: S3,
        failed_validation_message: Option<String>,
        description: Option<String>,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            name: name.into(),
            default_value: default_value.into(),
            regex: regex.into(),
            failed_validation_message,
            description,
        }
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }

    pub fn failed_validation_message(&self) -> Option<&str> {
        self.failed_validation_message.as_deref()
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

impl ParameterDefinition for ValidatingStringParameterDefinition {
    type Value = ValidatingStringParameterValue;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn descriptor(&self) -> &'static dyn ValidatedParameterDescriptor {
        &StringParameterDescriptor
    }

    fn default_parameter_value(&self) -> Self::Value {
        ValidatingStringParameterValue::validated(
            &self.name,
            &self.default_value,
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
                Ok(ValidatingStringParameterValue::validated(
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

        let mut value = ValidatingStringParameterValue::deserialize(form)
            .map_err(|source| ParameterError::Binding {
                name: self.name.clone(),
                source,
            })?;

        if value.value().is_empty() {
            return Ok(self.default_parameter_value());
        }

        self.check(value.value())?;
        value.stamp(&self.regex, self.description());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParameterValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const DEF_NAME: &str = "name";
    const DEF_DEFAULT_VALUE: &str = "foo";
    const DEF_REGEX: &str = "^[a-z]*$";
    const DEF_MESSAGE: &str = "Test failed";
    const DEF_DESCRIPTION: &str = "Some parameter";

    fn definition() -> ValidatingStringParameterDefinition {
        ValidatingStringParameterDefinition::new(
            DEF_NAME,
            DEF_DEFAULT_VALUE,
            DEF_REGEX,
            Some(DEF_MESSAGE.into()),
            Some(DEF_DESCRIPTION.into()),
        )
    }

    #[test]
    fn test_accessors() {
        let d = definition();
        assert_eq!(d.name(), DEF_NAME);
        assert_eq!(d.description(), Some(DEF_DESCRIPTION));
        assert_eq!(d.default_value(), DEF_DEFAULT_VALUE);
        assert_eq!(d.regex(), DEF_REGEX);
        assert_eq!(d.js_encoded_regex(), DEF_REGEX);
        assert_eq!(d.failed_validation_message(), Some(DEF_MESSAGE));
        assert_eq!(d.js_encoded_failed_validation_message(), DEF_MESSAGE);
        assert_eq!(d.descriptor().symbol(), "validatingString");
    }

    #[test]
    fn test_js_encoded_properties() {
        let regex = "\".+";
        let message = "Your parameter does not match the regular expression: \".+";
        let d = ValidatingStringParameterDefinition::new(
            DEF_NAME,
            DEF_DEFAULT_VALUE,
            regex,
            Some(message.into()),
            None,
        );

        assert_eq!(d.js_encoded_regex(), js_escape(regex));
        assert_eq!(d.js_encoded_failed_validation_message(), js_escape(message));
    }

    #[test]
    fn test_create_value_matching() {
        let value = definition().create_value(Some("val")).expect("value matches");

        assert_eq!(value.name(), DEF_NAME);
        assert_eq!(value.value(), "val");
        assert_eq!(value.regex(), Some(DEF_REGEX));
        assert_eq!(value.description(), Some(DEF_DESCRIPTION));
    }

    #[test]
    fn test_create_value_empty_is_default() {
        let d = definition();
        assert_eq!(d.create_value(None).expect("default"), d.default_parameter_value());
        assert_eq!(d.create_value(Some("")).expect("default"), d.default_parameter_value());
        assert_eq!(d.create_value(None).expect("default").value(), DEF_DEFAULT_VALUE);
    }

    #[test]
    fn test_default_is_not_validated() {
        let d = ValidatingStringParameterDefinition::new(
            DEF_NAME, "000", DEF_REGEX, None, None,
        );
        assert_eq!(d.create_value(None).expect("default").value(), "000");
    }

    #[test]
    fn test_create_value_mismatch_uses_configured_message() {
        let err = definition().create_value(Some("000")).expect_err("000 does not match");
        assert!(matches!(
            err,
            ParameterError::Failure { message } if message == DEF_MESSAGE
        ));
    }

    #[test]
    fn test_create_value_mismatch_generates_message() {
        let d = ValidatingStringParameterDefinition::new(
            DEF_NAME,
            DEF_DEFAULT_VALUE,
            DEF_REGEX,
            Some(String::new()),
            None,
        );
        let err = d.create_value(Some("000")).expect_err("000 does not match");
        assert_eq!(
            err.message(),
            "Value entered does not match regular expression: ^[a-z]*$"
        );
    }

    #[test]
    fn test_create_value_with_malformed_regex() {
        let d = ValidatingStringParameterDefinition::new(
            DEF_NAME, DEF_DEFAULT_VALUE, "(dddd", None, None,
        );
        assert!(matches!(
            d.create_value(Some("dddd")),
            Err(ParameterError::InvalidRegex { .. })
        ));
        assert!(d.create_value(None).is_ok());
    }

    #[test]
    fn test_create_value_for_cli() {
        let d = definition();
        assert_eq!(d.create_value_for_cli(Some("val")).expect("matches").value(), "val");
        assert_eq!(
            d.create_value_for_cli(None).expect("default").value(),
            DEF_DEFAULT_VALUE
        );
        assert!(matches!(
            d.create_value_for_cli(Some("000")),
            Err(ParameterError::Abort { message }) if message == DEF_MESSAGE
        ));
    }

    #[test]
    fn test_create_value_from_request() {
        let d = definition();

        let values = vec!["val".to_string(), "ignored".to_string()];
        let value = d.create_value_from_request(Some(values.as_slice())).expect("matches");
        assert_eq!(value.value(), "val");
        assert_eq!(value.regex(), Some(DEF_REGEX));

        let value = d.create_value_from_request(Some(&[][..])).expect("default");
        assert_eq!(value.value(), DEF_DEFAULT_VALUE);

        let value = d.create_value_from_request(None).expect("default");
        assert_eq!(value.value(), DEF_DEFAULT_VALUE);

        let values = vec!["000".to_string()];
        assert!(matches!(
            d.create_value_from_request(Some(values.as_slice())),
            Err(ParameterError::Failure { message }) if message == DEF_MESSAGE
        ));
    }

    #[test]
    fn test_create_value_from_form_matching() {
        let value = definition()
            .create_value_from_form(&json!({ "name": DEF_NAME, "value": "val" }))
            .expect("value matches");

        assert_eq!(value.value(), "val");
        assert_eq!(value.name(), DEF_NAME);
        assert_eq!(value.description(), Some(DEF_DESCRIPTION));
        assert_eq!(value.regex(), Some(DEF_REGEX));
    }

    #[test]
    fn test_create_value_from_form_missing_or_blank_value() {
        let d = definition();
        for form in [
            json!({ "name": DEF_NAME }),
            json!({ "name": DEF_NAME, "value": "" }),
            json!({ "name": DEF_NAME, "value": null }),
        ] {
            let value = d.create_value_from_form(&form).expect("default");
            assert_eq!(value.value(), DEF_DEFAULT_VALUE);
            assert_eq!(value.name(), DEF_NAME);
            assert_eq!(value.description(), Some(DEF_DESCRIPTION));
            assert_eq!(value.regex(), Some(DEF_REGEX));
        }
    }

    #[test]
    fn test_create_value_from_form_mismatch() {
        assert!(matches!(
            definition().create_value_from_form(&json!({ "name": DEF_NAME, "value": "000" })),
            Err(ParameterError::Failure { message }) if message == DEF_MESSAGE
        ));
    }

    #[test]
    fn test_create_value_from_form_replaces_submitted_regex() {
        let value = definition()
            .create_value_from_form(&json!({
                "name": DEF_NAME,
                "value": "val",
                "regex": ".*",
            }))
            .expect("value matches");

        assert_eq!(value.regex(), Some(DEF_REGEX));
    }

    #[test]
    fn test_create_value_from_form_unbindable() {
        assert!(matches!(
            definition().create_value_from_form(&json!(["val"])),
            Err(ParameterError::Binding { name, .. }) if name == DEF_NAME
        ));
    }

    #[test]
    fn test_create_value_is_idempotent() {
        let d = definition();
        assert_eq!(
            d.create_value(Some("val")).expect("matches"),
            d.create_value(Some("val")).expect("matches")
        );
    }
}
