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

use super::MASK;
use crate::ParameterValue;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[derive(Debug, Deserialize)]
pub struct ValidatingPasswordParameterValue {
    name: String,
    #[serde(
        default = "super::empty_secret",
        deserialize_with = "super::secret_or_empty"
    )]
    value: SecretString,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl ValidatingPasswordParameterValue {
    /// A value with nothing left to validate.
    pub fn new<S: Into<String>>(name: S, value: SecretString) -> Self {
        Self { name: name.into(), value, regex: None, description: None }
    }

    pub(crate) fn validated(
        name: &str,
        value: &str,
        regex: &str,
        description: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            value: SecretString::new(value.to_string()),
            regex: Some(regex.to_string()),
            description: description.map(str::to_string),
        }
    }

    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub(crate) fn stamp(&mut self, regex: &str, description: Option<&str>) {
        self.regex = Some(regex.to_string());
        self.description = description.map(str::to_string);
    }
}

impl ParameterValue for ValidatingPasswordParameterValue {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    fn expose_value(&self) -> &str {
        self.value.expose_secret()
    }

    fn display_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(MASK)
    }
}

impl PartialEq for ValidatingPasswordParameterValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.value.expose_secret() == other.value.expose_secret()
            && self.regex == other.regex
            && self.description == other.description
    }
}

impl Eq for ValidatingPasswordParameterValue {}

impl Hash for ValidatingPasswordParameterValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.value.expose_secret().hash(state);
        self.regex.hash(state);
        self.description.hash(state);
    }
}

impl Display for ValidatingPasswordParameterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ValidatingPasswordParameterValue) {}='{MASK}'", self.name)
    }
}
