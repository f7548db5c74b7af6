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

use crate::ParameterValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Forms submit `null` for a field the user never touched.
fn string_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A string value created from a
/// [ValidatingStringParameterDefinition](crate::ValidatingStringParameterDefinition).
///
/// Two values are equal when name, value, regex and description all are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatingStringParameterValue {
    name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ValidatingStringParameterValue {
    /// A value with nothing left to validate.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, value: S2) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            regex: None,
            description: None,
        }
    }

    pub(crate) fn validated(
        name: &str,
        value: &str,
        regex: &str,
        description: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            regex: Some(regex.to_string()),
            description: description.map(str::to_string),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn stamp(&mut self, regex: &str, description: Option<&str>) {
        self.regex = Some(regex.to_string());
        self.description = description.map(str::to_string);
    }
}

impl ParameterValue for ValidatingStringParameterValue {
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
        &self.value
    }
}

impl Display for ValidatingStringParameterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(ValidatingStringParameterValue) {}='{}'", self.name, self.value)
    }
}
