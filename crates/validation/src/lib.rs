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
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(clippy::unwrap_used)]

//! Field level validators shared by the parameter types.
//!
//! Every validator takes the raw input, the name of the field being validated
//! and optionally the name of the structure holding it, so errors can point
//! at `parent.field`.

#[cfg(feature = "regex")]
pub use self::allow_regex::allow_regex;
#[cfg(feature = "regex")]
pub use self::pattern::{describe_regex_error, Pattern};
pub use self::required::{required, required_not_blank};
pub use self::unique::unique;
#[cfg(feature = "regex")]
pub use self::valid_regex::valid_regex;
#[cfg(feature = "regex")]
use lazy_static::lazy_static;

#[cfg(feature = "regex")]
mod allow_regex;
#[cfg(feature = "regex")]
mod pattern;
mod required;
mod unique;
#[cfg(feature = "regex")]
mod valid_regex;

#[cfg(feature = "regex")]
lazy_static! {
    /// Parameter names end up as environment variable names, so `=` is never
    /// allowed and surrounding whitespace is rejected.
    pub static ref PARAMETER_NAME_PATTERN: Pattern =
        Pattern::new(r"[^\s=]([^=]*[^\s=])?")
            .expect("failed to parse 'PARAMETER_NAME_PATTERN'");
}

pub fn field_name(field_name: &str, parent_name: Option<&str>) -> String {
    match parent_name {
        None => field_name.to_string(),
        Some(parent_name) => format!("{parent_name}.{field_name}"),
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field = {field}; Required")]
    Required { field: String },
    #[error("Field = {field}; Duplicate = {value}")]
    Duplicate { field: String, value: String },
    #[cfg(feature = "regex")]
    #[error("Field = {field}; Invalid regular expression [{pattern}]: {reason}")]
    InvalidRegex { field: String, pattern: String, reason: String },
    #[cfg(feature = "regex")]
    #[error("Field = {field}; Regex = {pattern}")]
    AllowRegexViolation { field: String, pattern: String },
}

impl ValidationError {
    pub fn get_field(&self) -> &str {
        match self {
            Self::Required { field } | Self::Duplicate { field, .. } => field,
            #[cfg(feature = "regex")]
            Self::InvalidRegex { field, .. }
            | Self::AllowRegexViolation { field, .. } => field,
        }
    }
}
