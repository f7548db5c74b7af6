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

use crate::FormValidation;
use tracing::debug;
use validation::{describe_regex_error, Pattern};

/// Form endpoints and metadata shared by every validating parameter type.
///
/// The check endpoints are side effect free and are called with whatever the
/// user has typed so far, so they never fail, they only report.
pub trait ValidatedParameterDescriptor: Send + Sync {
    fn display_name(&self) -> &'static str;

    /// Name used to refer to the parameter type from pipeline definitions.
    fn symbol(&self) -> &'static str;

    fn help_file(&self) -> &'static str;

    /// Check the regular expression entered by the job administrator.
    fn check_regex(&self, value: &str) -> FormValidation {
        match Pattern::new(value) {
            Ok(_) => FormValidation::ok(),
            Err(e) => FormValidation::error(format!(
                "Invalid regular expression: {}",
                describe_regex_error(&e)
            )),
        }
    }

    /// Validate a value entered by the user against the configured regular
    /// expression.
    fn validate(
        &self,
        regex: &str,
        failed_validation_message: Option<&str>,
        value: &str,
    ) -> FormValidation {
        let pattern = match Pattern::new(regex) {
            Ok(pattern) => pattern,
            Err(e) => {
                return FormValidation::error(format!(
                    "Invalid regular expression [{regex}]: {}",
                    describe_regex_error(&e)
                ))
            }
        };

        if pattern.is_full_match(value) {
            FormValidation::ok()
        } else {
            debug!(regex, "form value does not match");
            FormValidation::error(failure_message(
                failed_validation_message,
                regex,
            ))
        }
    }
}

/// The custom message when one is configured, a generated one otherwise.
pub(crate) fn failure_message(
    failed_validation_message: Option<&str>,
    regex: &str,
) -> String {
    match failed_validation_message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("Value entered does not match regular expression: {regex}"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringParameterDescriptor;

impl ValidatedParameterDescriptor for StringParameterDescriptor {
    fn display_name(&self) -> &'static str {
        "Validating String Parameter"
    }

    fn symbol(&self) -> &'static str {
        "validatingString"
    }

    fn help_file(&self) -> &'static str {
        "/plugin/validating-string-parameter/help-string.html"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordParameterDescriptor;

impl ValidatedParameterDescriptor for PasswordParameterDescriptor {
    fn display_name(&self) -> &'static str {
        "Validating Password Parameter"
    }

    fn symbol(&self) -> &'static str {
        "validatingPassword"
    }

    fn help_file(&self) -> &'static str {
        "/plugin/validating-string-parameter/help-password.html"
    }
}
