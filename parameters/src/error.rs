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

use validation::{describe_regex_error, Pattern};

#[derive(thiserror::Error, Debug)]
pub enum ParameterError {
    /// The configured pattern does not compile.
    #[error("Invalid regular expression [{pattern}]: {reason}")]
    InvalidRegex { pattern: String, reason: String },
    /// A submitted value did not match, raised by form and direct submissions.
    #[error("{message}")]
    Failure { message: String },
    /// A value did not match on the command line or at build time.
    #[error("{message}")]
    Abort { message: String },
    #[error("failed to bind form data for parameter [{name}]: {source}")]
    Binding {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ParameterError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Converts a submission failure into the kind the command line reports.
    pub(crate) fn into_abort(self) -> Self {
        match self {
            Self::Failure { message } => Self::Abort { message },
            other => other,
        }
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Pattern, ParameterError> {
    Pattern::new(pattern).map_err(|e| ParameterError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: describe_regex_error(&e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_reports_reason() {
        let err = compile("(dddd").expect_err("pattern is malformed");
        assert!(matches!(
            &err,
            ParameterError::InvalidRegex { pattern, reason }
                if pattern == "(dddd" && reason.contains("Unclosed")
        ));
        assert!(err.message().starts_with("Invalid regular expression [(dddd]: "));
    }

    #[test]
    fn test_into_abort() {
        let err = ParameterError::Failure { message: "Test failed".into() };
        assert!(matches!(
            err.into_abort(),
            ParameterError::Abort { message } if message == "Test failed"
        ));

        let err = ParameterError::InvalidRegex {
            pattern: "(".into(),
            reason: "Unclosed group near index 1".into(),
        };
        assert!(matches!(err.into_abort(), ParameterError::InvalidRegex { .. }));
    }
}
