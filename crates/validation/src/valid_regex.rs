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
use super::{describe_regex_error, Pattern, ValidationError};

/// Compiles `pattern`, reporting the engine's reason when it is malformed.
pub fn valid_regex(
    pattern: &str,
    field_name: &str,
    parent_name: Option<&str>,
) -> Result<Pattern, ValidationError> {
    Pattern::new(pattern).map_err(|e| ValidationError::InvalidRegex {
        field: super::field_name(field_name, parent_name),
        pattern: pattern.to_string(),
        reason: describe_regex_error(&e),
    })
}
