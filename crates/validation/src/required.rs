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
use super::ValidationError;

pub fn required<T>(
    value: Option<T>,
    field_name: &str,
    parent_name: Option<&str>,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::Required {
        field: super::field_name(field_name, parent_name),
    })
}

/// Like [required], but an empty or whitespace only value counts as missing.
pub fn required_not_blank<T: AsRef<str>>(
    value: Option<T>,
    field_name: &str,
    parent_name: Option<&str>,
) -> Result<T, ValidationError> {
    let value = required(value, field_name, parent_name)?;

    if value.as_ref().trim().is_empty() {
        return Err(ValidationError::Required {
            field: super::field_name(field_name, parent_name),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(matches!(required(Some(3), "retries", None), Ok(3)));

        assert!(matches!(
            required(None::<u32>, "retries", Some("job")),
            Err(ValidationError::Required { field }) if field == "job.retries"
        ));
    }

    #[test]
    fn test_required_not_blank() {
        assert!(matches!(
            required_not_blank(Some("BRANCH"), "name", None),
            Ok(x) if x == "BRANCH"
        ));

        assert!(matches!(
            required_not_blank(None::<String>, "name", None),
            Err(ValidationError::Required { .. })
        ));

        assert!(matches!(
            required_not_blank(Some(""), "name", None),
            Err(ValidationError::Required { .. })
        ));

        assert!(matches!(
            required_not_blank(Some(" \t"), "name", None),
            Err(ValidationError::Required { .. })
        ));
    }
}
