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

use parameters::{
    FormValidation, ParameterDefinition, ParameterError,
    ValidatedParameterDescriptor, ValidatingStringParameterDefinition,
};
use simple_test_case::test_case;

// The live form feedback and the submission must agree on every input.
#[test_case("^[a-z]*$", "test"; "matching")]
#[test_case("^[a-z]*$", "000"; "digits")]
#[test_case("[a-z]+", "abc123"; "prefix only")]
#[test_case("\\d{3}", "123"; "exact count")]
#[test_case("\\d{3}", "1234"; "too many")]
#[test_case("foo|foobar", "foobar"; "longer alternative")]
#[test]
fn form_endpoints_must_match_submission_rules(regex: &str, value: &str) {
    let definition = ValidatingStringParameterDefinition::new(
        "PARAM",
        "",
        regex,
        Some("Test failed".into()),
        None,
    );

    let form = definition.descriptor().validate(
        regex,
        definition.failed_validation_message(),
        value,
    );
    let submitted = definition.create_value(Some(value));

    match form {
        FormValidation::Ok => {
            assert!(submitted.is_ok());
        }
        FormValidation::Error(message) => {
            assert_eq!(message, "Test failed");
            assert!(matches!(
                submitted,
                Err(ParameterError::Failure { message }) if message == "Test failed"
            ));
        }
    }
}

#[test]
fn form_endpoints_must_report_the_engine_reason() {
    let definition = ValidatingStringParameterDefinition::new(
        "PARAM", "", "(dddd", None, None,
    );
    let descriptor = definition.descriptor();

    let checked = descriptor.check_regex(definition.regex());
    let validated = descriptor.validate(definition.regex(), None, "dddd");

    assert!(checked.message().is_some_and(|m| m.contains("Unclosed")));
    assert!(validated.message().is_some_and(|m| m.contains("Unclosed")));
    assert!(matches!(
        definition.create_value(Some("dddd")),
        Err(ParameterError::InvalidRegex { reason, .. }) if reason.contains("Unclosed")
    ));
}
