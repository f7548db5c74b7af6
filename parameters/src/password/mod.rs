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

//! Password flavour of the validating parameter. The value is kept in a
//! [secrecy::SecretString] and never shows up in logs, messages or `Debug`
//! output.

pub use self::{
    definition::ValidatingPasswordParameterDefinition,
    value::ValidatingPasswordParameterValue,
};

mod definition;
mod value;

/// Placeholder the form submits when the user left the default untouched.
pub const DEFAULT_VALUE: &str = "<DEFAULT>";

const MASK: &str = "********";

fn empty_secret() -> secrecy::SecretString {
    secrecy::SecretString::new(String::new())
}

fn secret_or_empty<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<secrecy::SecretString, D::Error> {
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(secrecy::SecretString::new(value.unwrap_or_default()))
}
