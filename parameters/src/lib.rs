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

//! Build parameters whose submitted value must match an administrator
//! supplied regular expression before a build may start.
//!
//! A [ParameterDefinition] is the configured description of a parameter on a
//! job. Every call that produces a [ParameterValue] validates the submitted
//! input and returns a [ParameterError] instead of a value when it does not
//! fully match. Values carry the pattern they were validated against so the
//! build lifecycle can check them again through [ParameterValue::guard].
//!
//! The form endpoints used for live feedback while a job is being configured
//! or a build is being submitted live on [ValidatedParameterDescriptor].

// Lint groups: https://doc.rust-lang.org/rustc/lints/groups.html
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    unconditional_recursion,
    unused_comparisons,
    while_true
)]
#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![warn(clippy::unwrap_used)]

pub use descriptor::{
    PasswordParameterDescriptor, StringParameterDescriptor,
    ValidatedParameterDescriptor,
};
pub use error::ParameterError;
pub use form_validation::FormValidation;
pub use job::{ConfiguredParameter, JobConfig};
pub use js_escape::js_escape;
pub use lifecycle::{
    prepare_build, BuildContext, BuildEnvironment, GuardDecision,
};
pub use parameter::{ParameterDefinition, ParameterValue};
pub use password::{
    ValidatingPasswordParameterDefinition, ValidatingPasswordParameterValue,
};
pub use string::{
    ValidatingStringParameterDefinition, ValidatingStringParameterValue,
};

mod descriptor;
mod error;
mod form_validation;
mod job;
mod js_escape;
mod lifecycle;
mod parameter;
mod password;
mod string;
