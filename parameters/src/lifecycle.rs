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

//! The parts of a build's lifecycle parameter values take part in.

use crate::{ParameterError, ParameterValue};
use std::collections::btree_map::{BTreeMap, Iter};
use tracing::info_span;

/// What a value's guard decided for the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Abort { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    job: String,
    number: u64,
}

impl BuildContext {
    pub fn new<S: Into<String>>(job: S, number: u64) -> Self {
        Self { job: job.into(), number }
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

/// Environment variables handed to the build's steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment(BTreeMap<String, String>);

impl BuildEnvironment {
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let _ = self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sets up every parameter of a build and collects their environment.
///
/// All guards run before any value is injected, the first failing one aborts
/// the build.
pub fn prepare_build(
    context: &BuildContext,
    values: &[Box<dyn ParameterValue>],
) -> Result<BuildEnvironment, ParameterError> {
    let _span =
        info_span!("build", job = context.job(), number = context.number())
            .entered();

    for value in values {
        value.setup(context)?;
    }

    let mut env = BuildEnvironment::default();
    for value in values {
        value.build_environment(&mut env)?;
    }

    Ok(env)
}
