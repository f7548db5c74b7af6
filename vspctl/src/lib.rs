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

//! A command line tool named "vspctl" for validating parameters.
//!
//! It exposes the same checks the parameter forms run while a job is being
//! configured, and submits builds from the command line the way a trigger
//! would: arguments are turned into values through the command line path and
//! every guard runs before the build environment is handed out.

// Lint groups: https://doc.rust-lang.org/rustc/lints/groups.html
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![warn(clippy::unwrap_used)]

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use parameters::{
    prepare_build, BuildContext, FormValidation, JobConfig, ParameterValue,
    StringParameterDescriptor, ValidatedParameterDescriptor,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct VspctlOptions {
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that a regular expression compiles.
    CheckRegex {
        pattern: String,
        /// Print the result as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Validate a value against a regular expression.
    Validate {
        #[clap(long)]
        regex: String,
        /// Message reported instead of the generated one.
        #[clap(long)]
        message: Option<String>,
        value: String,
        /// Print the result as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Submit a build of a job with NAME=VALUE parameters.
    Build {
        /// Job file, searched for in the well-known locations when omitted.
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short = 'p', long = "parameter", value_parser = parse_key_val)]
        parameters: Vec<(String, String)>,
        #[clap(long, default_value_t = 1)]
        number: u64,
    },
    /// List the parameters a job accepts.
    Show {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid NAME=VALUE: no `=` found in `{s}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn load(config: Option<PathBuf>) -> Result<JobConfig> {
    match config {
        Some(path) => JobConfig::parse_from_toml_file(path),
        None => JobConfig::try_default(),
    }
}

fn report<W: Write>(out: &mut W, result: &FormValidation, json: bool) -> Result<bool> {
    if json {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(result.is_ok())
}

/// Runs a command, writing its output to `out`.
///
/// Returns `Ok(false)` when the command ran but reported a problem, such as
/// a value that does not match.
pub fn execute<W: Write>(command: Command, out: &mut W) -> Result<bool> {
    match command {
        Command::CheckRegex { pattern, json } => {
            let result = StringParameterDescriptor.check_regex(&pattern);
            report(out, &result, json)
        }
        Command::Validate { regex, message, value, json } => {
            let result = StringParameterDescriptor.validate(
                &regex,
                message.as_deref(),
                &value,
            );
            report(out, &result, json)
        }
        Command::Build { config, parameters, number } => {
            let job = load(config)?;
            let context = BuildContext::new(job.name.clone(), number);

            let values = match job.resolve_cli_arguments(&parameters) {
                Ok(values) => values,
                Err(e) => {
                    writeln!(out, "ERROR: {e}")?;
                    return Ok(false);
                }
            };

            let env = match prepare_build(&context, &values) {
                Ok(env) => env,
                Err(e) => {
                    writeln!(out, "ERROR: {e}")?;
                    return Ok(false);
                }
            };
            debug!(variables = env.len(), "build environment prepared");
            info!(job = context.job(), number, "build may proceed");

            for value in &values {
                writeln!(out, "{}={}", value.name(), value.display_value())?;
            }
            Ok(true)
        }
        Command::Show { config } => {
            let job = load(config)?;
            writeln!(out, "{}", job.name)?;
            for parameter in &job.parameters {
                let default = parameter.default_parameter_value();
                writeln!(
                    out,
                    "  {} ({}) regex={} default={}",
                    parameter.name(),
                    parameter.descriptor().symbol(),
                    parameter.regex(),
                    default.display_value()
                )?;
            }
            Ok(true)
        }
    }
}
