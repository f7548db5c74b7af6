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

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to set up logging: {source}")]
    SetupFailure {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Logs go to stderr, stdout is reserved for command output.
///
/// Normal mode: Warn, Error
/// Verbose mode: Debug, Trace, Info, Warn, Error
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let tracing_level = if verbose { Level::TRACE } else { Level::WARN };

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(tracing_level))
        .try_init()
        .map_err(|source| LoggingError::SetupFailure { source })
}

fn filter(tracing_level: Level) -> EnvFilter {
    EnvFilter::new(format!("vspctl={tracing_level},parameters={tracing_level}"))
}
