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

#![warn(clippy::unwrap_used)]

use clap::Parser;
use tracing::{error, trace};
use vspctl::{execute, logging, VspctlOptions};

const EXIT_OKAY: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn run() -> i32 {
    let options = VspctlOptions::parse();

    if let Err(e) = logging::init(options.verbose) {
        eprintln!("{e}");
        return EXIT_ERROR;
    }
    trace!("**Logging: Verbose Mode**");

    let mut stdout = std::io::stdout().lock();
    match execute(options.command, &mut stdout) {
        Ok(true) => EXIT_OKAY,
        Ok(false) => EXIT_ERROR,
        Err(e) => {
            error!("{e:?}");
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    }
}

fn main() {
    std::process::exit(run());
}
