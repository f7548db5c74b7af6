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
use fancy_regex::{Error, ParseError, Regex};
use std::fmt::{Display, Formatter};

/// A compiled regular expression that only accepts input it matches from the
/// first to the last character.
///
/// The source is kept as typed so messages can show it back to the user.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, Error> {
        // Compile the source untouched first, wrapping it can change where a
        // broken pattern fails.
        let _ = Regex::new(source)?;
        let anchored = match Regex::new(&format!("^(?:{source})$")) {
            Ok(anchored) => anchored,
            // A trailing `#` comment in free-spacing mode runs to the end of
            // the line and swallows the closing anchor.
            Err(_) => Regex::new(&format!("^(?:{source}\n)$"))?,
        };

        Ok(Self { source: source.to_string(), anchored })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Backtracking limits are treated as a mismatch.
    pub fn is_full_match(&self, value: &str) -> bool {
        matches!(self.anchored.is_match(value), Ok(true))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.source.fmt(f)
    }
}

/// Human readable reason a pattern failed to compile.
pub fn describe_regex_error(error: &Error) -> String {
    match error {
        Error::ParseError(ix, ParseError::UnclosedOpenParen) => {
            format!("Unclosed group near index {ix}")
        }
        Error::ParseError(ix, ParseError::InvalidClass) => {
            format!("Unclosed character class near index {ix}")
        }
        Error::ParseError(ix, ParseError::TrailingBackslash) => {
            format!("Unexpected trailing backslash near index {ix}")
        }
        other => other.to_string(),
    }
}
