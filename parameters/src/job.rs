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

//! Job files describing the parameters a job accepts.
//!
//! [`JobConfig::try_default()`] follows an ordered priority for searching for
//! a job file.
//!
//! 1. ./vsp.toml
//! 2. ${HOME}/.vsp/job.toml
//! 3. /etc/vsp/job.toml
//!
//! ```toml
//! name = "deploy"
//!
//! [[parameters]]
//! type = "validatingString"
//! name = "BRANCH"
//! default_value = "main"
//! regex = "[a-z][a-z0-9-]*"
//! failed_validation_message = "Branch names are lower case"
//! ```

use crate::{
    ParameterDefinition, ParameterError, ParameterValue,
    ValidatedParameterDescriptor, ValidatingPasswordParameterDefinition,
    ValidatingStringParameterDefinition,
};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use tracing::{debug, warn};
use validation::{ValidationError, PARAMETER_NAME_PATTERN};

#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ConfiguredParameter>,
}

/// A parameter definition as written in a job file, tagged by the
/// descriptor's symbol.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ConfiguredParameter {
    #[serde(rename = "validatingString")]
    String(ValidatingStringParameterDefinition),
    #[serde(rename = "validatingPassword")]
    Password(ValidatingPasswordParameterDefinition),
}

impl ConfiguredParameter {
    pub fn name(&self) -> &str {
        match self {
            Self::String(d) => d.name(),
            Self::Password(d) => d.name(),
        }
    }

    pub fn regex(&self) -> &str {
        match self {
            Self::String(d) => d.regex(),
            Self::Password(d) => d.regex(),
        }
    }

    pub fn descriptor(&self) -> &'static dyn ValidatedParameterDescriptor {
        match self {
            Self::String(d) => d.descriptor(),
            Self::Password(d) => d.descriptor(),
        }
    }

    pub fn default_parameter_value(&self) -> Box<dyn ParameterValue> {
        match self {
            Self::String(d) => Box::new(d.default_parameter_value()),
            Self::Password(d) => Box::new(d.default_parameter_value()),
        }
    }

    pub fn create_value_for_cli(
        &self,
        value: Option<&str>,
    ) -> Result<Box<dyn ParameterValue>, ParameterError> {
        Ok(match self {
            Self::String(d) => Box::new(d.create_value_for_cli(value)?),
            Self::Password(d) => Box::new(d.create_value_for_cli(value)?),
        })
    }
}

impl JobConfig {
    /// Attempt to easy-load a job file from well-known locations.
    pub fn try_default() -> Result<Self> {
        let mut search_paths = vec!["./vsp.toml".to_string()];
        if let Ok(home) = std::env::var("HOME") {
            search_paths.push(format!("{home}/.vsp/job.toml"));
        }
        search_paths.push("/etc/vsp/job.toml".to_string());

        for path in &search_paths {
            match Self::parse_from_toml_file(path) {
                Ok(config) => {
                    debug!(path = %path, "loaded job file");
                    return Ok(config);
                }
                Err(e) => {
                    warn!("failed to parse job file at {path}: {e}");
                    continue;
                }
            }
        }

        Err(anyhow!("unable to find valid job file"))
    }

    /// Attempt to parse a job file into memory.
    pub fn parse_from_toml_file<P: AsRef<Path>>(path: P) -> Result<JobConfig> {
        let mut config_toml = String::new();
        let mut file = File::open(path)?;

        if file
            .read_to_string(&mut config_toml)
            .with_context(|| "could not read job toml")?
            == 0
        {
            return Err(anyhow!("empty job file"));
        }

        JobConfig::parse_from_toml(&config_toml)
    }

    pub fn parse_from_toml(config_toml: &str) -> Result<JobConfig> {
        let config: JobConfig = toml::from_str(config_toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks what the parameter types themselves cannot: names are present,
    /// usable as environment variables and unique within the job, and every
    /// regex compiles.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let _ = validation::required_not_blank(Some(&self.name), "name", None)?;

        for (i, parameter) in self.parameters.iter().enumerate() {
            let parent = format!("parameters[{i}]");
            let name = validation::required_not_blank(
                Some(parameter.name()),
                "name",
                Some(parent.as_str()),
            )?;
            validation::allow_regex(
                name,
                &PARAMETER_NAME_PATTERN,
                "name",
                Some(parent.as_str()),
            )?;
            let _ = validation::valid_regex(
                parameter.regex(),
                "regex",
                Some(parent.as_str()),
            )?;
        }

        validation::unique(
            self.parameters.iter().map(ConfiguredParameter::name),
            "name",
            Some("parameters"),
        )
    }

    pub fn parameter(&self, name: &str) -> Option<&ConfiguredParameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Resolves `NAME=VALUE` arguments given on the command line into one
    /// value per configured parameter, in configuration order. Parameters
    /// without an argument get their default.
    pub fn resolve_cli_arguments(
        &self,
        arguments: &[(String, String)],
    ) -> Result<Vec<Box<dyn ParameterValue>>, ParameterError> {
        if let Some((name, _)) =
            arguments.iter().find(|(name, _)| self.parameter(name).is_none())
        {
            return Err(ParameterError::Abort {
                message: format!("'{name}' is not a valid parameter of job '{}'", self.name),
            });
        }

        self.parameters
            .iter()
            .map(|parameter| {
                let argument = arguments
                    .iter()
                    .rev()
                    .find(|(name, _)| name == parameter.name())
                    .map(|(_, value)| value.as_str());
                parameter.create_value_for_cli(argument)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INPUT: &str = r#"
name = "deploy"

[[parameters]]
type = "validatingString"
name = "BRANCH"
default_value = "main"
regex = "[a-z][a-z0-9-]*"
failed_validation_message = "Branch names are lower case"
description = "Branch to deploy"

[[parameters]]
type = "validatingPassword"
name = "TOKEN"
regex = "[A-Za-z0-9]{8,}"
"#;

    fn arguments(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn can_parse_toml_job() {
        let config = JobConfig::parse_from_toml(INPUT).unwrap();
        assert_eq!(config.name, "deploy");
        assert_eq!(config.parameters.len(), 2);

        let ConfiguredParameter::String(branch) = &config.parameters[0] else {
            panic!("expected ConfiguredParameter::String");
        };
        assert_eq!(branch.default_value(), "main");
        assert_eq!(branch.failed_validation_message(), Some("Branch names are lower case"));
        assert_eq!(branch.description(), Some("Branch to deploy"));

        let ConfiguredParameter::Password(token) = &config.parameters[1] else {
            panic!("expected ConfiguredParameter::Password");
        };
        assert_eq!(token.failed_validation_message(), None);
        assert_eq!(config.parameters[1].descriptor().symbol(), "validatingPassword");
    }

    #[test]
    fn rejects_unknown_parameter_type() {
        let input = r#"
name = "deploy"

[[parameters]]
type = "choice"
name = "BRANCH"
regex = ".*"
"#;
        assert!(JobConfig::parse_from_toml(input).is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let input = format!("{INPUT}{}", r#"
[[parameters]]
type = "validatingString"
name = "BRANCH"
regex = ".*"
"#);
        let config: JobConfig = toml::from_str(&input).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Duplicate { value, .. }) if value == "BRANCH"
        ));
    }

    #[test]
    fn rejects_malformed_regex() {
        let input = r#"
name = "deploy"

[[parameters]]
type = "validatingString"
name = "BRANCH"
regex = "(dddd"
"#;
        let config: JobConfig = toml::from_str(input).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRegex { field, .. }) if field == "parameters[0].regex"
        ));
    }

    #[test]
    fn rejects_unusable_names() {
        for name in ["", "  ", "A=B"] {
            let input = format!(
                "name = \"deploy\"\n[[parameters]]\ntype = \"validatingString\"\nname = \"{name}\"\nregex = \".*\"\n"
            );
            let config: JobConfig = toml::from_str(&input).unwrap();
            assert!(config.validate().is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn resolves_cli_arguments() {
        let config = JobConfig::parse_from_toml(INPUT).unwrap();
        let values = config
            .resolve_cli_arguments(&arguments(&[("TOKEN", "abcd1234")]))
            .unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name(), "BRANCH");
        assert_eq!(values[0].expose_value(), "main");
        assert_eq!(values[1].name(), "TOKEN");
        assert_eq!(values[1].expose_value(), "abcd1234");
    }

    #[test]
    fn resolve_cli_arguments_last_one_wins() {
        let config = JobConfig::parse_from_toml(INPUT).unwrap();
        let values = config
            .resolve_cli_arguments(&arguments(&[("BRANCH", "one"), ("BRANCH", "two")]))
            .unwrap();

        assert_eq!(values[0].expose_value(), "two");
    }

    #[test]
    fn resolve_cli_arguments_aborts_on_mismatch() {
        let config = JobConfig::parse_from_toml(INPUT).unwrap();
        let err = config
            .resolve_cli_arguments(&arguments(&[("BRANCH", "Main")]))
            .unwrap_err();

        assert!(matches!(
            err,
            ParameterError::Abort { message } if message == "Branch names are lower case"
        ));
    }

    #[test]
    fn resolve_cli_arguments_rejects_unknown_parameter() {
        let config = JobConfig::parse_from_toml(INPUT).unwrap();
        let err = config
            .resolve_cli_arguments(&arguments(&[("BRANCHES", "main")]))
            .unwrap_err();

        assert_eq!(err.message(), "'BRANCHES' is not a valid parameter of job 'deploy'");
    }
}
