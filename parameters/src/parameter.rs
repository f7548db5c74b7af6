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

use crate::{
    BuildContext, BuildEnvironment, GuardDecision, ParameterError,
    ValidatedParameterDescriptor,
};
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::{debug, warn};
use validation::Pattern;

/// The configured description of a parameter on a job.
///
/// Every value producing call validates the raw input against the configured
/// regular expression. Absent or empty input always resolves to the default
/// value.
pub trait ParameterDefinition: Send + Sync {
    type Value: ParameterValue;

    fn name(&self) -> &str;

    fn description(&self) -> Option<&str>;

    fn descriptor(&self) -> &'static dyn ValidatedParameterDescriptor;

    fn default_parameter_value(&self) -> Self::Value;

    /// Creates a value from a plain string, such as a trigger argument.
    fn create_value(
        &self,
        value: Option<&str>,
    ) -> Result<Self::Value, ParameterError>;

    /// Creates a value from the structured data a parameter form submits.
    fn create_value_from_form(
        &self,
        form: &serde_json::Value,
    ) -> Result<Self::Value, ParameterError>;

    /// Creates a value from the request parameters submitted under this
    /// parameter's name. Only the first value is considered.
    fn create_value_from_request(
        &self,
        values: Option<&[String]>,
    ) -> Result<Self::Value, ParameterError> {
        match values.and_then(|values| values.first()) {
            None => Ok(self.default_parameter_value()),
            Some(value) => self.create_value(Some(value)),
        }
    }

    /// Creates a value from a command line argument. A mismatch is reported
    /// as [ParameterError::Abort].
    fn create_value_for_cli(
        &self,
        value: Option<&str>,
    ) -> Result<Self::Value, ParameterError> {
        self.create_value(value).map_err(ParameterError::into_abort)
    }
}

/// One concrete submission of a parameter for one build.
pub trait ParameterValue: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str>;

    /// The pattern the value was validated against. `None` means there is
    /// nothing left to check.
    fn regex(&self) -> Option<&str>;

    /// The raw value as handed to the build.
    fn expose_value(&self) -> &str;

    /// The value as it may appear in logs and messages.
    fn display_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.expose_value())
    }

    /// Checks the value against the pattern it carries.
    fn guard(&self) -> GuardDecision {
        let Some(regex) = self.regex() else {
            return GuardDecision::Proceed;
        };

        let matched = match Pattern::new(regex) {
            Ok(pattern) => pattern.is_full_match(self.expose_value()),
            Err(e) => {
                warn!(parameter = self.name(), regex, "carried regex does not compile: {e}");
                false
            }
        };

        if matched {
            debug!(parameter = self.name(), "guard passed");
            GuardDecision::Proceed
        } else {
            GuardDecision::Abort {
                message: format!(
                    "Invalid value for parameter [{}] specified: {}",
                    self.name(),
                    self.display_value()
                ),
            }
        }
    }

    /// Runs the guard when the build is set up.
    fn setup(&self, context: &BuildContext) -> Result<(), ParameterError> {
        match self.guard() {
            GuardDecision::Proceed => Ok(()),
            GuardDecision::Abort { message } => {
                warn!(
                    job = context.job(),
                    number = context.number(),
                    "aborting build: {message}"
                );
                Err(ParameterError::Abort { message })
            }
        }
    }

    /// Runs the guard again and exposes the value to the build.
    fn build_environment(
        &self,
        env: &mut BuildEnvironment,
    ) -> Result<(), ParameterError> {
        if let GuardDecision::Abort { message } = self.guard() {
            warn!("refusing to inject parameter: {message}");
            return Err(ParameterError::Abort { message });
        }

        env.insert(self.name(), self.expose_value());
        Ok(())
    }
}
