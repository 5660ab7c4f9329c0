//! `tint sanitize` command implementation.

use std::path::Path;

use clap::Args;

use super::input::{InputArgs, OptionFlags};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sanitize command.
#[derive(Args)]
pub(crate) struct SanitizeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    flags: OptionFlags,
}

impl SanitizeArgs {
    /// Execute the sanitize command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be read.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = self.flags.load_config(config_path)?;
        let markdown = self.input.read()?;
        Output::new().data(&tint_markdown::sanitize(&markdown, &config.markdown))
    }
}
