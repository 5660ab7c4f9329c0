//! `tint html` command implementation.

use std::path::Path;

use clap::Args;

use super::input::{InputArgs, OptionFlags};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the html command.
#[derive(Args)]
pub(crate) struct HtmlArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    flags: OptionFlags,
}

impl HtmlArgs {
    /// Execute the html command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be read.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = self.flags.load_config(config_path)?;
        let markdown = self.input.read()?;
        let allow_list = config.html.allow_list();
        let html = tint_markdown::to_html_with(&markdown, &config.markdown, &allow_list);
        Output::new().data(&html)
    }
}
