//! `tint sections` command implementation.

use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl SectionsArgs {
    /// Print a JSON object mapping section slugs to titles, in document order.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = self.input.read()?;
        let sections = tint_markdown::extract_markdown_sections(&markdown);
        Output::new().json(&sections)
    }
}
