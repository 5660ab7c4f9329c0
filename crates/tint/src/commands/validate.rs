//! `tint validate` command implementation.

use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl ValidateArgs {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` when any structural warning is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markdown = self.input.read()?;
        let report = tint_markdown::validate_markdown(&markdown);

        if self.json {
            output.json(&report)?;
        } else if report.is_valid() {
            output.success("No structural problems found.");
        } else {
            for message in report.messages() {
                output.warning(&format!("  - {message}"));
            }
        }

        if report.is_valid() {
            Ok(())
        } else {
            Err(CliError::Validation(format!(
                "{} structural warning(s)",
                report.errors.len()
            )))
        }
    }
}
