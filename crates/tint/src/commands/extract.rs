//! `tint extract` command implementation.

use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the extract command.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Prompt text (default: read from FILE or stdin).
    #[arg(short, long)]
    prompt: Option<String>,

    #[command(flatten)]
    input: InputArgs,
}

impl ExtractArgs {
    /// Print inferred design parameters as JSON, or `null` when the prompt
    /// is not a design request.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let prompt = match self.prompt {
            Some(prompt) => prompt,
            None => self.input.read()?,
        };

        let params = tint_design::extract_design_parameters(&prompt);
        if params.is_none() {
            output.warning("Prompt does not look like a design request.");
        }
        output.json(&params)
    }
}
