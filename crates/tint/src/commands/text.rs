//! `tint plain` and `tint chat` command implementations.

use clap::Args;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the plain command.
#[derive(Args)]
pub(crate) struct PlainArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl PlainArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown = self.input.read()?;
        Output::new().data(&tint_markdown::to_plain_text(&markdown))
    }
}

/// Arguments for the chat command.
#[derive(Args)]
pub(crate) struct ChatArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl ChatArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let message = self.input.read()?;
        Output::new().data(&tint_markdown::format_conversation_message(&message))
    }
}
