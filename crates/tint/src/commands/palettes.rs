//! `tint palettes` command implementation.

use clap::Args;
use tint_design::DesignData;

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the palettes command.
#[derive(Args)]
pub(crate) struct PalettesArgs {
    /// JSON design answers, e.g. `{"colorPreference": "Blue", "theme": "Modern"}`.
    #[command(flatten)]
    input: InputArgs,
}

impl PalettesArgs {
    /// Print a JSON recommendation set for the given design answers.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Json` if the input is not a design answers object.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let design: DesignData = serde_json::from_str(&self.input.read()?)?;
        let set = tint_design::generate_recommendations(&design);
        Output::new().json(&set)
    }
}
