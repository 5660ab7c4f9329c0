//! `tint recommend` command implementation.

use std::path::Path;

use clap::Args;
use tint_config::Config;
use tint_design::Selections;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the recommend command.
#[derive(Args)]
pub(crate) struct RecommendArgs {
    /// Desired mood (e.g. Playful, Minimalist, Bold, Elegant, Modern).
    #[arg(long)]
    mood: Option<String>,

    /// Color family (e.g. Blue, Purple, Green, Orange, Red, Neutral).
    #[arg(long)]
    color: Option<String>,

    /// Layout style (e.g. Clean, Grid-based, Traditional, Contemporary, Card-based).
    #[arg(long)]
    style: Option<String>,

    /// Target audience (e.g. "Tech professionals", Business, "Young adults").
    #[arg(long)]
    audience: Option<String>,

    /// Include premium features.
    #[arg(long)]
    premium: bool,

    /// Short project description.
    #[arg(short, long)]
    description: Option<String>,

    /// Format for the chat view instead of emitting markdown.
    #[arg(long)]
    chat: bool,
}

impl RecommendArgs {
    /// Execute the recommend command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let config = Config::load(config_path, None)?;
        let chat = self.chat;
        let selections = Selections {
            mood: self.mood,
            color_pref: self.color,
            style: self.style,
            audience: self.audience,
            premium: self.premium.then(|| "Yes".to_owned()),
            description: self.description,
        };

        let recommendation = tint_design::fallback_recommendation(&selections);
        let text = if chat {
            tint_markdown::format_conversation_message(&recommendation)
        } else {
            tint_markdown::sanitize(&recommendation, &config.markdown)
        };
        Output::new().data(&text)
    }
}
