//! tint CLI - markdown sanitizer and design assistant.
//!
//! Provides commands for:
//! - `sanitize`, `html`, `plain`, `chat`: Convert markdown
//! - `sections`, `validate`: Inspect markdown
//! - `extract`, `recommend`, `palettes`, `questionnaire`: Design fallbacks

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    ChatArgs, ExtractArgs, HtmlArgs, PalettesArgs, PlainArgs, QuestionnaireArgs, RecommendArgs,
    SanitizeArgs, SectionsArgs, ValidateArgs,
};
use output::Output;

/// tint - Markdown sanitizer and design assistant.
#[derive(Parser)]
#[command(name = "tint", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover tint.toml).
    #[arg(short, long, global = true, env = "TINT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize markdown and strip harmful content.
    Sanitize(SanitizeArgs),
    /// Render markdown to an allow-listed HTML fragment.
    Html(HtmlArgs),
    /// Strip markdown down to plain text.
    Plain(PlainArgs),
    /// Format a chat message for display.
    Chat(ChatArgs),
    /// List section headers as JSON.
    Sections(SectionsArgs),
    /// Check markdown for structural problems.
    Validate(ValidateArgs),
    /// Infer design parameters from a prompt.
    Extract(ExtractArgs),
    /// Write a design recommendation from selections.
    Recommend(RecommendArgs),
    /// Generate palette and font recommendations from design answers.
    Palettes(PalettesArgs),
    /// Answer the design questionnaire interactively.
    Questionnaire(QuestionnaireArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Sanitize(args) => args.execute(config),
        Commands::Html(args) => args.execute(config),
        Commands::Plain(args) => args.execute(),
        Commands::Chat(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
        Commands::Recommend(args) => args.execute(config),
        Commands::Palettes(args) => args.execute(),
        Commands::Questionnaire(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
