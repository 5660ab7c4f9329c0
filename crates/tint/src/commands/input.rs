//! Arguments shared by commands that read markdown.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use tint_config::{CliSettings, Config};

use crate::error::CliError;

/// Input source: a file path, or stdin when omitted or `-`.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// File to read (default: stdin).
    file: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input as UTF-8.
    pub(crate) fn read(&self) -> Result<String, CliError> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => {
                tracing::debug!(path = %path.display(), "Reading input file");
                Ok(std::fs::read_to_string(path)?)
            }
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

/// Processing flags that override `[markdown]` config values.
#[derive(Args)]
pub(crate) struct OptionFlags {
    /// Keep raw HTML instead of escaping it.
    #[arg(long)]
    allow_html: bool,

    /// Skip the allow-list pass on generated HTML.
    #[arg(long)]
    no_sanitize_html: bool,

    /// Do not insert paragraph breaks between sentences.
    #[arg(long)]
    no_line_breaks: bool,

    /// Leave list markers and numbering untouched.
    #[arg(long)]
    no_format_lists: bool,

    /// Leave fenced code blocks untouched.
    #[arg(long)]
    no_highlight_code: bool,
}

impl OptionFlags {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            allow_html: self.allow_html.then_some(true),
            sanitize_html: self.no_sanitize_html.then_some(false),
            add_line_breaks: self.no_line_breaks.then_some(false),
            format_lists: self.no_format_lists.then_some(false),
            highlight_code: self.no_highlight_code.then_some(false),
        }
    }

    /// Load config with these flags applied on top.
    pub(crate) fn load_config(&self, config_path: Option<&Path>) -> Result<Config, CliError> {
        Ok(Config::load(config_path, Some(&self.cli_settings()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        flags: OptionFlags,
    }

    #[test]
    fn test_read_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        std::fs::write(&path, "# Title\n").unwrap();

        let cli = TestCli::try_parse_from(["tint", path.to_str().unwrap()]).unwrap();

        assert_eq!(cli.input.read().unwrap(), "# Title\n");
    }

    #[test]
    fn test_read_missing_file() {
        let cli = TestCli::try_parse_from(["tint", "/nonexistent/doc.md"]).unwrap();
        assert!(matches!(cli.input.read(), Err(CliError::Io(_))));
    }

    #[test]
    fn test_flags_only_override_when_set() {
        let cli = TestCli::try_parse_from(["tint", "--allow-html", "--no-line-breaks"]).unwrap();
        let settings = cli.flags.cli_settings();

        assert_eq!(settings.allow_html, Some(true));
        assert_eq!(settings.add_line_breaks, Some(false));
        assert_eq!(settings.sanitize_html, None);
        assert_eq!(settings.format_lists, None);
        assert_eq!(settings.highlight_code, None);
    }

    #[test]
    fn test_load_config_applies_flags() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tint.toml");
        std::fs::write(&path, "[markdown]\nformat_lists = false\n").unwrap();
        let cli = TestCli::try_parse_from(["tint", "--no-highlight-code"]).unwrap();

        let config = cli.flags.load_config(Some(&path)).unwrap();

        assert!(!config.markdown.format_lists);
        assert!(!config.markdown.highlight_code);
        assert!(config.markdown.add_line_breaks);
    }
}
