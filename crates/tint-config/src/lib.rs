//! Configuration management for tint.
//!
//! Parses `tint.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [markdown]
//! allow_html = false
//! add_line_breaks = true
//!
//! [html]
//! allowed_tags = ["p", "a", "strong"]
//! allowed_attributes = ["href"]
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tint_markdown::{AllowList, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS, MarkdownOptions};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub allow_html: Option<bool>,
    pub sanitize_html: Option<bool>,
    pub add_line_breaks: Option<bool>,
    pub format_lists: Option<bool>,
    pub highlight_code: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tint.toml";

/// Tags that can never be allow-listed.
const FORBIDDEN_TAGS: [&str; 5] = ["script", "style", "iframe", "object", "embed"];

/// Raw configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigRaw {
    markdown: MarkdownConfigRaw,
    html: HtmlConfigRaw,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MarkdownConfigRaw {
    allow_html: Option<bool>,
    sanitize_html: Option<bool>,
    add_line_breaks: Option<bool>,
    format_lists: Option<bool>,
    highlight_code: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HtmlConfigRaw {
    allowed_tags: Option<Vec<String>>,
    allowed_attributes: Option<Vec<String>>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Processing options for every markdown operation.
    pub markdown: MarkdownOptions,
    /// HTML allow-list policy.
    pub html: HtmlConfig,
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

/// HTML allow-list configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlConfig {
    pub allowed_tags: Vec<String>,
    pub allowed_attributes: Vec<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|&t| t.to_owned()).collect(),
            allowed_attributes: DEFAULT_ALLOWED_ATTRIBUTES
                .iter()
                .map(|&a| a.to_owned())
                .collect(),
        }
    }
}

impl HtmlConfig {
    /// Build the allow-list policy used by HTML rendering.
    #[must_use]
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(&self.allowed_tags, &self.allowed_attributes)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require an HTML name made of ASCII letters and digits.
fn require_html_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "{field} contains invalid name {value:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tint.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let options = &mut self.markdown;
        if let Some(allow_html) = settings.allow_html {
            options.allow_html = allow_html;
        }
        if let Some(sanitize_html) = settings.sanitize_html {
            options.sanitize_html = sanitize_html;
        }
        if let Some(add_line_breaks) = settings.add_line_breaks {
            options.add_line_breaks = add_line_breaks;
        }
        if let Some(format_lists) = settings.format_lists {
            options.format_lists = format_lists;
        }
        if let Some(highlight_code) = settings.highlight_code {
            options.highlight_code = highlight_code;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_from(&start)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for rejected values.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        let config = Self::resolve(raw);
        config.validate()?;
        Ok(config)
    }

    /// Fill unset fields from defaults.
    fn resolve(raw: ConfigRaw) -> Self {
        let defaults = MarkdownOptions::default();
        let markdown = MarkdownOptions {
            allow_html: raw.markdown.allow_html.unwrap_or(defaults.allow_html),
            sanitize_html: raw.markdown.sanitize_html.unwrap_or(defaults.sanitize_html),
            add_line_breaks: raw
                .markdown
                .add_line_breaks
                .unwrap_or(defaults.add_line_breaks),
            format_lists: raw.markdown.format_lists.unwrap_or(defaults.format_lists),
            highlight_code: raw.markdown.highlight_code.unwrap_or(defaults.highlight_code),
        };

        let default_html = HtmlConfig::default();
        let html = HtmlConfig {
            allowed_tags: raw.html.allowed_tags.unwrap_or(default_html.allowed_tags),
            allowed_attributes: raw
                .html
                .allowed_attributes
                .unwrap_or(default_html.allowed_attributes),
        };

        Self {
            markdown,
            html,
            config_path: None,
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_tags()?;
        self.validate_attributes()?;
        Ok(())
    }

    fn validate_tags(&self) -> Result<(), ConfigError> {
        for tag in &self.html.allowed_tags {
            require_html_name(tag, "html.allowed_tags")?;
            let lower = tag.to_ascii_lowercase();
            if FORBIDDEN_TAGS.contains(&lower.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "html.allowed_tags cannot include <{lower}>"
                )));
            }
        }
        Ok(())
    }

    fn validate_attributes(&self) -> Result<(), ConfigError> {
        for attribute in &self.html.allowed_attributes {
            require_html_name(attribute, "html.allowed_attributes")?;
            if attribute.to_ascii_lowercase().starts_with("on") {
                return Err(ConfigError::Validation(format!(
                    "html.allowed_attributes cannot include event handler {attribute:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.markdown, MarkdownOptions::default());
        assert!(config.html.allowed_tags.contains(&"strong".to_owned()));
        assert_eq!(
            config.html.allowed_attributes,
            vec!["href", "target", "rel", "class"]
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_markdown_section_partial() {
        let toml = r"
[markdown]
allow_html = true
add_line_breaks = false
";
        let config = Config::parse(toml).unwrap();
        assert_eq!(
            config.markdown,
            MarkdownOptions {
                allow_html: true,
                add_line_breaks: false,
                ..MarkdownOptions::default()
            }
        );
    }

    #[test]
    fn test_parse_html_section() {
        let toml = r#"
[html]
allowed_tags = ["p", "STRONG"]
allowed_attributes = ["href"]
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.html.allowed_tags, vec!["p", "STRONG"]);

        let allow_list = config.html.allow_list();
        assert!(allow_list.allows_tag("strong"));
        assert!(!allow_list.allows_tag("em"));
        assert!(allow_list.allows_attribute("href"));
        assert!(!allow_list.allows_attribute("class"));
    }

    #[test]
    fn test_forbidden_tag_rejected() {
        let toml = r#"
[html]
allowed_tags = ["p", "Script"]
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("<script>"));
    }

    #[test]
    fn test_event_handler_attribute_rejected() {
        let toml = r#"
[html]
allowed_attributes = ["href", "onclick"]
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(err.to_string().contains("onclick"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        for toml in [
            "[html]\nallowed_tags = [\"\"]",
            "[html]\nallowed_tags = [\"a b\"]",
            "[html]\nallowed_attributes = [\"data-x\"]",
        ] {
            let err = Config::parse(toml).unwrap_err();
            assert!(
                matches!(err, ConfigError::Validation(_)),
                "Expected ConfigError::Validation for {toml:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::parse("[markdown\nallow_html = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::parse("[markdown]\nallow_html = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(&path, "[markdown]\nformat_lists = false\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert!(!config.markdown.format_lists);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_discover_in_parent_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_from(&nested);

        assert_eq!(found, Some(tmp.path().join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[markdown]\nallow_html = true\nformat_lists = false\n").unwrap();
        let settings = CliSettings {
            allow_html: Some(false),
            highlight_code: Some(false),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert!(!config.markdown.allow_html);
        assert!(!config.markdown.highlight_code);
        assert!(!config.markdown.format_lists); // From file
        assert!(config.markdown.sanitize_html); // Default
    }
}
