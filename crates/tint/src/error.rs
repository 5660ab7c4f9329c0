//! CLI error types.

use tint_config::ConfigError;
use tint_design::DesignError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Design(#[from] DesignError),

    #[error("{0}")]
    Validation(String),
}
