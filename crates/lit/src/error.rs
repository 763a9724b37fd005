//! CLI error types.

use lit_config::ConfigError;
use lit_language::ProfileError;
use lit_site::SetupError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid language in configuration: {0}")]
    Language(#[from] ProfileError),

    #[error("{0}")]
    Setup(#[from] SetupError),
}
