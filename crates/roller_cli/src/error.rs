//! CLI error types.

use roller_core::{ConfigError, SessionError};

/// Top-level error for CLI operations.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid session configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Session execution failed.
    #[error("session failed: {0}")]
    Session(#[from] SessionError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
