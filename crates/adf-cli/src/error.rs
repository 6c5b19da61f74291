//! Error types for the ADF CLI
//!
//! Errors shown to users carry enough context to act on without re-running
//! with `--verbose`.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading or updating an asset file failed
    #[error("{0}")]
    Asset(#[from] adf_core::AssetError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// JSON output serialization failed
    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
