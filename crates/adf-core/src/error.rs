//! Error types for ADF
//!
//! Every fatal error carries the source location (path or URL) and, where it
//! applies, the offending line or token, so failures are diagnosable without
//! re-running under a debugger.

use thiserror::Error;

/// Result type alias for ADF operations
pub type Result<T> = std::result::Result<T, AssetError>;

/// Main error type for asset file loading
#[derive(Error, Debug)]
pub enum AssetError {
    /// Reading the source failed (missing file, permissions, HTTP error)
    #[error("Failed to read source '{location}': {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// No `@` declaration line anywhere in the file
    #[error("Column declaration not found in '{location}'. (Did you forget the '@'?)")]
    MissingColumnDeclaration { location: String },

    /// A declaration token had no `:` type separator
    #[error("Type hint not found for column '{token}' in '{location}'. Expected 'name:type'.")]
    MissingTypeHint { token: String, location: String },

    /// A declaration token named a type outside the closed set
    #[error("Invalid type '{name}' in column declaration in '{location}'. Expected one of: str, int, float, bool.")]
    UnknownType { name: String, location: String },

    /// A data field could not be coerced to its declared column type
    #[error("Line {line_number} in '{location}': cannot coerce '{value}' for column '{column}': {reason}")]
    FieldCoercion {
        line_number: usize,
        column: String,
        value: String,
        reason: String,
        location: String,
    },

    /// A data line yielded a different field count than the declared columns
    #[error("Line {line_number} in '{location}': expected {expected} fields, got {actual}")]
    RowArity {
        line_number: usize,
        expected: usize,
        actual: usize,
        location: String,
    },

    /// Writing updated content back to the local store failed
    #[error("Failed to persist updated content to '{location}': {source}")]
    PersistFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },
}
