//! Error types for rl-core

use thiserror::Error;

/// Core error type for Rowlift
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Source extract not found
    #[error("[E003] Source extract not found: {path}")]
    SourceNotFound { path: String },

    /// E004: Extract header does not satisfy the column contract
    #[error("[E004] Extract header mismatch in {path}: missing column '{column}'")]
    HeaderMismatch { column: String, path: String },

    /// E005: Batch artifact missing
    #[error("[E005] Batch artifact not found: {path}")]
    ArtifactMissing { path: String },

    /// E006: IO error
    #[error("[E006] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E007: IO error with file path context
    #[error("[E007] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E008: CSV error
    #[error("[E008] CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// E009: YAML parse error
    #[error("[E009] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
