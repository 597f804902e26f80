//! Error types for connecting and running scripts.

use std::path::PathBuf;

/// Errors that can occur while configuring a connection or running batches.
#[derive(Debug, thiserror::Error)]
pub enum SpeakerError {
    /// Database error while connecting or executing.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (reading scripts or config files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A config file exists but could not be parsed.
    #[error("Invalid config file '{path}': {source}")]
    Config {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// No server was given on the command line or in the config file.
    #[error("No server specified")]
    MissingServer,

    /// A batch failed and execution stopped.
    #[error("Batch {index} failed: {source}")]
    BatchFailed {
        /// Zero-based position of the batch in the script.
        index: usize,
        /// What went wrong.
        source: Box<SpeakerError>,
    },

    /// Multiple errors occurred.
    #[error("Multiple errors occurred:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Multiple(Vec<SpeakerError>),
}

/// Result type for sqlspeaker operations.
pub type Result<T> = std::result::Result<T, SpeakerError>;
