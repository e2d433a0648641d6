//! Error types for MedVision.
//!
//! Startup errors (`ConfigError`) are fatal and stop the program before any
//! interaction. Analysis errors (`AnalysisError`) are scoped to a single
//! generate action and never leave the session unusable.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The API credential is absent or empty
    #[error("{var} not found. Set it in the environment or in a .env file.")]
    MissingCredential { var: String },

    /// The HTTP client could not be initialized
    #[error("Failed to initialize model client: {0}")]
    Client(String),
}

/// Errors scoped to one upload or one generate action.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The model call failed (transport, HTTP status, or response decoding)
    #[error("Model error: {message}")]
    Llm {
        message: String,
        status_code: Option<u16>,
    },

    /// The model call did not finish in time
    #[error("Model request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Uploaded file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Uploaded file exceeds the size limit
    #[error("File too large: {path} ({size_bytes} bytes, limit {max_bytes} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size_bytes: u64,
        max_bytes: u64,
    },

    /// Uploaded file is not one of the accepted image types
    #[error("Unsupported format for {path}: {format} (accepted: png, jpg, jpeg)")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// Uploaded file could not be read
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },
}
