//! Error types for build-settings operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build-settings operations
pub type Result<T> = std::result::Result<T, BuildSetError>;

/// Main error type for all build-settings operations
#[derive(Error, Debug)]
pub enum BuildSetError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Build path template errors
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// A required key is absent from a configuration section
    #[error("Missing key '{key}' in configuration section")]
    MissingKey {
        /// The key that was looked up
        key: String,
    },

    /// A configuration value has the wrong shape for the requested type
    #[error("Type mismatch for key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        /// The key that was looked up
        key: String,
        /// Type the caller asked for
        expected: &'static str,
        /// Type actually stored under the key
        found: &'static str,
    },

    /// Platform group string not recognized
    #[error("Unknown platform group '{0}': expected standalone, android, ios, or webgl")]
    UnknownPlatformGroup(String),

    /// Editor binary could not be resolved
    #[error("Editor binary not found at {}", path.display())]
    EditorNotFound {
        /// The path that was probed
        path: PathBuf,
    },

    /// Editor process exited with a failure status
    #[error("Editor build failed (exit code {code:?}): {excerpt}")]
    EditorFailed {
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Tail of the combined editor output
        excerpt: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}
