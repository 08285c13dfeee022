//! Error types for mezzpress-core operations.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for mezzpress
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("{0} exited with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),
}

/// Result type for mezzpress operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for the named external tool.
pub fn command_start_error<S: Into<String>>(tool: S, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

/// Builds a `CommandFailed` error for the named external tool.
pub fn command_failed_error<S: Into<String>, M: Into<String>>(
    tool: S,
    status: ExitStatus,
    stderr: M,
) -> CoreError {
    CoreError::CommandFailed(tool.into(), status, stderr.into())
}
