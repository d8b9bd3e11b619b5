//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the shell and its content loader.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Channel send error: receiver dropped")]
    ChannelClosed,
}

/// Convenience alias for `Result<T, ShellError>`.
pub type Result<T> = std::result::Result<T, ShellError>;
