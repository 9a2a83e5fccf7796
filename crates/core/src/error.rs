//! Error types for s3tools-core
//!
//! Every failure of a copy or remove invocation is one of these variants.
//! None of them are retried at this layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for s3tools-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3tools operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed remote path syntax
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Transfer direction is ambiguous or the request cannot be served
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Local file could not be opened, created, read or written
    #[error("Local file error on '{}': {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The object store rejected or failed a get, put or delete
    #[error("Failed to {operation} '{target}': {message}")]
    RemoteTransfer {
        operation: &'static str,
        target: String,
        message: String,
    },

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Build a local I/O error for `path`
    pub fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::LocalIo {
            path: path.into(),
            source,
        }
    }

    /// Build a remote transfer error from any displayable failure
    pub fn remote(operation: &'static str, target: impl ToString, message: impl ToString) -> Self {
        Error::RemoteTransfer {
            operation,
            target: target.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the error stems from how the command was invoked
    pub const fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidPath(_) | Error::InvalidOperation(_))
    }

    /// Get the process exit code for this error
    ///
    /// Every failure exits with 1 so existing scripts only need to test for
    /// non-zero.
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
