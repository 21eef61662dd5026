//! Error types for the portfolio pipeline.
//!
//! Library crates use [`PortfolioError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all portfolio operations.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Front matter could not be split from the body or decoded.
    #[error("parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Record-level validation error (bad slug, duplicate slug, ...).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Export artifact could not be rendered or read back.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error for the given source file.
    pub fn parse(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a file path to a parse error raised without one.
    ///
    /// Other variants are returned unchanged.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { message, .. } => Self::Parse {
                path: path.into(),
                message,
            },
            other => other,
        }
    }
}
