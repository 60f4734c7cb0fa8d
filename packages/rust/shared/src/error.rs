//! Error types for headingfix.
//!
//! Library crates use [`HeadingFixError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all headingfix operations.
#[derive(Debug, thiserror::Error)]
pub enum HeadingFixError {
    /// Configuration loading or parsing error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Job table or heading set failed validation.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Filesystem or stream I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document content is not valid UTF-8.
    #[error("encoding error at {path:?}: {source}")]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// The heading matcher could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HeadingFixError>;

impl HeadingFixError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
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

    /// Wrap a UTF-8 decoding failure with a path for context.
    pub fn encoding(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = HeadingFixError::config("missing jobs table");
        assert_eq!(err.to_string(), "config error: missing jobs table");

        let err = HeadingFixError::validation("job 2 overlaps job 1");
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn encoding_error_keeps_path() {
        let source = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = HeadingFixError::encoding("README.md", source);
        let msg = err.to_string();
        assert!(msg.starts_with("encoding error at \"README.md\""));
    }
}
