//! Error types for the SDL codec.

use thiserror::Error;

/// Result type for SDL operations.
pub type SdlResult<T> = Result<T, SdlError>;

/// Errors that can occur while parsing or printing schema text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SdlError {
    /// Malformed schema text. Recoverable: automatic sync paths retain the
    /// prior document, interactive paths surface this to the user.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// The AST cannot be printed as a valid document. Indicates a broken
    /// invariant upstream (e.g. two types sharing a name), not user error.
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl SdlError {
    /// Shorthand for a parse error at a known position.
    pub(crate) fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        SdlError::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
