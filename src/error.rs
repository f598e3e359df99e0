//! Error types for interlinear rendering.
//!
//! Every failure aborts the render call that raised it; no partial HTML is
//! ever returned alongside an error.

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while rendering or persisting interlinears
#[derive(Debug, Error)]
pub enum Error {
    /// A block contained no non-blank lines
    #[error("Empty block")]
    EmptyBlock,

    /// A line of a block disagrees with the token count of the block's first line
    #[error("Not the same number of tokens on each line: line {line} has {actual} tokens, expected {expected}")]
    TokenCountMismatch {
        /// Zero-based index of the offending line among the block's content lines.
        line: usize,
        /// Token count established by the first content line.
        expected: usize,
        /// Token count found on the offending line.
        actual: usize,
    },

    /// Strict monospace rendering found a character that would need escaping
    #[error("Input has not been sanitized: found {character:?}")]
    Unsanitized {
        /// The first offending character.
        character: char,
    },

    /// Unrecognized interlinear format name
    #[error("Unknown interlinear format: {0:?}")]
    UnknownFormat(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// IO error, with the path in the message from `fs_err`
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a token count mismatch for the given line
    pub const fn mismatch(line: usize, expected: usize, actual: usize) -> Self {
        Self::TokenCountMismatch { line, expected, actual }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether this error came from malformed interlinear input rather than the environment
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyBlock | Self::TokenCountMismatch { .. } | Self::Unsanitized { .. }
        )
    }
}
