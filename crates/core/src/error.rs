//! Error types for libdef generation.

/// Errors that can occur while turning an API description into a libdef.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The API description is not valid JSON or does not match the entry shapes.
    #[error("failed to parse API description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The assembled declarations could not be formatted.
    #[error("failed to format generated declarations: {0}")]
    Format(#[from] FormatError),
}

/// Errors reported by a [`Formatter`](crate::format::Formatter).
///
/// Offsets are byte positions in the formatter's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A closing delimiter with nothing open.
    #[error("unexpected '{found}' at byte {offset}")]
    UnexpectedCloser {
        /// The closer that was read.
        found: char,
        /// Where it was read.
        offset: usize,
    },

    /// A closing delimiter that does not match the innermost opener.
    #[error("expected '{expected}' but found '{found}' at byte {offset}")]
    MismatchedDelimiter {
        /// The closer the innermost opener needs.
        expected: char,
        /// The closer that was read.
        found: char,
        /// Where it was read.
        offset: usize,
    },

    /// Input ended with a delimiter still open.
    #[error("'{opener}' opened at byte {offset} is never closed")]
    UnclosedDelimiter {
        /// The opener left on the stack.
        opener: char,
        /// Where it was opened.
        offset: usize,
    },

    /// A quoted literal with no closing quote on its line.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString {
        /// Position of the opening quote.
        offset: usize,
    },

    /// A `/*` comment with no `*/`.
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment {
        /// Position of the `/*`.
        offset: usize,
    },
}

/// Result alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
