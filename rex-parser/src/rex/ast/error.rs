//! Error types for pattern parsing

use std::fmt;

/// Structural failures that abort a parse.
///
/// Group-related failures carry the offset of the offending open delimiter
/// so a caller can highlight it; the same location is mirrored into the
/// buffer's error fields for callers that keep the buffer around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser needed another character but the pattern ended.
    UnexpectedEnd,
    /// A group's closing `)` is missing. `location`/`length` point at the
    /// group's own open paren.
    UnterminatedGroup { location: usize, length: usize },
    /// A sub-expression stopped on something other than `)`.
    UnterminatedClosure { offset: usize },
    /// A `(?...` form matched none of the known sub-grammars.
    UnrecognizedCapture { rest: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEnd => {
                write!(f, "Unexpected end of pattern")
            }
            ParseError::UnterminatedGroup { location, .. } => {
                write!(
                    f,
                    "Missing closing ')' in group opened at offset {}",
                    location
                )
            }
            ParseError::UnterminatedClosure { offset } => {
                write!(f, "Unterminated closure at offset {}", offset)
            }
            ParseError::UnrecognizedCapture { rest } => {
                write!(f, "Unrecognized capture: {}", rest)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;
