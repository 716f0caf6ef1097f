//! Diagnostics for template parsing.
//!
//! Parsing either succeeds completely or fails with a single [`ParseError`]: the
//! first (left-most) offending position encountered. There is no recovery and no
//! partial AST; callers decide whether to retry, abort, or report.
//!
//! ## Notes
//! - [`ParseError`] implements [`miette::Diagnostic`] with a labeled span, so
//!   callers that attach source code (via `with_source_code`) get rich rendering
//!   for free.

use crate::ast::Pos;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// The failure taxonomy: where in the pipeline the input went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed literal tokens or disallowed characters.
    Lexical,
    /// Missing/mismatched terminators, malformed delimiter usage.
    Syntax,
    /// A reserved word used where a free identifier is required.
    ReservedName,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::ReservedName => write!(f, "reserved name error"),
        }
    }
}

/// A parse failure: kind, message, and the offending source position.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind} in {pos}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    pub pos: Pos,
    #[label("here")]
    span: SourceSpan,
}

impl ParseError {
    fn new(kind: ErrorKind, message: String, pos: Pos) -> Self {
        let span = SourceSpan::from((pos.offset, 0));
        Self {
            kind,
            message,
            pos,
            span,
        }
    }

    /// A malformed token (bad literal, stray character).
    pub fn lexical(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(ErrorKind::Lexical, message.into(), pos)
    }

    /// A grammar violation (bad delimiter usage, missing terminator).
    pub fn syntax(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(ErrorKind::Syntax, message.into(), pos)
    }

    /// A reserved word used as a free identifier.
    pub fn reserved(message: impl Into<String>, pos: Pos) -> Self {
        Self::new(ErrorKind::ReservedName, message.into(), pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_location_and_kind() {
        let err = ParseError::syntax("Expected `%}`", Pos::new("layout.weft", 3, 7, 42));
        let rendered = err.to_string();
        assert!(rendered.contains("syntax error"), "got: {rendered}");
        assert!(rendered.contains("layout.weft:3:7"), "got: {rendered}");
        assert!(rendered.contains("Expected `%}`"), "got: {rendered}");
    }

    #[test]
    fn test_kind_constructors() {
        let pos = Pos::new("t", 1, 1, 0);
        assert_eq!(ParseError::lexical("x", pos.clone()).kind, ErrorKind::Lexical);
        assert_eq!(ParseError::syntax("x", pos.clone()).kind, ErrorKind::Syntax);
        assert_eq!(ParseError::reserved("x", pos).kind, ErrorKind::ReservedName);
    }
}
