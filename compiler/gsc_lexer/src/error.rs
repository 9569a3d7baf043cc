//! Lexical errors.

use std::fmt;

use gsc_diagnostic::{Diagnostic, ErrorCode};
use gsc_ir::Span;

/// A lexical error: unterminated literal/comment region, bad escape,
/// malformed number, or an unrecognized character.
///
/// Lexical failures are non-fatal: the lexer reports once per failure and
/// resumes, so one malformed token never aborts the unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        LexError {
            code,
            message: message.into(),
            span,
        }
    }

    /// Convert to a full `Diagnostic` for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, "here")
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for LexError {}
