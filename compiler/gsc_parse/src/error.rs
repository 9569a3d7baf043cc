//! Parse errors.

use gsc_diagnostic::{Diagnostic, ErrorCode};
use gsc_ir::Span;

/// A syntax error with a stable code for rich diagnostics.
///
/// Dialect violations ("configuration errors") are ordinary parse errors
/// carrying an E11xx code and a dialect-specific message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Optional context line for the diagnostic label.
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Add context for better error messages.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns `true` if this is a dialect (configuration) error.
    pub fn is_dialect(&self) -> bool {
        self.code.is_dialect()
    }

    /// Convert to a full `Diagnostic` for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"))
    }
}
