//! Diagnostics and error reporting for the GSC front-end.
//!
//! - [`ErrorCode`] — stable, searchable codes (E0xxx lexical, E1xxx syntax,
//!   E11xx dialect)
//! - [`Diagnostic`] — builder-style rich diagnostic with labeled spans
//! - [`LineIndex`] — byte offset to line/column mapping
//! - [`emit_terminal`] — plain-text rendering with source snippets

mod diagnostic;
mod emitter;
mod error_code;
mod line_index;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::emit_terminal;
pub use error_code::ErrorCode;
pub use line_index::{LineCol, LineIndex};
