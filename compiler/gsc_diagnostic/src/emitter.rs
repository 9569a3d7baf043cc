//! Plain-text terminal rendering of diagnostics.
//!
//! Output shape:
//!
//! ```text
//! error[E1001]: expected `;`, found `}`
//!   --> scripts/foo.gsc:12:5
//!    |
//! 12 |     wait 1
//!    |     ^^^^^^ here
//!    = note: statements end with `;`
//! ```

use std::fmt::Write as _;

use crate::{Diagnostic, LineIndex};

/// Render one diagnostic against its source text.
///
/// `file_name` is display-only; pass whatever the caller knows the unit as.
pub fn emit_terminal(diag: &Diagnostic, file_name: &str, source: &str) -> String {
    let index = LineIndex::new(source);
    let mut out = String::new();

    let _ = writeln!(out, "{}[{}]: {}", diag.severity, diag.code, diag.message);

    for label in &diag.labels {
        let pos = index.line_col(label.span.start);
        let _ = writeln!(out, "  --> {file_name}:{}:{}", pos.line, pos.col);

        if let Some(line_span) = index.line_span(pos.line) {
            let line_text = &source[line_span.to_range()];
            let gutter = pos.line.to_string();
            let pad = " ".repeat(gutter.len());

            let _ = writeln!(out, "{pad} |");
            let _ = writeln!(out, "{gutter} | {line_text}");

            // Caret row: underline the labeled range, clamped to this line.
            let start_col = (pos.col - 1) as usize;
            let end = label.span.end.min(line_span.end).max(label.span.start);
            let width = ((end - label.span.start).max(1)) as usize;
            let marker = if label.is_primary { "^" } else { "-" };
            let _ = writeln!(
                out,
                "{pad} | {}{}{}{}",
                " ".repeat(start_col),
                marker.repeat(width),
                if label.message.is_empty() { "" } else { " " },
                label.message
            );
        }
    }

    for note in &diag.notes {
        let _ = writeln!(out, "   = note: {note}");
    }

    out
}
