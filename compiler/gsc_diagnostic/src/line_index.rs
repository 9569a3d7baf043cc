//! Byte offset to line/column mapping.

use gsc_ir::Span;

/// A 1-based line/column position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Precomputed line-start table for one source buffer.
///
/// Columns are byte columns (the lexical rules are ASCII-safe, and editors
/// disagree about everything else anyway).
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Byte offset of the first byte of each line. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    /// Build the index from source text.
    #[allow(clippy::cast_possible_truncation)] // u32 spans bound source size
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        let len = source.len() as u32;
        LineIndex { line_starts, len }
    }

    /// Number of lines (at least 1, even for empty input).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Map a byte offset to a 1-based line/column.
    ///
    /// Offsets past the end clamp to the last position.
    #[allow(clippy::cast_possible_truncation)] // line count bounded by source size
    pub fn line_col(&self, offset: u32) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        LineCol {
            line: line as u32 + 1,
            col: offset - self.line_starts[line] + 1,
        }
    }

    /// The byte span of a 1-based line, excluding its newline.
    pub fn line_span(&self, line: u32) -> Option<Span> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.len, |next| next - 1);
        Some(Span::new(start, end))
    }
}
