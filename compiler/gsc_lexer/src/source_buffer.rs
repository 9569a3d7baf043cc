//! Sentinel-terminated source buffer.
//!
//! Copies the source bytes into a buffer terminated by a `0x00` sentinel plus
//! padding, so the scanner can peek ahead without bounds checks. Interior
//! null bytes are distinguished from EOF by comparing position against the
//! source length.

use crate::cursor::Cursor;

/// How many zero bytes follow the source content. Two peeks plus the
/// sentinel itself must always be in bounds.
const PADDING: usize = 4;

/// Owned, sentinel-terminated copy of one source unit.
pub struct SourceBuffer<'src> {
    /// The original text; all token spans slice this.
    text: &'src str,
    /// `text` bytes + sentinel + padding.
    bytes: Vec<u8>,
}

impl<'src> SourceBuffer<'src> {
    /// Build a buffer for `text`.
    ///
    /// # Panics
    /// Panics if the source exceeds `u32::MAX` bytes (spans are 32-bit).
    pub fn new(text: &'src str) -> Self {
        assert!(
            u32::try_from(text.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        let mut bytes = Vec::with_capacity(text.len() + PADDING);
        bytes.extend_from_slice(text.as_bytes());
        bytes.resize(text.len() + PADDING, 0);
        SourceBuffer { text, bytes }
    }

    /// A cursor positioned at the start of the buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        #[allow(clippy::cast_possible_truncation)] // checked in new()
        Cursor::new(self.text, &self.bytes, self.text.len() as u32)
    }

    /// Source length in bytes (excluding sentinel and padding).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the source is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
