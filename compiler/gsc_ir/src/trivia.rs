//! Trivia: non-semantic token-stream content.
//!
//! Whitespace, comments, dev blocks, and doc comments are skippable by the
//! grammar but kept in a position-ordered side table so documentation tooling
//! can attach them to adjacent nodes. Dev blocks are always opaque text here;
//! their contents are never parsed as statements.

use std::fmt;

use crate::span::Span;

/// The kind of a trivia item.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Any run of whitespace (including newlines).
    Whitespace,
    /// `// …` to end of line.
    LineComment,
    /// `/* … */`, non-nesting.
    BlockComment,
    /// `/# … #/`, non-nesting, contents opaque.
    DevBlock,
    /// `/@ … @/`, non-nesting.
    DocComment,
}

/// A single trivia item. The span covers the delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}

impl Trivia {
    #[inline]
    pub fn new(kind: TriviaKind, span: Span) -> Self {
        Trivia { kind, span }
    }

    /// Returns `true` for comment-like trivia (everything but whitespace).
    pub fn is_comment(&self) -> bool {
        !matches!(self.kind, TriviaKind::Whitespace)
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Position-ordered collection of trivia for one source unit.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TriviaList {
    items: Vec<Trivia>,
}

impl TriviaList {
    #[inline]
    pub fn new() -> Self {
        TriviaList { items: Vec::new() }
    }

    /// Append an item. Items must be pushed in source order.
    #[inline]
    pub fn push(&mut self, trivia: Trivia) {
        debug_assert!(
            self.items.last().is_none_or(|last| last.span.end <= trivia.span.start),
            "trivia pushed out of source order"
        );
        self.items.push(trivia);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Trivia> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Trivia] {
        &self.items
    }

    /// The trivia items that end exactly at `offset`, scanning backwards.
    ///
    /// Documentation tooling uses this to attach a doc comment to the node
    /// starting at `offset` (modulo whitespace in between).
    pub fn ending_at(&self, offset: u32) -> impl Iterator<Item = &Trivia> {
        self.items
            .iter()
            .rev()
            .skip_while(move |t| t.span.end > offset)
            .take_while(move |t| t.span.end <= offset)
    }
}

impl<'a> IntoIterator for &'a TriviaList {
    type Item = &'a Trivia;
    type IntoIter = std::slice::Iter<'a, Trivia>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
