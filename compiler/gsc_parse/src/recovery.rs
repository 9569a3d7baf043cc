//! Error recovery for the parser.
//!
//! Provides bitset token sets for O(1) membership testing and the
//! statement-boundary synchronizer. After a syntax error, tokens are
//! discarded up to the next `;` (consumed) or the `}` that balances any
//! braces skipped along the way (left for the enclosing block), and exactly
//! one diagnostic covers the discarded range.

use gsc_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds using a u128 bitset over discriminant indices.
///
/// Membership testing, union, and intersection are single bitwise ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check membership by kind.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    /// Check membership by discriminant tag.
    #[inline]
    pub const fn contains_tag(&self, tag: u8) -> bool {
        (self.0 & (1u128 << tag)) != 0
    }

    /// Check if this set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Directive introducers — safe resynchronization anchors at top level.
pub const DIRECTIVE_START: TokenSet = TokenSet::new()
    .with(TokenKind::HashUsing)
    .with(TokenKind::HashInsert)
    .with(TokenKind::HashNamespace)
    .with(TokenKind::HashDefine)
    .with(TokenKind::HashPrecache)
    .with(TokenKind::HashUsingAnimtree)
    .with(TokenKind::HashIf)
    .with(TokenKind::HashElif)
    .with(TokenKind::HashElse)
    .with(TokenKind::HashEndif);

/// Discard tokens to the next statement boundary.
///
/// Consumes through a top-level `;`; stops *before* a `}` that closes the
/// enclosing block (brace depth is tracked so braces skipped during recovery
/// stay balanced). Also stops before a directive introducer: those only
/// start statements, never continue one.
///
/// Returns the byte offset one past the last discarded token (the end of the
/// recovered range).
pub fn synchronize_statement(cursor: &mut Cursor<'_>) -> u32 {
    let mut depth = 0u32;
    let mut end = cursor.previous_span().end;

    while !cursor.is_at_end() {
        let tag = cursor.current_tag();
        if depth == 0 {
            if tag == TokenKind::TAG_SEMICOLON {
                end = cursor.current_span().end;
                cursor.advance();
                return end;
            }
            if tag == TokenKind::TAG_RBRACE || DIRECTIVE_START.contains_tag(tag) {
                return end;
            }
        } else if tag == TokenKind::TAG_RBRACE {
            depth -= 1;
        }
        if tag == TokenKind::TAG_LBRACE {
            depth += 1;
        }
        end = cursor.current_span().end;
        cursor.advance();
    }
    end
}
