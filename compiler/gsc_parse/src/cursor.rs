//! Token cursor for navigating the token stream.
//!
//! Low-level token access, lookahead, and consumption. Hot checks read from
//! the dense `u8` tag array instead of the 16-byte `TokenKind`.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::error::ParseError;

/// Cursor over a terminated token list.
///
/// Invariant: the lexer always appends an `Eof` token and grammar rules
/// check the current kind before consuming, so the cursor can never advance
/// past the end.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Dense array of discriminant tags, parallel to `tokens`.
    tags: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// # Panics
    /// Panics if the list is not `Eof`-terminated.
    pub fn new(tokens: &'a TokenList) -> Self {
        assert!(tokens.is_terminated(), "token list must end with Eof");
        Cursor {
            tokens,
            tags: tokens.tags(),
            pos: 0,
        }
    }

    /// Current position in the token stream (for progress checks).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span (`Span::DUMMY` at position 0).
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Get the discriminant tag of the current token.
    #[inline]
    pub fn current_tag(&self) -> u8 {
        self.tags[self.pos]
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_tag() == TokenKind::TAG_EOF
    }

    /// Check if the current token matches the given kind's discriminant.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_tag() == kind.discriminant_index()
    }

    /// Check if the current token is an identifier.
    #[inline]
    pub fn check_ident(&self) -> bool {
        self.current_tag() == TokenKind::TAG_IDENT
    }

    /// Kind of the token `n` ahead (saturating at `Eof`).
    #[inline]
    pub fn peek_kind(&self, n: usize) -> &TokenKind {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    /// Tag of the token `n` ahead (saturating at `Eof`).
    #[inline]
    pub fn peek_tag(&self, n: usize) -> u8 {
        let idx = (self.pos + n).min(self.tags.len() - 1);
        self.tags[idx]
    }

    /// Span of the token `n` ahead.
    #[inline]
    pub fn peek_span(&self, n: usize) -> Span {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        self.tokens[idx].span
    }

    /// Check if the current and next tokens touch (no trivia between).
    /// Used to pair `[` `[` into a function dereference.
    #[inline]
    pub fn adjacent_next(&self) -> bool {
        self.current_span().end == self.peek_span(1).start
    }

    /// Advance to the next token and return the consumed token.
    #[inline]
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        debug_assert!(self.pos + 1 < self.tokens.len() || self.is_at_end());
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expect the current token to be of the given kind, advance and return
    /// its span.
    ///
    /// Split into an inline happy path and a `#[cold]` error constructor so
    /// the `format!` allocation does not keep the fast case from inlining.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: &TokenKind) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected {}, found {}",
                kind.display_name(),
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
        .with_context(format!("expected {}", kind.display_name()))
    }

    /// Expect and consume an identifier, returning its name and span.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            let span = self.current_span();
            self.advance();
            Ok((name, span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!(
                "expected identifier, found {}",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }
}
