//! Recursive descent parser for GSC.
//!
//! Consumes the lexer's token stream and produces a flat-arena tree rooted
//! at a [`SourceFile`]. The grammar's five ambiguities are resolved by
//! deterministic rules at their choice points (see `grammar/expr.rs`), never
//! by backtracking. The parser never aborts on an error: diagnostics
//! accumulate and a best-effort tree with error-marker nodes always comes
//! back.
//!
//! One parse owns all of its state; independent source units can parse in
//! parallel sharing only the interner.

mod cursor;
mod error;
mod grammar;
mod recovery;
mod stack;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize_statement, TokenSet};

use gsc_ir::{
    Ast, Dialect, Keywords, Name, SourceFile, Span, StringInterner, TokenKind, TokenList,
    TriviaList,
};
use gsc_lexer::LexError;

/// Parser state for one source unit.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    ast: Ast,
    kws: Keywords,
    dialect: Dialect,
    errors: Vec<ParseError>,
    /// Inside a `#if`/`#elif` condition. These directives have no
    /// terminator, so pointer-call folding is suppressed there: otherwise
    /// the condition would swallow the next line's `foo(...)` statement as
    /// `cond foo(...)`.
    in_directive_condition: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a terminated token list.
    pub fn new(tokens: &'a TokenList, interner: &StringInterner, dialect: Dialect) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            ast: Ast::new(),
            kws: Keywords::new(interner),
            dialect,
            errors: Vec::new(),
            in_directive_condition: false,
        }
    }

    // Cursor delegation - token navigation.

    #[inline]
    fn current_kind(&self) -> &TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn current_tag(&self) -> u8 {
        self.cursor.current_tag()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance();
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        self.cursor.expect_ident()
    }

    // Keyword helpers. GSC keywords are identifiers; their role comes from
    // position, checked against the pre-interned table.

    /// The current token's name if it is an identifier.
    #[inline]
    fn ident_name(&self) -> Option<Name> {
        match *self.current_kind() {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Check if the current token is the given keyword.
    #[inline]
    fn at_kw(&self, kw: Name) -> bool {
        self.ident_name() == Some(kw)
    }

    /// Consume the current token if it is the given keyword.
    fn eat_kw(&mut self, kw: Name) -> Option<Span> {
        if self.at_kw(kw) {
            let span = self.current_span();
            self.advance();
            Some(span)
        } else {
            None
        }
    }

    /// Expect the given keyword, with its display name for the message.
    fn expect_kw(&mut self, kw: Name, display: &str) -> Result<Span, ParseError> {
        self.eat_kw(kw).ok_or_else(|| {
            ParseError::new(
                gsc_diagnostic::ErrorCode::E1001,
                format!(
                    "expected `{display}`, found {}",
                    self.current_kind().display_name()
                ),
                self.current_span(),
            )
        })
    }

    /// Record a non-fatal error and keep parsing.
    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }
}

/// Parse result: the tree, its arena, and every diagnostic.
#[derive(Debug)]
pub struct ParseResult {
    pub file: SourceFile,
    pub ast: Ast,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a token stream into a source file.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner, dialect: Dialect) -> ParseResult {
    let parser = Parser::new(tokens, interner, dialect);
    parser.parse_source_file()
}

/// Everything produced for one source unit: tree, trivia, and both error
/// streams.
#[derive(Debug)]
pub struct ParsedUnit {
    pub file: SourceFile,
    pub ast: Ast,
    pub trivia: TriviaList,
    pub lex_errors: Vec<LexError>,
    pub errors: Vec<ParseError>,
}

impl ParsedUnit {
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || !self.errors.is_empty()
    }
}

/// Lex and parse one source unit in one call.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse_source(source: &str, interner: &StringInterner, dialect: Dialect) -> ParsedUnit {
    let lexed = gsc_lexer::lex(source, interner);
    let result = parse(&lexed.tokens, interner, dialect);
    ParsedUnit {
        file: result.file,
        ast: result.ast,
        trivia: lexed.trivia,
        lex_errors: lexed.errors,
        errors: result.errors,
    }
}
