//! Directive recognition.
//!
//! Directives are recognized, never expanded: macro parameter lists and
//! bodies stay raw text, and `#if`/`#elif` conditions are parsed for spans
//! but never evaluated — conditional inclusion is an external concern.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{Directive, DirectiveKind, Name, Span, Stmt, StmtId, StmtKind, TokenKind};

use crate::error::ParseError;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_directive_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let kind = match *self.current_kind() {
            TokenKind::HashUsing => {
                self.advance();
                let path = self.expect_path()?;
                self.expect(&TokenKind::Semicolon)?;
                DirectiveKind::Using { path }
            }
            TokenKind::HashInsert => {
                self.advance();
                let path = self.expect_path()?;
                self.expect(&TokenKind::Semicolon)?;
                DirectiveKind::Insert { path }
            }
            TokenKind::HashNamespace => {
                self.advance();
                let (name, _) = self.expect_ident()?;
                self.expect(&TokenKind::Semicolon)?;
                DirectiveKind::Namespace { name }
            }
            TokenKind::HashDefine => {
                self.advance();
                let (name, _) = self.expect_ident()?;
                let params = match *self.current_kind() {
                    TokenKind::MacroParams(raw) => {
                        self.advance();
                        raw
                    }
                    _ => Name::EMPTY,
                };
                let body = match *self.current_kind() {
                    TokenKind::MacroBody(raw) => {
                        self.advance();
                        raw
                    }
                    _ => Name::EMPTY,
                };
                DirectiveKind::Define { name, params, body }
            }
            TokenKind::HashPrecache => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let asset_type = self.expect_string_literal()?;
                self.expect(&TokenKind::Comma)?;
                let asset = self.expect_string_literal()?;
                self.expect(&TokenKind::RParen)?;
                self.expect(&TokenKind::Semicolon)?;
                DirectiveKind::Precache { asset_type, asset }
            }
            TokenKind::HashUsingAnimtree => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let tree = self.expect_string_literal()?;
                self.expect(&TokenKind::RParen)?;
                self.expect(&TokenKind::Semicolon)?;
                DirectiveKind::UsingAnimtree { tree }
            }
            // Conditional markers carry no terminator and no inclusion
            // semantics here.
            TokenKind::HashIf => {
                self.advance();
                let condition = self.parse_directive_condition()?;
                DirectiveKind::If { condition }
            }
            TokenKind::HashElif => {
                self.advance();
                let condition = self.parse_directive_condition()?;
                DirectiveKind::Elif { condition }
            }
            TokenKind::HashElse => {
                self.advance();
                DirectiveKind::Else
            }
            TokenKind::HashEndif => {
                self.advance();
                DirectiveKind::Endif
            }
            ref other => {
                return Err(ParseError::new(
                    ErrorCode::E1009,
                    format!("expected directive, found {}", other.display_name()),
                    start,
                ))
            }
        };

        let span = Span::new(start.start, self.previous_span().end);
        let id = self.ast.alloc_directive(Directive { kind, span });
        Ok(self.ast.alloc_stmt(Stmt::new(StmtKind::Directive(id), span)))
    }

    /// `#if`/`#elif` conditions have no terminator; pointer-call folding is
    /// suppressed so the condition cannot swallow the following statement.
    fn parse_directive_condition(&mut self) -> Result<gsc_ir::ExprId, ParseError> {
        self.in_directive_condition = true;
        let result = self.parse_expr();
        self.in_directive_condition = false;
        result
    }

    /// The raw path token after `#using`/`#insert`.
    fn expect_path(&mut self) -> Result<Name, ParseError> {
        match *self.current_kind() {
            TokenKind::Path(path) => {
                self.advance();
                Ok(path)
            }
            ref other => Err(ParseError::new(
                ErrorCode::E1009,
                format!("expected path, found {}", other.display_name()),
                self.current_span(),
            )),
        }
    }

    /// A plain string literal operand of a directive.
    fn expect_string_literal(&mut self) -> Result<Name, ParseError> {
        match *self.current_kind() {
            TokenKind::String(value) => {
                self.advance();
                Ok(value)
            }
            ref other => Err(ParseError::new(
                ErrorCode::E1001,
                format!("expected string literal, found {}", other.display_name()),
                self.current_span(),
            )),
        }
    }
}
