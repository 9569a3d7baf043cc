//! Statement parsing: one production per statement keyword/shape.
//!
//! Ordinary recursive descent; the only cross-statement concerns are
//! dangling-else attachment (the nearest unmatched `if` wins, which falls
//! out of the recursion) and balanced-brace tracking during recovery.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{ExprId, ExprKind, Name, Span, Stmt, StmtId, StmtKind, SwitchCase, TokenKind};
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::stack;
use crate::Parser;

impl Parser<'_> {
    fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        self.ast.alloc_stmt(Stmt::new(kind, span))
    }

    fn stmt_span(&self, id: StmtId) -> Span {
        self.ast.stmt(id).span
    }

    pub(crate) fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        stack::ensure(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<StmtId, ParseError> {
        match *self.current_kind() {
            TokenKind::Semicolon => {
                let span = self.current_span();
                self.advance();
                Ok(self.alloc_stmt(StmtKind::Empty, span))
            }
            TokenKind::LBrace => self.parse_block(),
            TokenKind::HashUsing
            | TokenKind::HashInsert
            | TokenKind::HashNamespace
            | TokenKind::HashDefine
            | TokenKind::HashPrecache
            | TokenKind::HashUsingAnimtree
            | TokenKind::HashIf
            | TokenKind::HashElif
            | TokenKind::HashElse
            | TokenKind::HashEndif => self.parse_directive_stmt(),
            TokenKind::Ident(name) => self.parse_ident_statement(name),
            _ => self.parse_expr_statement(),
        }
    }

    /// Statement starting with an identifier: statement keywords win by
    /// position, everything else is an expression-leading statement.
    fn parse_ident_statement(&mut self, name: Name) -> Result<StmtId, ParseError> {
        if name == self.kws.if_ {
            self.parse_if()
        } else if name == self.kws.while_ {
            self.parse_while()
        } else if name == self.kws.do_ {
            self.parse_do_while()
        } else if name == self.kws.for_ {
            self.parse_for()
        } else if name == self.kws.foreach {
            self.parse_foreach()
        } else if name == self.kws.switch {
            self.parse_switch()
        } else if name == self.kws.break_ {
            self.parse_simple_keyword_stmt(StmtKind::Break)
        } else if name == self.kws.continue_ {
            self.parse_simple_keyword_stmt(StmtKind::Continue)
        } else if name == self.kws.return_ {
            self.parse_return()
        } else if name == self.kws.wait || name == self.kws.waitrealtime {
            self.parse_wait(name == self.kws.waitrealtime)
        } else if name == self.kws.waittillframeend {
            self.parse_waittillframeend()
        } else if name == self.kws.var {
            self.parse_var_decl(true)
        } else if name == self.kws.const_ {
            self.parse_const_decl()
        } else if name == self.kws.function {
            self.parse_function_def()
        } else if name == self.kws.class {
            self.parse_class_def()
        } else {
            self.parse_expr_statement()
        }
    }

    /// `{ … }`. Statements recover individually; an unterminated block at
    /// EOF reports once and closes.
    pub(crate) fn parse_block(&mut self) -> Result<StmtId, ParseError> {
        let open = self.expect(&TokenKind::LBrace)?;
        let mut stmts: SmallVec<[StmtId; 16]> = SmallVec::new();

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            stmts.push(self.statement_or_recover(true));
        }

        let close = if self.check(&TokenKind::RBrace) {
            let span = self.current_span();
            self.advance();
            span
        } else {
            let span = self.current_span();
            self.report(
                ParseError::new(ErrorCode::E1003, "unclosed block", span)
                    .with_context("expected `}`"),
            );
            span
        };

        let range = self.ast.alloc_stmt_list(&stmts);
        Ok(self.alloc_stmt(StmtKind::Block(range), open.merge(close)))
    }

    fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.if_, "if")?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let consequence = self.parse_statement()?;

        let mut end = self.stmt_span(consequence).end;
        let mut alternative = StmtId::INVALID;
        // Dangling else: binds here, to the innermost unmatched `if`.
        if self.eat_kw(self.kws.else_).is_some() {
            alternative = self.parse_statement()?;
            end = self.stmt_span(alternative).end;
        }

        Ok(self.alloc_stmt(
            StmtKind::If {
                condition,
                consequence,
                alternative,
            },
            Span::new(start.start, end),
        ))
    }

    fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.while_, "while")?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_statement()?;
        let span = Span::new(start.start, self.stmt_span(body).end);
        Ok(self.alloc_stmt(StmtKind::While { condition, body }, span))
    }

    fn parse_do_while(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.do_, "do")?;
        let body = self.parse_statement()?;
        self.expect_kw(self.kws.while_, "while")?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(
            StmtKind::DoWhile { body, condition },
            Span::new(start.start, semi.end),
        ))
    }

    fn parse_for(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.for_, "for")?;
        self.expect(&TokenKind::LParen)?;

        // Initializer: empty, a `var` declaration, or an expression. Its
        // terminating `;` is the first header separator.
        let initializer = if self.check(&TokenKind::Semicolon) {
            self.advance();
            StmtId::INVALID
        } else if self.at_kw(self.kws.var) {
            self.parse_var_decl(true)?
        } else {
            let expr = self.parse_expr()?;
            let span = self.expr_span(expr);
            self.expect(&TokenKind::Semicolon)?;
            self.alloc_stmt(StmtKind::Expr(expr), span)
        };

        let condition = if self.check(&TokenKind::Semicolon) {
            ExprId::INVALID
        } else {
            self.parse_expr()?
        };
        self.expect(&TokenKind::Semicolon)?;

        let update = if self.check(&TokenKind::RParen) {
            ExprId::INVALID
        } else {
            self.parse_expr()?
        };
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_statement()?;
        let span = Span::new(start.start, self.stmt_span(body).end);
        Ok(self.alloc_stmt(
            StmtKind::For {
                initializer,
                condition,
                update,
                body,
            },
            span,
        ))
    }

    fn parse_foreach(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.foreach, "foreach")?;
        self.expect(&TokenKind::LParen)?;
        let (element, _) = self.expect_ident()?;
        self.expect_kw(self.kws.in_, "in")?;
        let collection = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_statement()?;
        let span = Span::new(start.start, self.stmt_span(body).end);
        Ok(self.alloc_stmt(
            StmtKind::Foreach {
                element,
                collection,
                body,
            },
            span,
        ))
    }

    /// `switch (value) { case …: … default: … }` — fall-through semantics,
    /// no implicit break insertion.
    fn parse_switch(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.switch, "switch")?;
        self.expect(&TokenKind::LParen)?;
        let value = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::LBrace)?;

        let mut cases: SmallVec<[SwitchCase; 8]> = SmallVec::new();
        let mut seen_default = false;

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            let case_start = self.current_span();
            let case_value = if self.eat_kw(self.kws.case).is_some() {
                self.parse_expr()?
            } else if self.at_kw(self.kws.default) {
                let span = self.current_span();
                self.advance();
                if seen_default {
                    self.report(ParseError::new(
                        ErrorCode::E1008,
                        "duplicate `default` case",
                        span,
                    ));
                }
                seen_default = true;
                ExprId::INVALID
            } else {
                return Err(ParseError::new(
                    ErrorCode::E1001,
                    format!(
                        "expected `case`, `default`, or `}}`, found {}",
                        self.current_kind().display_name()
                    ),
                    self.current_span(),
                ));
            };
            self.expect(&TokenKind::Colon)?;

            let mut body: SmallVec<[StmtId; 8]> = SmallVec::new();
            while !self.check(&TokenKind::RBrace)
                && !self.is_at_end()
                && !self.at_kw(self.kws.case)
                && !self.at_kw(self.kws.default)
            {
                body.push(self.statement_or_recover(true));
            }

            let body_range = self.ast.alloc_stmt_list(&body);
            let end = self.previous_span().end;
            cases.push(SwitchCase {
                value: case_value,
                body: body_range,
                span: Span::new(case_start.start, end),
            });
        }

        let close = self.expect(&TokenKind::RBrace)?;
        let range = self.ast.alloc_cases(&cases);
        Ok(self.alloc_stmt(
            StmtKind::Switch {
                value,
                cases: range,
            },
            start.merge(close),
        ))
    }

    /// `break;` / `continue;`
    fn parse_simple_keyword_stmt(&mut self, kind: StmtKind) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        self.advance();
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(kind, start.merge(semi)))
    }

    fn parse_return(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.return_, "return")?;
        let value = if self.check(&TokenKind::Semicolon) {
            ExprId::INVALID
        } else {
            self.parse_expr()?
        };
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(StmtKind::Return(value), start.merge(semi)))
    }

    fn parse_wait(&mut self, realtime: bool) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        self.advance(); // wait / waitrealtime
        let duration = self.parse_expr()?;
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(
            StmtKind::Wait { realtime, duration },
            start.merge(semi),
        ))
    }

    fn parse_waittillframeend(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.waittillframeend, "waittillframeend")?;
        let value = if self.check(&TokenKind::Semicolon) {
            ExprId::INVALID
        } else {
            self.parse_expr()?
        };
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(StmtKind::WaittillFrameEnd(value), start.merge(semi)))
    }

    /// `var name [= init];` — `consume_semi` is false only for class fields
    /// that share this production.
    pub(crate) fn parse_var_decl(&mut self, consume_semi: bool) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.var, "var")?;
        let (name, name_span) = self.expect_ident()?;
        let init = if self.check(&TokenKind::Eq) {
            self.advance();
            self.parse_expr()?
        } else {
            ExprId::INVALID
        };
        let end = if consume_semi {
            self.expect(&TokenKind::Semicolon)?
        } else if init.is_valid() {
            self.expr_span(init)
        } else {
            name_span
        };
        Ok(self.alloc_stmt(StmtKind::VarDecl { name, init }, start.merge(end)))
    }

    fn parse_const_decl(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.const_, "const")?;
        let (name, _) = self.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expr()?;
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(StmtKind::ConstDecl { name, value }, start.merge(semi)))
    }

    /// A statement that begins with an expression: a plain expression
    /// statement, or one of the event forms (`object notify(...)` etc.)
    /// whose head identifier follows the object expression.
    fn parse_expr_statement(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let object = self.parse_expr()?;

        if let TokenKind::Ident(name) = *self.current_kind() {
            if name == self.kws.notify {
                return self.parse_notify(object, start);
            }
            if name == self.kws.endon {
                return self.parse_endon(object, start);
            }
            if name == self.kws.waittill {
                return self.parse_waittill(object, start, false);
            }
            if name == self.kws.waittillmatch {
                return self.parse_waittill(object, start, true);
            }
        }

        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(StmtKind::Expr(object), start.merge(semi)))
    }

    /// Under the legacy dialect, event arguments must be plain string
    /// literals.
    fn check_event_expr(&mut self, event: ExprId) {
        if self.dialect.allows_expression_events() {
            return;
        }
        let node = self.ast.expr(event);
        if !matches!(node.kind, ExprKind::String(_) | ExprKind::Error) {
            let span = node.span;
            self.report(ParseError::new(
                ErrorCode::E1107,
                "event must be a plain string literal under the legacy dialect",
                span,
            ));
        }
    }

    fn parse_notify(&mut self, object: ExprId, start: Span) -> Result<StmtId, ParseError> {
        self.expect_kw(self.kws.notify, "notify")?;
        self.expect(&TokenKind::LParen)?;
        let event = self.parse_expr()?;
        self.check_event_expr(event);

        let mut args: SmallVec<[ExprId; 4]> = SmallVec::new();
        while self.check(&TokenKind::Comma) {
            self.advance();
            if self.check(&TokenKind::RParen) {
                break; // trailing comma
            }
            args.push(self.parse_expr()?);
        }
        self.expect(&TokenKind::RParen)?;
        let semi = self.expect(&TokenKind::Semicolon)?;

        let range = self.ast.alloc_expr_list(&args);
        Ok(self.alloc_stmt(
            StmtKind::Notify {
                object,
                event,
                args: range,
            },
            start.merge(semi),
        ))
    }

    fn parse_endon(&mut self, object: ExprId, start: Span) -> Result<StmtId, ParseError> {
        self.expect_kw(self.kws.endon, "endon")?;
        self.expect(&TokenKind::LParen)?;
        let event = self.parse_expr()?;
        self.check_event_expr(event);
        self.expect(&TokenKind::RParen)?;
        let semi = self.expect(&TokenKind::Semicolon)?;
        Ok(self.alloc_stmt(
            StmtKind::Endon { object, event },
            start.merge(semi),
        ))
    }

    fn parse_waittill(
        &mut self,
        object: ExprId,
        start: Span,
        matched: bool,
    ) -> Result<StmtId, ParseError> {
        let kw = if matched {
            self.kws.waittillmatch
        } else {
            self.kws.waittill
        };
        self.expect_kw(kw, if matched { "waittillmatch" } else { "waittill" })?;
        self.expect(&TokenKind::LParen)?;
        let event = self.parse_expr()?;
        self.check_event_expr(event);

        // Further arguments are identifiers that receive the notify payload.
        let mut bindings: SmallVec<[Name; 4]> = SmallVec::new();
        while self.check(&TokenKind::Comma) {
            self.advance();
            if self.check(&TokenKind::RParen) {
                break;
            }
            let (name, _) = self.expect_ident()?;
            bindings.push(name);
        }
        self.expect(&TokenKind::RParen)?;
        let semi = self.expect(&TokenKind::Semicolon)?;

        let range = self.ast.alloc_names(&bindings);
        Ok(self.alloc_stmt(
            StmtKind::Waittill {
                object,
                event,
                bindings: range,
                matched,
            },
            start.merge(semi),
        ))
    }

}
