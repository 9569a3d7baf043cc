//! Function and class definitions.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{
    Class, ClassMember, ExprId, FnModifier, Function, FunctionId, Name, Param, ParamRange, Span,
    Stmt, StmtId, StmtKind, TokenKind,
};
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::Parser;

impl Parser<'_> {
    /// `function [private|autoexec] name(params) { body }`
    pub(crate) fn parse_function_def(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.function, "function")?;
        let id = self.parse_function_tail(start, None)?;
        let span = self.ast.function(id).span;
        Ok(self.ast.alloc_stmt(Stmt::new(StmtKind::FunctionDef(id), span)))
    }

    /// The part after the `function` keyword (shared with class methods).
    /// `forced_name` is used by constructors/destructors, which have a fixed
    /// name and no modifier.
    fn parse_function_tail(
        &mut self,
        start: Span,
        forced_name: Option<Name>,
    ) -> Result<FunctionId, ParseError> {
        let mut modifier = FnModifier::None;
        let name = match forced_name {
            Some(name) => name,
            None => {
                if self.eat_kw(self.kws.private).is_some() {
                    modifier = FnModifier::Private;
                } else if self.eat_kw(self.kws.autoexec).is_some() {
                    modifier = FnModifier::Autoexec;
                }
                self.expect_ident()?.0
            }
        };

        let params = self.parse_param_list()?;
        let body = self.parse_block()?;
        let span = Span::new(start.start, self.ast.stmt(body).span.end);

        Ok(self.ast.alloc_function(Function {
            name,
            modifier,
            params,
            body,
            span,
        }))
    }

    /// `( ident [= default] | ... , ... )`.
    ///
    /// A malformed parameter recovers locally (skip to `)` or `{`) so the
    /// function definition itself survives; at most one vararg, last only.
    fn parse_param_list(&mut self) -> Result<ParamRange, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut params: SmallVec<[Param; 8]> = SmallVec::new();
        let mut vararg_span: Option<Span> = None;

        loop {
            if self.check(&TokenKind::RParen) {
                self.advance();
                break;
            }
            if self.is_at_end() || self.check(&TokenKind::LBrace) {
                let span = self.current_span();
                self.report(
                    ParseError::new(ErrorCode::E1003, "unclosed parameter list", span)
                        .with_context("expected `)`"),
                );
                break;
            }

            match *self.current_kind() {
                TokenKind::Ellipsis => {
                    let span = self.current_span();
                    self.advance();
                    if !self.dialect.supports_param_defaults() {
                        self.report(ParseError::new(
                            ErrorCode::E1104,
                            "vararg parameters require the extended dialect",
                            span,
                        ));
                    }
                    if vararg_span.is_some() {
                        self.report(ParseError::new(
                            ErrorCode::E1007,
                            "at most one vararg marker is allowed",
                            span,
                        ));
                    }
                    vararg_span = Some(span);
                    params.push(Param {
                        name: Name::EMPTY,
                        default: ExprId::INVALID,
                        vararg: true,
                        span,
                    });
                }
                TokenKind::Ident(name) => {
                    let mut span = self.current_span();
                    self.advance();
                    let mut default = ExprId::INVALID;
                    if self.check(&TokenKind::Eq) {
                        self.advance();
                        default = self.parse_expr()?;
                        span = span.merge(self.expr_span(default));
                        if !self.dialect.supports_param_defaults() {
                            self.report(ParseError::new(
                                ErrorCode::E1103,
                                "parameter defaults require the extended dialect",
                                span,
                            ));
                        }
                    }
                    if let Some(va) = vararg_span {
                        self.report(ParseError::new(
                            ErrorCode::E1007,
                            "vararg marker must be the last parameter",
                            va,
                        ));
                        vararg_span = None; // report once
                    }
                    params.push(Param {
                        name,
                        default,
                        vararg: false,
                        span,
                    });
                }
                _ => {
                    // Local recovery: one report, then skip to something
                    // that can continue the list or start the body.
                    let span = self.current_span();
                    self.report(
                        ParseError::new(ErrorCode::E1006, "malformed parameter list", span)
                            .with_context("expected parameter name"),
                    );
                    while !self.check(&TokenKind::RParen)
                        && !self.check(&TokenKind::LBrace)
                        && !self.check(&TokenKind::Comma)
                        && !self.is_at_end()
                    {
                        self.advance();
                    }
                    if self.check(&TokenKind::Comma) {
                        self.advance();
                    }
                    continue;
                }
            }

            if self.check(&TokenKind::Comma) {
                self.advance();
            }
        }

        Ok(self.ast.alloc_params(&params))
    }

    /// `class Name [: Parent] { members }` — single inheritance, members
    /// restricted to fields, one constructor, one destructor, and methods.
    pub(crate) fn parse_class_def(&mut self) -> Result<StmtId, ParseError> {
        let start = self.expect_kw(self.kws.class, "class")?;
        let (name, _) = self.expect_ident()?;

        let parent = if self.check(&TokenKind::Colon) {
            self.advance();
            self.expect_ident()?.0
        } else {
            Name::EMPTY
        };

        self.expect(&TokenKind::LBrace)?;
        let mut members: SmallVec<[ClassMember; 8]> = SmallVec::new();
        let mut ctor_span: Option<Span> = None;
        let mut dtor_span: Option<Span> = None;

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            let member_start = self.current_span();
            if self.at_kw(self.kws.var) {
                let decl = self.parse_var_decl(true)?;
                let span = self.ast.stmt(decl).span;
                let (field_name, init) = match self.ast.stmt(decl).kind {
                    StmtKind::VarDecl { name, init } => (name, init),
                    _ => (Name::EMPTY, ExprId::INVALID),
                };
                members.push(ClassMember::Field {
                    name: field_name,
                    init,
                    span,
                });
            } else if self.at_kw(self.kws.constructor) {
                self.advance();
                if let Some(prev) = ctor_span {
                    self.report(
                        ParseError::new(ErrorCode::E1008, "duplicate constructor", member_start)
                            .with_context(format!("first constructor at {prev}")),
                    );
                }
                let id = self.parse_function_tail(member_start, Some(self.kws.constructor))?;
                ctor_span = Some(member_start);
                members.push(ClassMember::Constructor(id));
            } else if self.at_kw(self.kws.destructor) {
                self.advance();
                if let Some(prev) = dtor_span {
                    self.report(
                        ParseError::new(ErrorCode::E1008, "duplicate destructor", member_start)
                            .with_context(format!("first destructor at {prev}")),
                    );
                }
                let id = self.parse_function_tail(member_start, Some(self.kws.destructor))?;
                dtor_span = Some(member_start);
                members.push(ClassMember::Destructor(id));
            } else if self.at_kw(self.kws.function) {
                self.advance();
                let id = self.parse_function_tail(member_start, None)?;
                members.push(ClassMember::Method(id));
            } else {
                self.report(ParseError::new(
                    ErrorCode::E1001,
                    format!(
                        "expected class member, found {}",
                        self.current_kind().display_name()
                    ),
                    member_start,
                ));
                crate::recovery::synchronize_statement(&mut self.cursor);
                if self.current_span() == member_start && !self.is_at_end() {
                    self.advance();
                }
            }
        }

        let close = self.expect(&TokenKind::RBrace)?;
        let range = self.ast.alloc_members(&members);
        let id = self.ast.alloc_class(Class {
            name,
            parent,
            members: range,
            span: start.merge(close),
        });
        Ok(self
            .ast
            .alloc_stmt(Stmt::new(StmtKind::ClassDef(id), start.merge(close))))
    }
}
