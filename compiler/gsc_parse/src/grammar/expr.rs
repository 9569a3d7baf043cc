//! Expression parsing: precedence climbing plus the disambiguation rules.
//!
//! Binding powers, low to high: assignment/ternary 0, `||` 1, `&&` 2, `|` 3,
//! `^` 4, `&` 5, equality 6, relational 7, shifts 8, additive 9,
//! multiplicative 10, unary prefix 11, `++`/`--` 12, call/`new` 13,
//! member/subscript 14, `thread` 15.
//!
//! The grammar's five ambiguities resolve deterministically here:
//! 1. `new` always starts a `new` expression (`parse_primary`).
//! 2. Assignment is decided by lookahead after the candidate left side has
//!    been fully parsed at level >= 1 (`parse_expr_bp`), never by
//!    backtracking.
//! 3. `[` directly after a postfix expression is a subscript; `[` in operand
//!    position is an array literal (`fold_postfix` vs `parse_primary`).
//! 4. A call folds into a pointer call exactly when an object expression
//!    precedes the callee, with `thread` optionally between; event-statement
//!    heads (`notify` etc.) are never folded so the statement parser owns
//!    those forms (`fold_postfix`).
//! 5. `(` starts a vector literal only if a `,` follows the first parsed
//!    component; arity must then be exactly three (`parse_paren_or_vector`).

use gsc_diagnostic::ErrorCode;
use gsc_ir::{
    AssignOp, BinaryOp, BuiltinVar, Expr, ExprId, ExprKind, ExprRange, IncDecOp, Name, Span,
    TokenKind, UnaryOp,
};
use smallvec::SmallVec;

use crate::error::ParseError;
use crate::stack;
use crate::Parser;

impl Parser<'_> {
    /// Parse a full expression (assignment level).
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.parse_expr_bp(0)
    }

    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.ast.alloc_expr(Expr::new(kind, span))
    }

    pub(crate) fn expr_span(&self, id: ExprId) -> Span {
        self.ast.expr(id).span
    }

    /// Precedence climbing with a minimum binding power.
    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<ExprId, ParseError> {
        stack::ensure(|| self.parse_expr_bp_inner(min_bp))
    }

    fn parse_expr_bp_inner(&mut self, min_bp: u8) -> Result<ExprId, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            lhs = self.fold_postfix(lhs)?;

            if let Some(op) = self.peek_binary_op() {
                let bp = op.binding_power();
                if bp < min_bp {
                    break;
                }
                self.advance();
                // Left-associative: the right side climbs one level higher.
                let rhs = self.parse_expr_bp(bp + 1)?;
                let span = self.expr_span(lhs).merge(self.expr_span(rhs));
                lhs = self.alloc_expr(
                    ExprKind::Binary {
                        op,
                        left: lhs,
                        right: rhs,
                    },
                    span,
                );
                continue;
            }

            // Level 0 forms, both right-associative.
            if min_bp == 0 {
                if self.check(&TokenKind::Question) {
                    self.advance();
                    let consequence = self.parse_expr_bp(0)?;
                    self.expect(&TokenKind::Colon)?;
                    let alternative = self.parse_expr_bp(0)?;
                    let span = self.expr_span(lhs).merge(self.expr_span(alternative));
                    lhs = self.alloc_expr(
                        ExprKind::Ternary {
                            condition: lhs,
                            consequence,
                            alternative,
                        },
                        span,
                    );
                    continue;
                }
                if let Some(op) = self.peek_assign_op() {
                    self.advance();
                    let value = self.parse_expr_bp(0)?;
                    self.check_assign_target(lhs);
                    let span = self.expr_span(lhs).merge(self.expr_span(value));
                    lhs = self.alloc_expr(
                        ExprKind::Assign {
                            op,
                            target: lhs,
                            value,
                        },
                        span,
                    );
                    continue;
                }
            }

            break;
        }

        Ok(lhs)
    }

    fn check_assign_target(&mut self, target: ExprId) {
        let node = self.ast.expr(target);
        let ok = matches!(
            node.kind,
            ExprKind::Ident(_)
                | ExprKind::Builtin(_)
                | ExprKind::Member { .. }
                | ExprKind::Subscript { .. }
                | ExprKind::Error
        );
        if !ok {
            let span = node.span;
            self.report(ParseError::new(
                ErrorCode::E1010,
                "invalid assignment target",
                span,
            ));
        }
    }

    // ── Prefix forms ───────────────────────────────────────────────────

    fn parse_prefix(&mut self) -> Result<ExprId, ParseError> {
        let op = match *self.current_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        if let Some(op) = op {
            let start = self.current_span();
            self.advance();
            let operand = self.parse_expr_bp(11)?;
            let span = start.merge(self.expr_span(operand));
            return Ok(self.alloc_expr(ExprKind::Unary { op, operand }, span));
        }

        let op = match *self.current_kind() {
            TokenKind::PlusPlus => Some(IncDecOp::Increment),
            TokenKind::MinusMinus => Some(IncDecOp::Decrement),
            _ => None,
        };
        if let Some(op) = op {
            let start = self.current_span();
            self.advance();
            let operand = self.parse_expr_bp(12)?;
            let span = start.merge(self.expr_span(operand));
            return Ok(self.alloc_expr(
                ExprKind::Update {
                    op,
                    operand,
                    prefix: true,
                },
                span,
            ));
        }

        self.parse_primary()
    }

    // ── Postfix folding (levels 12-15) ─────────────────────────────────

    /// Fold member access, subscripts, calls, pointer calls, and postfix
    /// `++`/`--` onto `lhs`. All of these bind tighter than any binary
    /// operator, so no binding-power check is needed.
    fn fold_postfix(&mut self, mut lhs: ExprId) -> Result<ExprId, ParseError> {
        loop {
            match *self.current_kind() {
                TokenKind::Dot | TokenKind::Arrow => {
                    let arrow = self.check(&TokenKind::Arrow);
                    self.advance();
                    let (property, prop_span) = self.expect_ident()?;
                    let span = self.expr_span(lhs).merge(prop_span);
                    lhs = self.alloc_expr(
                        ExprKind::Member {
                            object: lhs,
                            property,
                            arrow,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    if self.at_func_deref() {
                        // `object [[expr]](args)` — pointer call through a
                        // dereferenced function value.
                        lhs = self.parse_pointer_call(lhs, false)?;
                    } else {
                        // `[` directly after a postfix expression is always
                        // a subscript (ambiguity rule 3).
                        self.advance();
                        let index = self.parse_expr()?;
                        let close = self.expect(&TokenKind::RBracket)?;
                        let span = self.expr_span(lhs).merge(close);
                        lhs = self.alloc_expr(
                            ExprKind::Subscript {
                                object: lhs,
                                index,
                            },
                            span,
                        );
                    }
                }
                TokenKind::LParen if self.is_callable(lhs) => {
                    let (args, close) = self.parse_argument_list()?;
                    let span = self.expr_span(lhs).merge(close);
                    lhs = self.alloc_expr(ExprKind::Call { callee: lhs, args }, span);
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let op = if self.check(&TokenKind::PlusPlus) {
                        IncDecOp::Increment
                    } else {
                        IncDecOp::Decrement
                    };
                    let op_span = self.current_span();
                    self.advance();
                    let span = self.expr_span(lhs).merge(op_span);
                    lhs = self.alloc_expr(
                        ExprKind::Update {
                            op,
                            operand: lhs,
                            prefix: false,
                        },
                        span,
                    );
                }
                TokenKind::Ident(name) => {
                    // Possible pointer call: `object [thread] callee(args)`.
                    // Suppressed inside unterminated directive conditions.
                    if self.in_directive_condition {
                        break;
                    }
                    if name == self.kws.thread && self.thread_call_follows() {
                        self.advance();
                        lhs = self.parse_pointer_call(lhs, true)?;
                    } else if !self.kws.is_event_head(name) && self.plain_callee_follows() {
                        lhs = self.parse_pointer_call(lhs, false)?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    /// Call callees per the grammar: identifier, namespace call, member
    /// access, or a dereferenced function value.
    fn is_callable(&self, expr: ExprId) -> bool {
        matches!(
            self.ast.expr(expr).kind,
            ExprKind::Ident(_)
                | ExprKind::NamespaceRef { .. }
                | ExprKind::Member { .. }
                | ExprKind::FuncDeref(_)
        )
    }

    /// Two adjacent `[` tokens open a function dereference.
    fn at_func_deref(&self) -> bool {
        self.check(&TokenKind::LBracket)
            && self.cursor.peek_tag(1) == TokenKind::TAG_LBRACKET
            && self.cursor.adjacent_next()
    }

    /// After an infix `thread`, does a pointer-call callee follow?
    fn thread_call_follows(&self) -> bool {
        match (self.cursor.peek_kind(1), self.cursor.peek_tag(2)) {
            (TokenKind::Ident(_), TokenKind::TAG_LPAREN) => true,
            (TokenKind::Ident(_), tag) if tag == TokenKind::ColonColon.discriminant_index() => {
                matches!(self.cursor.peek_kind(3), TokenKind::Ident(_))
                    && self.cursor.peek_tag(4) == TokenKind::TAG_LPAREN
            }
            (TokenKind::LBracket, TokenKind::TAG_LBRACKET) => {
                self.cursor.peek_span(1).end == self.cursor.peek_span(2).start
            }
            _ => false,
        }
    }

    /// Does the current identifier begin `callee(...)` or `ns::callee(...)`?
    fn plain_callee_follows(&self) -> bool {
        match self.cursor.peek_tag(1) {
            TokenKind::TAG_LPAREN => true,
            tag if tag == TokenKind::ColonColon.discriminant_index() => {
                matches!(self.cursor.peek_kind(2), TokenKind::Ident(_))
                    && self.cursor.peek_tag(3) == TokenKind::TAG_LPAREN
            }
            _ => false,
        }
    }

    /// Parse the callee and arguments of a pointer call. The cursor sits on
    /// the callee (identifier, `ns::name`, or `[[`).
    fn parse_pointer_call(
        &mut self,
        object: ExprId,
        threaded: bool,
    ) -> Result<ExprId, ParseError> {
        let callee = match *self.current_kind() {
            TokenKind::Ident(_) => self.parse_name_or_namespace_ref()?,
            TokenKind::LBracket => self.parse_func_deref()?,
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1001,
                    format!(
                        "expected function name, found {}",
                        self.current_kind().display_name()
                    ),
                    self.current_span(),
                ))
            }
        };
        let (args, close) = self.parse_argument_list()?;

        if threaded && !self.dialect.allows_thread_pointer_calls() {
            let span = self.expr_span(object).merge(close);
            self.report(ParseError::new(
                ErrorCode::E1108,
                "`thread` on a pointer call requires the extended dialect",
                span,
            ));
        }

        let span = self.expr_span(object).merge(close);
        Ok(self.alloc_expr(
            ExprKind::PointerCall {
                object,
                threaded,
                callee,
                args,
            },
            span,
        ))
    }

    /// `ident` or `ident::ident` as an expression node.
    fn parse_name_or_namespace_ref(&mut self) -> Result<ExprId, ParseError> {
        let (name, span) = self.expect_ident()?;
        if self.check(&TokenKind::ColonColon) {
            self.advance();
            let (func, func_span) = self.expect_ident()?;
            return Ok(self.alloc_expr(
                ExprKind::NamespaceRef {
                    namespace: name,
                    name: func,
                },
                span.merge(func_span),
            ));
        }
        Ok(self.alloc_expr(ExprKind::Ident(name), span))
    }

    /// `[[ expr ]]` — both bracket pairs must be adjacent.
    fn parse_func_deref(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(&TokenKind::LBracket)?;
        self.expect(&TokenKind::LBracket)?;
        let func = self.parse_expr()?;
        let first_close = self.expect(&TokenKind::RBracket)?;
        if !(self.check(&TokenKind::RBracket) && first_close.end == self.current_span().start) {
            return Err(ParseError::new(
                ErrorCode::E1001,
                format!("expected `]]`, found {}", self.current_kind().display_name()),
                self.current_span(),
            ));
        }
        let close = self.current_span();
        self.advance();

        let span = start.merge(close);
        if !self.dialect.supports_function_pointers() {
            self.report(ParseError::new(
                ErrorCode::E1106,
                "function dereference requires the extended dialect",
                span,
            ));
        }
        Ok(self.alloc_expr(ExprKind::FuncDeref(func), span))
    }

    /// `( expr, expr, ... )` with optional trailing comma.
    fn parse_argument_list(&mut self) -> Result<(ExprRange, Span), ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut args: SmallVec<[ExprId; 8]> = SmallVec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        let close = self.expect(&TokenKind::RParen)?;
        Ok((self.ast.alloc_expr_list(&args), close))
    }

    // ── Primary forms ──────────────────────────────────────────────────

    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        match *self.current_kind() {
            TokenKind::Int(value) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::Int(value), span))
            }
            TokenKind::Float(bits) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::Float(bits), span))
            }
            TokenKind::String(name) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::String(name), span))
            }
            TokenKind::IString(name) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::IString(name), span))
            }
            TokenKind::HashString(name) => {
                self.advance();
                if !self.dialect.supports_hash_strings() {
                    self.report(ParseError::new(
                        ErrorCode::E1102,
                        "hash string literals require the extended dialect",
                        span,
                    ));
                }
                Ok(self.alloc_expr(ExprKind::HashString(name), span))
            }
            TokenKind::AnimTree => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::AnimTree, span))
            }
            TokenKind::AnimIdent(tree) => {
                self.advance();
                // `%tree::anim` is an anim reference.
                if self.check(&TokenKind::ColonColon) {
                    self.advance();
                    let (anim, anim_span) = self.expect_ident()?;
                    return Ok(
                        self.alloc_expr(ExprKind::AnimRef { tree, anim }, span.merge(anim_span))
                    );
                }
                Ok(self.alloc_expr(ExprKind::AnimIdent(tree), span))
            }
            TokenKind::Ident(name) => self.parse_ident_expr(name),
            TokenKind::Amp => self.parse_function_pointer(),
            TokenKind::LParen => self.parse_paren_or_vector(),
            TokenKind::LBracket => {
                if self.at_func_deref() {
                    self.parse_func_deref()
                } else {
                    self.parse_array_literal()
                }
            }
            _ => Err(ParseError::new(
                ErrorCode::E1002,
                format!(
                    "expected expression, found {}",
                    self.current_kind().display_name()
                ),
                span,
            )),
        }
    }

    /// Identifier-shaped primaries: literals and builtins by keyword role,
    /// `thread`, `new`, `isdefined`, namespace references, plain names.
    fn parse_ident_expr(&mut self, name: Name) -> Result<ExprId, ParseError> {
        let span = self.current_span();

        if name == self.kws.true_ {
            self.advance();
            return Ok(self.alloc_expr(ExprKind::Bool(true), span));
        }
        if name == self.kws.false_ {
            self.advance();
            return Ok(self.alloc_expr(ExprKind::Bool(false), span));
        }
        if name == self.kws.undefined {
            self.advance();
            return Ok(self.alloc_expr(ExprKind::Undefined, span));
        }

        if let Some(builtin) = self.builtin_var(name) {
            self.advance();
            return Ok(self.alloc_expr(ExprKind::Builtin(builtin), span));
        }

        // `thread <call>` — only when a callable actually follows, so that
        // `thread` stays usable as a plain name elsewhere.
        if name == self.kws.thread && self.starts_thread_operand() {
            self.advance();
            let operand = self.parse_expr_bp(15)?;
            let operand_kind = self.ast.expr(operand).kind;
            let operand_span = self.expr_span(operand);
            if !matches!(
                operand_kind,
                ExprKind::Call { .. } | ExprKind::PointerCall { .. } | ExprKind::Error
            ) {
                self.report(ParseError::new(
                    ErrorCode::E1011,
                    "`thread` must be followed by a call",
                    operand_span,
                ));
            } else if matches!(operand_kind, ExprKind::PointerCall { .. })
                && !self.dialect.allows_thread_pointer_calls()
            {
                self.report(ParseError::new(
                    ErrorCode::E1108,
                    "`thread` on a pointer call requires the extended dialect",
                    operand_span,
                ));
            }
            let span = span.merge(self.expr_span(operand));
            return Ok(self.alloc_expr(ExprKind::Thread(operand), span));
        }

        // `new Class(args)` — the leading keyword decides (ambiguity rule 1).
        if name == self.kws.new {
            self.advance();
            let (class, _) = self.expect_ident()?;
            let (args, close) = self.parse_argument_list()?;
            return Ok(self.alloc_expr(ExprKind::New { class, args }, span.merge(close)));
        }

        // `isdefined(expr)` is a primary form, not a call.
        if name == self.kws.isdefined && self.cursor.peek_tag(1) == TokenKind::TAG_LPAREN {
            self.advance();
            self.expect(&TokenKind::LParen)?;
            let inner = self.parse_expr()?;
            let close = self.expect(&TokenKind::RParen)?;
            return Ok(self.alloc_expr(ExprKind::IsDefined(inner), span.merge(close)));
        }

        self.parse_name_or_namespace_ref()
    }

    fn builtin_var(&self, name: Name) -> Option<BuiltinVar> {
        if name == self.kws.self_ {
            Some(BuiltinVar::SelfRef)
        } else if name == self.kws.level {
            Some(BuiltinVar::Level)
        } else if name == self.kws.game {
            Some(BuiltinVar::Game)
        } else if name == self.kws.world {
            Some(BuiltinVar::World)
        } else if name == self.kws.anim {
            Some(BuiltinVar::Anim)
        } else if name == self.kws.vararg && self.dialect.supports_vararg_builtin() {
            Some(BuiltinVar::Vararg)
        } else {
            None
        }
    }

    /// Does `thread` at the cursor start a thread expression (rather than a
    /// plain identifier)? True when an identifier, namespace call, builtin
    /// object, or `[[` follows.
    fn starts_thread_operand(&self) -> bool {
        match self.cursor.peek_kind(1) {
            TokenKind::Ident(_) => true,
            TokenKind::LBracket => self.cursor.peek_tag(2) == TokenKind::TAG_LBRACKET,
            _ => false,
        }
    }

    /// `&name` or `&ns::name` function pointer.
    fn parse_function_pointer(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(&TokenKind::Amp)?;
        let (first, mut end) = self.expect_ident()?;

        let (namespace, name) = if self.check(&TokenKind::ColonColon) {
            self.advance();
            let (func, func_span) = self.expect_ident()?;
            end = func_span;
            (first, func)
        } else {
            (Name::EMPTY, first)
        };

        let span = start.merge(end);
        if !self.dialect.supports_function_pointers() {
            self.report(ParseError::new(
                ErrorCode::E1105,
                "function pointers require the extended dialect",
                span,
            ));
        }
        Ok(self.alloc_expr(ExprKind::FuncPointer { namespace, name }, span))
    }

    /// `(` opens either a parenthesized expression or a vector literal;
    /// a `,` after the first component decides (ambiguity rule 5), and the
    /// arity must then be exactly three.
    fn parse_paren_or_vector(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(&TokenKind::LParen)?;
        let first = self.parse_expr()?;

        if !self.check(&TokenKind::Comma) {
            let close = self.expect(&TokenKind::RParen)?;
            return Ok(self.alloc_expr(ExprKind::Paren(first), start.merge(close)));
        }

        self.advance(); // first comma
        let y = self.parse_expr()?;
        if !self.check(&TokenKind::Comma) {
            return Err(ParseError::new(
                ErrorCode::E1005,
                "vector literals have exactly three components, found 2",
                self.current_span(),
            ));
        }
        self.advance(); // second comma
        let z = self.parse_expr()?;
        if self.check(&TokenKind::Comma) {
            return Err(ParseError::new(
                ErrorCode::E1005,
                "vector literals have exactly three components",
                self.current_span(),
            ));
        }
        let close = self.expect(&TokenKind::RParen)?;

        let span = start.merge(close);
        if !self.dialect.supports_vector_literals() {
            self.report(ParseError::new(
                ErrorCode::E1101,
                "vector literals require the extended dialect",
                span,
            ));
        }
        Ok(self.alloc_expr(ExprKind::VectorLit { x: first, y, z }, span))
    }

    /// `[ a, b, c ]` with optional trailing comma; `[` here is in operand
    /// position, so this is never a subscript (ambiguity rule 3).
    fn parse_array_literal(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(&TokenKind::LBracket)?;
        let mut elements: SmallVec<[ExprId; 8]> = SmallVec::new();
        while !self.check(&TokenKind::RBracket) {
            elements.push(self.parse_expr()?);
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        let close = self.expect(&TokenKind::RBracket)?;
        let range = self.ast.alloc_expr_list(&elements);
        Ok(self.alloc_expr(ExprKind::ArrayLit(range), start.merge(close)))
    }

    // ── Operator matching ──────────────────────────────────────────────

    fn peek_binary_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PipePipe => Some(BinaryOp::Or),
            TokenKind::AmpAmp => Some(BinaryOp::And),
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            TokenKind::Caret => Some(BinaryOp::BitXor),
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::EqEqEq => Some(BinaryOp::StrictEq),
            TokenKind::BangEq => Some(BinaryOp::NotEq),
            TokenKind::BangEqEq => Some(BinaryOp::StrictNotEq),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    fn peek_assign_op(&self) -> Option<AssignOp> {
        match self.current_kind() {
            TokenKind::Eq => Some(AssignOp::Assign),
            TokenKind::PlusEq => Some(AssignOp::Add),
            TokenKind::MinusEq => Some(AssignOp::Sub),
            TokenKind::StarEq => Some(AssignOp::Mul),
            TokenKind::SlashEq => Some(AssignOp::Div),
            TokenKind::PercentEq => Some(AssignOp::Mod),
            TokenKind::AmpEq => Some(AssignOp::BitAnd),
            TokenKind::PipeEq => Some(AssignOp::BitOr),
            TokenKind::CaretEq => Some(AssignOp::BitXor),
            TokenKind::ShlEq => Some(AssignOp::Shl),
            TokenKind::ShrEq => Some(AssignOp::Shr),
            _ => None,
        }
    }
}
