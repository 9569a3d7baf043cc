//! Parser test suite.
//!
//! `parser` covers the statement and expression grammar, `ambiguity` the
//! five disambiguation rules, `recovery` error handling, and `dialect` the
//! legacy-profile restrictions.

#![allow(clippy::unwrap_used)] // tests use unwrap for brevity

mod ambiguity;
mod parser;

use gsc_ir::{Dialect, Expr, ExprId, ExprKind, Stmt, StmtId, StmtKind, StringInterner};

use crate::{parse_source, ParsedUnit};

pub(crate) struct Parsed {
    pub unit: ParsedUnit,
    pub interner: StringInterner,
}

impl Parsed {
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        self.unit.ast.stmt(id)
    }

    pub fn expr(&self, id: ExprId) -> &Expr {
        self.unit.ast.expr(id)
    }

    /// The n-th top-level statement.
    pub fn top(&self, n: usize) -> &Stmt {
        self.stmt(self.unit.file.stmts[n])
    }

    /// The expression of the n-th top-level statement, which must be an
    /// expression statement.
    pub fn top_expr(&self, n: usize) -> &Expr {
        match self.top(n).kind {
            StmtKind::Expr(id) => self.expr(id),
            ref other => panic!("expected expression statement, got {other:?}"),
        }
    }

    pub fn lookup(&self, name: gsc_ir::Name) -> &str {
        self.interner.lookup(name)
    }
}

/// Parse under the given dialect; no assertion on errors.
pub(crate) fn parse_with(source: &str, dialect: Dialect) -> Parsed {
    let interner = StringInterner::new();
    let unit = parse_source(source, &interner, dialect);
    Parsed { unit, interner }
}

/// Parse under the extended dialect and assert the unit is error-free.
pub(crate) fn parse_clean(source: &str) -> Parsed {
    let parsed = parse_with(source, Dialect::Extended);
    assert!(
        !parsed.unit.has_errors(),
        "unexpected errors for {source:?}: lex={:?} parse={:?}",
        parsed.unit.lex_errors,
        parsed.unit.errors
    );
    parsed
}

/// Unwrap an expression statement's expression kind.
pub(crate) fn expr_kind(parsed: &Parsed, n: usize) -> ExprKind {
    parsed.top_expr(n).kind
}
