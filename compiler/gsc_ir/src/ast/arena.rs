//! The syntax tree arena and the `source_file` root.

use std::fmt;

use super::expr::Expr;
use super::items::{Class, Directive, Function, Param};
use super::stmt::{Stmt, SwitchCase};
use crate::ids::{
    CaseRange, ClassId, DirectiveId, ExprId, ExprRange, FunctionId, MemberRange, NameRange,
    ParamRange, StmtId, StmtRange,
};
use crate::name::Name;
use crate::span::Span;
use crate::ClassMember;

/// Root node: one compilation unit.
///
/// Top-level statements in source order. Trivia lives in the lexer's
/// `TriviaList`, retrievable alongside but never interleaved here.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SourceFile {
    pub stmts: Vec<StmtId>,
    /// Covers the whole input, including trailing trivia.
    pub span: Span,
}

/// Arena owning every node of one parse.
///
/// Nodes are produced once during a single top-to-bottom parse and are
/// immutable afterward. Ownership is tree-shaped: ids always point downward,
/// there are no back-references.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Ast {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    functions: Vec<Function>,
    classes: Vec<Class>,
    directives: Vec<Directive>,
    // Pooled child lists.
    expr_pool: Vec<ExprId>,
    stmt_pool: Vec<StmtId>,
    param_pool: Vec<Param>,
    case_pool: Vec<SwitchCase>,
    member_pool: Vec<ClassMember>,
    name_pool: Vec<Name>,
}

fn range_len(len: usize) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("child list of {len} items exceeds u16::MAX"))
}

fn pool_start(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena pool exceeded u32::MAX entries"))
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(pool_start(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(pool_start(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_function(&mut self, function: Function) -> FunctionId {
        let id = FunctionId::new(pool_start(self.functions.len()));
        self.functions.push(function);
        id
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    pub fn alloc_class(&mut self, class: Class) -> ClassId {
        let id = ClassId::new(pool_start(self.classes.len()));
        self.classes.push(class);
        id
    }

    #[inline]
    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    pub fn alloc_directive(&mut self, directive: Directive) -> DirectiveId {
        let id = DirectiveId::new(pool_start(self.directives.len()));
        self.directives.push(directive);
        id
    }

    #[inline]
    pub fn directive(&self, id: DirectiveId) -> &Directive {
        &self.directives[id.index()]
    }

    // ── Pooled child lists ─────────────────────────────────────────────

    pub fn alloc_expr_list(&mut self, items: &[ExprId]) -> ExprRange {
        let start = pool_start(self.expr_pool.len());
        self.expr_pool.extend_from_slice(items);
        ExprRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_pool[range.start as usize..range.start as usize + range.len()]
    }

    pub fn alloc_stmt_list(&mut self, items: &[StmtId]) -> StmtRange {
        let start = pool_start(self.stmt_pool.len());
        self.stmt_pool.extend_from_slice(items);
        StmtRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_pool[range.start as usize..range.start as usize + range.len()]
    }

    pub fn alloc_params(&mut self, items: &[Param]) -> ParamRange {
        let start = pool_start(self.param_pool.len());
        self.param_pool.extend_from_slice(items);
        ParamRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn params(&self, range: ParamRange) -> &[Param] {
        &self.param_pool[range.start as usize..range.start as usize + range.len()]
    }

    pub fn alloc_cases(&mut self, items: &[SwitchCase]) -> CaseRange {
        let start = pool_start(self.case_pool.len());
        self.case_pool.extend_from_slice(items);
        CaseRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn cases(&self, range: CaseRange) -> &[SwitchCase] {
        &self.case_pool[range.start as usize..range.start as usize + range.len()]
    }

    pub fn alloc_members(&mut self, items: &[ClassMember]) -> MemberRange {
        let start = pool_start(self.member_pool.len());
        self.member_pool.extend_from_slice(items);
        MemberRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn members(&self, range: MemberRange) -> &[ClassMember] {
        &self.member_pool[range.start as usize..range.start as usize + range.len()]
    }

    pub fn alloc_names(&mut self, items: &[Name]) -> NameRange {
        let start = pool_start(self.name_pool.len());
        self.name_pool.extend_from_slice(items);
        NameRange::new(start, range_len(items.len()))
    }

    #[inline]
    pub fn names(&self, range: NameRange) -> &[Name] {
        &self.name_pool[range.start as usize..range.start as usize + range.len()]
    }

    /// Number of expression nodes (diagnostic/testing aid).
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of statement nodes (diagnostic/testing aid).
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ast({} exprs, {} stmts, {} functions, {} classes, {} directives)",
            self.exprs.len(),
            self.stmts.len(),
            self.functions.len(),
            self.classes.len(),
            self.directives.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, StmtKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn alloc_and_get_round_trip() {
        let mut ast = Ast::new();
        let a = ast.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(0, 1)));
        let b = ast.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(2, 3)));

        assert_ne!(a, b);
        assert!(matches!(ast.expr(a).kind, ExprKind::Int(1)));
        assert!(matches!(ast.expr(b).kind, ExprKind::Int(2)));
    }

    #[test]
    fn expr_list_round_trip() {
        let mut ast = Ast::new();
        let ids: Vec<ExprId> = (0..3)
            .map(|i| ast.alloc_expr(Expr::new(ExprKind::Int(i), Span::DUMMY)))
            .collect();
        let range = ast.alloc_expr_list(&ids);

        assert_eq!(range.len(), 3);
        assert_eq!(ast.expr_list(range), ids.as_slice());
    }

    #[test]
    fn empty_list_is_empty_range() {
        let mut ast = Ast::new();
        let range = ast.alloc_stmt_list(&[]);
        assert!(range.is_empty());
        assert!(ast.stmt_list(range).is_empty());
    }

    #[test]
    fn stmt_alloc() {
        let mut ast = Ast::new();
        let id = ast.alloc_stmt(Stmt::new(StmtKind::Break, Span::new(0, 6)));
        assert!(matches!(ast.stmt(id).kind, StmtKind::Break));
        assert_eq!(ast.stmt_count(), 1);
    }
}
