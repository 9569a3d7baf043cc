//! Core data types for the GSC front-end.
//!
//! This crate contains the structures shared by the lexer and parser:
//! - Spans for source locations
//! - Names for interned identifiers, plus the keyword table
//! - Tokens, `TokenList`, and the trivia side-table
//! - The flat arena syntax tree (`Ast`, `ExprId`, `StmtId`, ...)
//! - `Dialect` selection (legacy vs. extended GSC)
//!
//! # Design Philosophy
//!
//! - **Intern everything**: strings become `Name(u32)` with O(1) equality.
//! - **Flatten everything**: no `Box<Expr>`; nodes hold `u32` ids into the
//!   arena and child lists hold `(start, len)` ranges over pooled vectors.
//! - Keywords are *not* reserved by the lexer. `if`, `self`, `thread` all lex
//!   as identifiers; the parser decides their role from position, comparing
//!   against the pre-interned [`Keywords`] table.
//!
//! Types that contain floats store them as `u64` bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod dialect;
mod ids;
mod interner;
mod keywords;
mod name;
mod span;
mod token;
mod trivia;

pub use ast::{
    Ast, AssignOp, BinaryOp, BuiltinVar, Class, ClassMember, Directive, DirectiveKind, Expr,
    ExprKind, FnModifier, Function, IncDecOp, Param, SourceFile, Stmt, StmtKind, SwitchCase,
    UnaryOp,
};
pub use dialect::Dialect;
pub use ids::{
    CaseRange, ClassId, DirectiveId, ExprId, ExprRange, FunctionId, MemberRange, NameRange,
    ParamRange, StmtId, StmtRange,
};
pub use interner::{SharedInterner, StringInterner};
pub use keywords::Keywords;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use trivia::{Trivia, TriviaKind, TriviaList};
