//! Flat syntax tree types using arena allocation.
//!
//! One closed enum per syntactic category (`ExprKind`, `StmtKind`,
//! `DirectiveKind`, `ClassMember`): consumers pattern-match exhaustively, so
//! adding a node kind is a compile-time-checked change everywhere.
//!
//! # Module Structure
//!
//! - `operators`: binary/unary/assignment operator enums with binding powers
//! - `expr`: expression node and variants
//! - `stmt`: statement node and variants
//! - `items`: functions, classes, parameters, directives
//! - `arena`: the [`Ast`] arena and [`SourceFile`] root

mod arena;
mod expr;
mod items;
mod operators;
mod stmt;

pub use arena::{Ast, SourceFile};
pub use expr::{BuiltinVar, Expr, ExprKind};
pub use items::{Class, ClassMember, Directive, DirectiveKind, FnModifier, Function, Param};
pub use operators::{AssignOp, BinaryOp, IncDecOp, UnaryOp};
pub use stmt::{Stmt, StmtKind, SwitchCase};
