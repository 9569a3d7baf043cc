//! Statement nodes.

use std::fmt;

use crate::ids::{
    CaseRange, ClassId, DirectiveId, ExprId, ExprRange, FunctionId, NameRange, StmtId, StmtRange,
};
use crate::name::Name;
use crate::span::Span;

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement variants.
///
/// Control-flow bodies are single `StmtId`s: a braced body is a `Block`
/// statement, an unbraced one is whatever single statement followed. The
/// dangling `else` therefore attaches to the nearest unmatched `if` purely by
/// recursive-descent structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum StmtKind {
    /// A preprocessor directive (recognized, never expanded).
    Directive(DirectiveId),

    /// `function [private|autoexec] name(params) { … }`
    FunctionDef(FunctionId),

    /// `class Name [: Parent] { … }`
    ClassDef(ClassId),

    /// `expr;`
    Expr(ExprId),

    /// `{ … }`
    Block(StmtRange),

    /// `if (cond) stmt [else stmt]`; `StmtId::INVALID` = no else.
    If {
        condition: ExprId,
        consequence: StmtId,
        alternative: StmtId,
    },

    /// `while (cond) stmt`
    While { condition: ExprId, body: StmtId },

    /// `do stmt while (cond);`
    DoWhile { body: StmtId, condition: ExprId },

    /// `for (init; cond; update) stmt` — any header slot may be absent.
    /// The initializer is a statement id so it can be either an expression
    /// or a `var` declaration.
    For {
        initializer: StmtId,
        condition: ExprId,
        update: ExprId,
        body: StmtId,
    },

    /// `foreach (element in collection) stmt`
    Foreach {
        element: Name,
        collection: ExprId,
        body: StmtId,
    },

    /// `switch (value) { case …: … default: … }` — cases fall through.
    Switch { value: ExprId, cases: CaseRange },

    /// `break;`
    Break,

    /// `continue;`
    Continue,

    /// `return [expr];` — `ExprId::INVALID` = no value.
    Return(ExprId),

    /// `wait expr;` / `waitrealtime expr;`
    Wait { realtime: bool, duration: ExprId },

    /// `waittillframeend [expr];` — `ExprId::INVALID` = no argument.
    WaittillFrameEnd(ExprId),

    /// `object notify(event, args…);`
    Notify {
        object: ExprId,
        event: ExprId,
        args: ExprRange,
    },

    /// `object endon(event);`
    Endon { object: ExprId, event: ExprId },

    /// `object waittill(event, bound-identifiers…);`
    /// `matched` distinguishes `waittillmatch`.
    Waittill {
        object: ExprId,
        event: ExprId,
        bindings: NameRange,
        matched: bool,
    },

    /// `var name [= init];` — `ExprId::INVALID` = no initializer.
    VarDecl { name: Name, init: ExprId },

    /// `const name = value;`
    ConstDecl { name: Name, value: ExprId },

    /// A bare `;`.
    Empty,

    /// Recovery marker covering a discarded token range.
    Error,
}

impl fmt::Debug for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtKind::Directive(d) => write!(f, "Directive({d:?})"),
            StmtKind::FunctionDef(id) => write!(f, "FunctionDef({id:?})"),
            StmtKind::ClassDef(id) => write!(f, "ClassDef({id:?})"),
            StmtKind::Expr(e) => write!(f, "Expr({e:?})"),
            StmtKind::Block(r) => write!(f, "Block({r:?})"),
            StmtKind::If {
                condition,
                consequence,
                alternative,
            } => write!(f, "If({condition:?}, {consequence:?}, {alternative:?})"),
            StmtKind::While { condition, body } => write!(f, "While({condition:?}, {body:?})"),
            StmtKind::DoWhile { body, condition } => {
                write!(f, "DoWhile({body:?}, {condition:?})")
            }
            StmtKind::For {
                initializer,
                condition,
                update,
                body,
            } => write!(f, "For({initializer:?}, {condition:?}, {update:?}, {body:?})"),
            StmtKind::Foreach {
                element,
                collection,
                body,
            } => write!(f, "Foreach({element:?}, {collection:?}, {body:?})"),
            StmtKind::Switch { value, cases } => write!(f, "Switch({value:?}, {cases:?})"),
            StmtKind::Break => write!(f, "Break"),
            StmtKind::Continue => write!(f, "Continue"),
            StmtKind::Return(e) => write!(f, "Return({e:?})"),
            StmtKind::Wait { realtime, duration } => {
                write!(f, "Wait(realtime={realtime}, {duration:?})")
            }
            StmtKind::WaittillFrameEnd(e) => write!(f, "WaittillFrameEnd({e:?})"),
            StmtKind::Notify {
                object,
                event,
                args,
            } => write!(f, "Notify({object:?}, {event:?}, {args:?})"),
            StmtKind::Endon { object, event } => write!(f, "Endon({object:?}, {event:?})"),
            StmtKind::Waittill {
                object,
                event,
                bindings,
                matched,
            } => write!(
                f,
                "Waittill({object:?}, {event:?}, {bindings:?}, matched={matched})"
            ),
            StmtKind::VarDecl { name, init } => write!(f, "VarDecl({name:?}, {init:?})"),
            StmtKind::ConstDecl { name, value } => write!(f, "ConstDecl({name:?}, {value:?})"),
            StmtKind::Empty => write!(f, "Empty"),
            StmtKind::Error => write!(f, "Error"),
        }
    }
}

/// One `case value:` or `default:` arm of a switch.
/// `value == ExprId::INVALID` marks the default arm.
/// Cases fall through; no implicit break is inserted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchCase {
    pub value: ExprId,
    pub body: StmtRange,
    pub span: Span,
}

impl SwitchCase {
    /// Returns `true` for the `default:` arm.
    pub fn is_default(&self) -> bool {
        !self.value.is_valid()
    }
}
