//! Expression nodes.

use std::fmt;

use super::operators::{AssignOp, BinaryOp, IncDecOp, UnaryOp};
use crate::ids::{ExprId, ExprRange};
use crate::name::Name;
use crate::span::Span;

/// Expression node. All children are arena ids, not boxes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// The builtin variables recognized in expression position.
///
/// `Vararg` is only recognized under the extended dialect; under legacy the
/// identifier parses as a plain `Ident`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinVar {
    SelfRef,
    Level,
    Game,
    World,
    Anim,
    Vararg,
}

/// Expression variants.
///
/// Formed at the precedence level dictated by the operator table: a node at
/// level *p* never directly holds an unparenthesized operand whose operator
/// binds looser than *p* (enforced by construction in the parser).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Integer literal: `42`, `0x1F`
    Int(i64),

    /// Float literal: `3.14`, `2.5e-8` (stored as bits for Hash)
    Float(u64),

    /// `true` / `false`
    Bool(bool),

    /// `undefined`
    Undefined,

    /// Plain string literal `"…"` (raw contents, escapes not decoded)
    String(Name),

    /// Localized string literal `&"…"`
    IString(Name),

    /// Hash string literal `#"…"` (extended dialect)
    HashString(Name),

    /// `#animtree`
    AnimTree,

    /// Variable reference
    Ident(Name),

    /// `self`, `level`, `game`, `world`, `anim`, `vararg`
    Builtin(BuiltinVar),

    /// Anim identifier `%name`
    AnimIdent(Name),

    /// Anim reference `%tree::anim`
    AnimRef { tree: Name, anim: Name },

    /// Namespaced function reference `ns::name` (callee position)
    NamespaceRef { namespace: Name, name: Name },

    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Prefix `! ~ - +`
    Unary { op: UnaryOp, operand: ExprId },

    /// `target op= value` (level 0, right-associative)
    Assign {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },

    /// `++x` / `x--` (level 12)
    Update {
        op: IncDecOp,
        operand: ExprId,
        prefix: bool,
    },

    /// `condition ? consequence : alternative` (level 0, right-associative)
    Ternary {
        condition: ExprId,
        consequence: ExprId,
        alternative: ExprId,
    },

    /// `( expr )`
    Paren(ExprId),

    /// `[ a, b, c ]` — `[` in primary position
    ArrayLit(ExprRange),

    /// `( x, y, z )` — exactly three components (extended dialect)
    VectorLit { x: ExprId, y: ExprId, z: ExprId },

    /// `callee(args)` with no preceding object expression
    Call { callee: ExprId, args: ExprRange },

    /// `object [thread] callee(args)` — dispatch through an object reference
    PointerCall {
        object: ExprId,
        threaded: bool,
        callee: ExprId,
        args: ExprRange,
    },

    /// `object.property` / `object->property` (level 14)
    Member {
        object: ExprId,
        property: Name,
        arrow: bool,
    },

    /// `object[index]` — `[` directly after a postfix expression (level 14)
    Subscript { object: ExprId, index: ExprId },

    /// `thread <call>` (level 15, highest prefix)
    Thread(ExprId),

    /// `new Class(args)` — always a new-expression, never a call on `new`
    New { class: Name, args: ExprRange },

    /// `isdefined(expr)`
    IsDefined(ExprId),

    /// `&name` / `&ns::name` (extended dialect); `Name::EMPTY` = no namespace
    FuncPointer { namespace: Name, name: Name },

    /// `[[ expr ]]` (extended dialect)
    FuncDeref(ExprId),

    /// Parse error placeholder
    Error,
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(v) => write!(f, "Int({v})"),
            ExprKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            ExprKind::Bool(b) => write!(f, "Bool({b})"),
            ExprKind::Undefined => write!(f, "Undefined"),
            ExprKind::String(n) => write!(f, "String({n:?})"),
            ExprKind::IString(n) => write!(f, "IString({n:?})"),
            ExprKind::HashString(n) => write!(f, "HashString({n:?})"),
            ExprKind::AnimTree => write!(f, "AnimTree"),
            ExprKind::Ident(n) => write!(f, "Ident({n:?})"),
            ExprKind::Builtin(v) => write!(f, "Builtin({v:?})"),
            ExprKind::AnimIdent(n) => write!(f, "AnimIdent({n:?})"),
            ExprKind::AnimRef { tree, anim } => write!(f, "AnimRef({tree:?}, {anim:?})"),
            ExprKind::NamespaceRef { namespace, name } => {
                write!(f, "NamespaceRef({namespace:?}, {name:?})")
            }
            ExprKind::Binary { op, left, right } => {
                write!(f, "Binary({op:?}, {left:?}, {right:?})")
            }
            ExprKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            ExprKind::Assign { op, target, value } => {
                write!(f, "Assign({op:?}, {target:?}, {value:?})")
            }
            ExprKind::Update {
                op,
                operand,
                prefix,
            } => write!(f, "Update({op:?}, {operand:?}, prefix={prefix})"),
            ExprKind::Ternary {
                condition,
                consequence,
                alternative,
            } => write!(f, "Ternary({condition:?}, {consequence:?}, {alternative:?})"),
            ExprKind::Paren(e) => write!(f, "Paren({e:?})"),
            ExprKind::ArrayLit(r) => write!(f, "ArrayLit({r:?})"),
            ExprKind::VectorLit { x, y, z } => write!(f, "VectorLit({x:?}, {y:?}, {z:?})"),
            ExprKind::Call { callee, args } => write!(f, "Call({callee:?}, {args:?})"),
            ExprKind::PointerCall {
                object,
                threaded,
                callee,
                args,
            } => write!(
                f,
                "PointerCall({object:?}, thread={threaded}, {callee:?}, {args:?})"
            ),
            ExprKind::Member {
                object,
                property,
                arrow,
            } => write!(f, "Member({object:?}, {property:?}, arrow={arrow})"),
            ExprKind::Subscript { object, index } => {
                write!(f, "Subscript({object:?}, {index:?})")
            }
            ExprKind::Thread(e) => write!(f, "Thread({e:?})"),
            ExprKind::New { class, args } => write!(f, "New({class:?}, {args:?})"),
            ExprKind::IsDefined(e) => write!(f, "IsDefined({e:?})"),
            ExprKind::FuncPointer { namespace, name } => {
                write!(f, "FuncPointer({namespace:?}, {name:?})")
            }
            ExprKind::FuncDeref(e) => write!(f, "FuncDeref({e:?})"),
            ExprKind::Error => write!(f, "Error"),
        }
    }
}

// ExprKind should stay compact: the largest variant is PointerCall
// (object + callee + args range + thread flag).
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<ExprKind>() <= 24);
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Expr>() <= 32);
