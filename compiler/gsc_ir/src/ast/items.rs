//! Definitions and directives: functions, classes, preprocessor nodes.

use crate::ids::{ExprId, FunctionId, MemberRange, ParamRange, StmtId};
use crate::name::Name;
use crate::span::Span;

/// Optional modifier on a function definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FnModifier {
    #[default]
    None,
    Private,
    Autoexec,
}

/// A function definition (top-level, method, constructor, or destructor).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Function {
    pub name: Name,
    pub modifier: FnModifier,
    pub params: ParamRange,
    /// Always a `Block` statement.
    pub body: StmtId,
    pub span: Span,
}

/// One formal parameter.
///
/// The parameter list owning this may contain at most one `vararg` marker,
/// and only as the last parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    /// `Name::EMPTY` for the `...` vararg marker.
    pub name: Name,
    /// Default value (extended dialect); `ExprId::INVALID` = none.
    pub default: ExprId,
    /// `true` for the trailing `...`.
    pub vararg: bool,
    pub span: Span,
}

/// A class definition. Single inheritance only: at most one parent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Class {
    pub name: Name,
    /// `Name::EMPTY` = no parent.
    pub parent: Name,
    pub members: MemberRange,
    pub span: Span,
}

/// One member of a class body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassMember {
    /// `var name [= init];` — `ExprId::INVALID` = no initializer.
    Field {
        name: Name,
        init: ExprId,
        span: Span,
    },
    /// `constructor(params) { … }` — at most one per class.
    Constructor(FunctionId),
    /// `destructor(params) { … }` — at most one per class.
    Destructor(FunctionId),
    /// A method `function` definition.
    Method(FunctionId),
}

/// A recognized (never expanded) preprocessor directive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub span: Span,
}

/// Directive variants.
///
/// Macro payloads are raw, unvalidated text: the front-end never parses
/// `params`/`body` contents as GSC. A future expansion pass reads these and
/// re-feeds expanded text through the same lexer/parser pair.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DirectiveKind {
    /// `#using <path>;`
    Using { path: Name },
    /// `#insert <path>;`
    Insert { path: Name },
    /// `#namespace <ident>;`
    Namespace { name: Name },
    /// `#define NAME[(params)] body` — `params`/`body` are `Name::EMPTY`
    /// when absent.
    Define {
        name: Name,
        params: Name,
        body: Name,
    },
    /// `#precache(type, asset);` — both string literal contents.
    Precache { asset_type: Name, asset: Name },
    /// `#using_animtree(tree);`
    UsingAnimtree { tree: Name },
    /// `#if <expr>` — condition parsed for spans, never evaluated.
    If { condition: ExprId },
    /// `#elif <expr>`
    Elif { condition: ExprId },
    /// `#else`
    Else,
    /// `#endif`
    Endif,
}
