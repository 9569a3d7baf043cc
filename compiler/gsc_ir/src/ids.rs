//! Arena ids and ranges for the flat syntax tree.
//!
//! Nodes reference children by `u32` index into the [`Ast`](crate::Ast)
//! arena instead of boxing. `u32::MAX` is the "absent child" sentinel for
//! optional fields. Child lists are `(start: u32, len: u16)` ranges over
//! pooled vectors.

use std::fmt;

/// Index into the expression arena.
///
/// - Memory: 4 bytes (vs 8 for a `Box`)
/// - Equality: O(1) integer compare
/// - Cache locality: indices into a contiguous array
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel for absent optional children.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Generates the remaining id types; each is the same shape as [`ExprId`].
macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel for absent optional children.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index into the function-definition arena.
    FunctionId
);
define_id!(
    /// Index into the class-definition arena.
    ClassId
);
define_id!(
    /// Index into the directive arena.
    DirectiveId
);

/// Generates `(start: u32, len: u16)` range types over a pooled vector.
///
/// 8 bytes after alignment, still 3x smaller than a `Vec` of ids.
macro_rules! define_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            /// Empty range.
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Iterator over pool indices in this range.
            #[inline]
            pub fn indices(&self) -> impl Iterator<Item = usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    self.start + u32::from(self.len)
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

define_range!(
    /// Range over the pooled `ExprId` list (argument lists, array elements).
    ExprRange
);
define_range!(
    /// Range over the pooled `StmtId` list (block bodies, case bodies).
    StmtRange
);
define_range!(
    /// Range over the pooled parameter list.
    ParamRange
);
define_range!(
    /// Range over the pooled switch-case list.
    CaseRange
);
define_range!(
    /// Range over the pooled class-member list.
    MemberRange
);
define_range!(
    /// Range over the pooled `Name` list (`waittill` bindings).
    NameRange
);
