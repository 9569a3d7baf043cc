//! Stack headroom guard for deeply nested expressions.
//!
//! Pathological inputs like ten thousand nested parens would otherwise blow
//! the thread stack; `stacker` grows it on demand instead.

/// Red-zone size: grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// How much stack to allocate when growing.
const GROW_BY: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone is reached.
#[inline]
pub(crate) fn ensure<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}
