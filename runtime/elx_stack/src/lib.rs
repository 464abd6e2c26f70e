//! Stack growth for recursive walks over nested data.
//!
//! Bitstring literals, lists, tuples, objects and patterns can all nest
//! without limit. The literal parser, the pattern compiler, the compiled
//! matchers and structural equality each recurse once per level, so every
//! such step goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended with `stacker` once less than
//! `RED_ZONE` bytes remain. On `wasm32` the closure runs directly.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value.as_list() {
///         Some(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         None => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// Passthrough; wasm32 has no segmented stack to grow.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
