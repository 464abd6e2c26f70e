//! One-shot matching entry points.
//!
//! These compile a pattern for a single use. Callers matching repeatedly
//! should hold on to a `Matcher` or `Dispatcher` instead.

use elx_value::Value;

use crate::{compile, no_match, Bindings, Clause, Dispatcher, MatchError, Pattern};

/// Match `value` once against `pattern`.
///
/// # Errors
/// Returns `MatchError::NoMatch` rendering `value` when it does not match.
pub fn bind(pattern: &Pattern, value: &Value) -> Result<Bindings, MatchError> {
    compile(pattern).bind(value).ok_or_else(|| no_match(value))
}

/// Whether `value` matches `pattern`.
pub fn is_match(pattern: &Pattern, value: &Value) -> bool {
    compile(pattern).bind(value).is_some()
}

/// Whether `value` matches `pattern` and `guard` accepts the bindings.
///
/// Runs through a one-clause dispatcher, so the guard sees exactly what a
/// dispatcher clause would.
pub fn is_match_guarded<G>(pattern: &Pattern, value: &Value, guard: G) -> bool
where
    G: Fn(&[Value]) -> bool + Send + Sync + 'static,
{
    let clause = Clause::new([pattern.clone()], |_| ()).with_guard(guard);
    Dispatcher::new(vec![clause])
        .dispatch(std::slice::from_ref(value))
        .is_ok()
}

/// Whether any of `values` matches `pattern`.
pub fn contains(pattern: &Pattern, values: &[Value]) -> bool {
    let matcher = compile(pattern);
    values.iter().any(|value| matcher.bind(value).is_some())
}
