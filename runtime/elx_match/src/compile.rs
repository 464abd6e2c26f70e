//! Pattern compiler.
//!
//! `compile` walks a pattern once and builds a tree of closures. Everything
//! that depends only on the pattern (sub-matchers, lengths, key lists, the
//! regex) is resolved here, so running a `Matcher` only inspects the value.
//!
//! Sub-matchers are built in descent order and run in that same order, which
//! is what fixes the order of the bindings they push.

use std::fmt;

use elx_stack::ensure_sufficient_stack;
use elx_value::{Atom, Value};

use crate::{Bindings, Pattern};

type MatchFn = Box<dyn Fn(&Value, &mut Bindings) -> bool + Send + Sync>;

/// A compiled pattern.
///
/// Matchers are immutable and reusable; all per-match state lives in the
/// caller's `Bindings` buffer.
pub struct Matcher {
    pattern: Pattern,
    run: MatchFn,
}

impl Matcher {
    /// Match `value`, appending captured values to `bindings`.
    ///
    /// Returns `false` on mismatch. Bindings pushed before a nested failure
    /// are left in the buffer; callers discard the buffer on `false`.
    #[inline]
    pub fn matches(&self, value: &Value, bindings: &mut Bindings) -> bool {
        (self.run)(value, bindings)
    }

    /// Match `value` against a fresh buffer.
    pub fn bind(&self, value: &Value) -> Option<Bindings> {
        let mut bindings = Bindings::new();
        self.matches(value, &mut bindings).then_some(bindings)
    }

    /// The pattern this matcher was compiled from.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher")
            .field(&format_args!("{}", self.pattern))
            .finish()
    }
}

/// Compile `pattern` into a reusable matcher.
pub fn compile(pattern: &Pattern) -> Matcher {
    Matcher {
        pattern: pattern.clone(),
        run: build(pattern),
    }
}

fn build(pattern: &Pattern) -> MatchFn {
    ensure_sufficient_stack(|| build_node(pattern))
}

fn build_node(pattern: &Pattern) -> MatchFn {
    match pattern {
        Pattern::Wildcard => boxed(|_, _| true),

        Pattern::Bound(expected) => {
            let expected = expected.clone();
            boxed(move |value, bindings| {
                if value.equals(&expected) {
                    bindings.push(value.clone());
                    true
                } else {
                    false
                }
            })
        }

        Pattern::Parameter => boxed(|value, bindings| {
            bindings.push(value.clone());
            true
        }),

        Pattern::HeadTail => boxed(|value, bindings| match value.as_list() {
            Some([head, tail @ ..]) if !tail.is_empty() => {
                bindings.push(head.clone());
                bindings.push(Value::list(tail.to_vec()));
                true
            }
            _ => false,
        }),

        Pattern::StartsWith(prefix) => {
            let prefix = prefix.clone();
            boxed(move |value, bindings| {
                let rest = value
                    .as_str()
                    .and_then(|s| s.strip_prefix(prefix.as_str()))
                    .filter(|rest| !rest.is_empty());
                match rest {
                    Some(rest) => {
                        bindings.push(Value::string(rest));
                        true
                    }
                    None => false,
                }
            })
        }

        Pattern::Capture(inner) => {
            let inner = build(inner);
            boxed(move |value, bindings| {
                if inner(value, bindings) {
                    bindings.push(value.clone());
                    true
                } else {
                    false
                }
            })
        }

        Pattern::Literal(expected) => {
            let expected = expected.clone();
            boxed(move |value, _| literal_eq(&expected, value))
        }

        Pattern::Regex(re) => {
            let re = re.clone();
            boxed(move |value, _| value.as_str().is_some_and(|s| re.is_match(s)))
        }

        Pattern::FunctionTag(tag) => {
            let tag = *tag;
            boxed(move |value, bindings| {
                if value.type_tag() == tag {
                    bindings.push(value.clone());
                    true
                } else {
                    false
                }
            })
        }

        Pattern::Array(items) => sequence(items, Value::as_list),
        Pattern::Tuple(items) => sequence(items, Value::as_tuple),

        Pattern::Object { tag, fields } => {
            let tag = *tag;
            let fields: Vec<(Atom, MatchFn)> =
                fields.iter().map(|(key, p)| (*key, build(p))).collect();
            boxed(move |value, bindings| {
                let Some(obj) = value.as_object() else {
                    return false;
                };
                if obj.tag() != tag {
                    return false;
                }
                // Every key must exist before any field is matched.
                if !fields.iter().all(|(key, _)| obj.contains_key(*key)) {
                    return false;
                }
                fields.iter().all(|(key, matcher)| {
                    obj.get(*key)
                        .is_some_and(|field| matcher(field, bindings))
                })
            })
        }

        Pattern::Symbol(atom) => {
            let atom = *atom;
            boxed(move |value, _| value.as_atom() == Some(atom))
        }
    }
}

/// Box a matcher step. Steps call their sub-matchers directly, so each one
/// checks the stack before running.
fn boxed<F>(f: F) -> MatchFn
where
    F: Fn(&Value, &mut Bindings) -> bool + Send + Sync + 'static,
{
    Box::new(move |value: &Value, bindings: &mut Bindings| {
        ensure_sufficient_stack(|| f(value, bindings))
    })
}

/// Fixed-length positional match over the sequence `view` extracts.
fn sequence(items: &[Pattern], view: fn(&Value) -> Option<&[Value]>) -> MatchFn {
    let subs: Vec<MatchFn> = items.iter().map(build).collect();
    boxed(move |value, bindings| match view(value) {
        Some(values) if values.len() == subs.len() => values
            .iter()
            .zip(&subs)
            .all(|(item, matcher)| matcher(item, bindings)),
        _ => false,
    })
}

/// Literal equality: same type and value, numbers compared numerically
/// across `Int`/`Float`, `NaN` equal to itself.
#[allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    reason = "literal numbers compare by exact numeric value"
)]
fn literal_eq(expected: &Value, value: &Value) -> bool {
    match (expected, value) {
        (Value::Int(i), Value::Float(x)) | (Value::Float(x), Value::Int(i)) => *i as f64 == *x,
        _ => expected.equals(value),
    }
}

#[cfg(test)]
mod tests;
