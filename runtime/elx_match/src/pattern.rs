//! Pattern descriptors.
//!
//! `Pattern` is a closed sum type: every variant is handled by one arm of the
//! compiler's exhaustive match, so there is no precedence between variants.
//!
//! Plain values convert into patterns implicitly: scalars become literals,
//! lists become array patterns, tuples become tuple patterns, objects become
//! object patterns over every field, and atoms become symbol patterns.

use std::fmt;

use elx_stack::ensure_sufficient_stack;
use elx_value::{Atom, TypeTag, Value};
use regex::Regex;

/// Pattern descriptor.
#[derive(Debug)]
pub enum Pattern {
    /// Matches anything, binds nothing.
    Wildcard,
    /// Matches a deep-equal value and binds it.
    Bound(Value),
    /// Matches anything and binds it.
    Parameter,
    /// Matches a list of at least two elements; binds head, then tail.
    HeadTail,
    /// Matches a string with this prefix and a non-empty remainder; binds
    /// the remainder.
    StartsWith(String),
    /// Binds the sub-pattern's bindings, then the whole value.
    Capture(Box<Pattern>),
    /// Matches an equal scalar; binds nothing.
    Literal(Value),
    /// Matches a string satisfying the expression; binds nothing.
    Regex(Regex),
    /// Matches any value with this constructor and binds it.
    FunctionTag(TypeTag),
    /// Matches a list of exactly this length, position by position.
    Array(Vec<Pattern>),
    /// Matches an object with this tag whose listed keys all match.
    Object {
        tag: Atom,
        fields: Vec<(Atom, Pattern)>,
    },
    /// Matches this atom; binds nothing.
    Symbol(Atom),
    /// Matches a tuple of exactly this length, position by position.
    Tuple(Vec<Pattern>),
}

impl Pattern {
    pub fn wildcard() -> Self {
        Pattern::Wildcard
    }

    pub fn bound(value: impl Into<Value>) -> Self {
        Pattern::Bound(value.into())
    }

    pub fn parameter() -> Self {
        Pattern::Parameter
    }

    pub fn head_tail() -> Self {
        Pattern::HeadTail
    }

    pub fn starts_with(prefix: impl Into<String>) -> Self {
        Pattern::StartsWith(prefix.into())
    }

    pub fn capture(pattern: impl Into<Pattern>) -> Self {
        Pattern::Capture(Box::new(pattern.into()))
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Pattern::Literal(value.into())
    }

    /// Compile `expr` into a regex pattern.
    pub fn regex(expr: &str) -> Result<Self, regex::Error> {
        Regex::new(expr).map(Pattern::Regex)
    }

    pub fn function_tag(tag: TypeTag) -> Self {
        Pattern::FunctionTag(tag)
    }

    pub fn array<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        Pattern::Array(items.into_iter().map(Into::into).collect())
    }

    /// Object pattern with an explicit nominal tag.
    pub fn object<I, P>(tag: Atom, fields: I) -> Self
    where
        I: IntoIterator<Item = (Atom, P)>,
        P: Into<Pattern>,
    {
        Pattern::Object {
            tag,
            fields: fields.into_iter().map(|(k, p)| (k, p.into())).collect(),
        }
    }

    /// Object pattern over plain (`Object`-tagged) objects.
    pub fn map<I, P>(fields: I) -> Self
    where
        I: IntoIterator<Item = (Atom, P)>,
        P: Into<Pattern>,
    {
        Self::object(Atom::OBJECT, fields)
    }

    pub fn symbol(atom: impl Into<Atom>) -> Self {
        Pattern::Symbol(atom.into())
    }

    pub fn tuple<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        Pattern::Tuple(items.into_iter().map(Into::into).collect())
    }
}

impl Clone for Pattern {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Pattern::Wildcard => Pattern::Wildcard,
            Pattern::Bound(value) => Pattern::Bound(value.clone()),
            Pattern::Parameter => Pattern::Parameter,
            Pattern::HeadTail => Pattern::HeadTail,
            Pattern::StartsWith(prefix) => Pattern::StartsWith(prefix.clone()),
            Pattern::Capture(inner) => Pattern::Capture(inner.clone()),
            Pattern::Literal(value) => Pattern::Literal(value.clone()),
            Pattern::Regex(re) => Pattern::Regex(re.clone()),
            Pattern::FunctionTag(tag) => Pattern::FunctionTag(*tag),
            Pattern::Array(items) => Pattern::Array(items.clone()),
            Pattern::Object { tag, fields } => Pattern::Object {
                tag: *tag,
                fields: fields.clone(),
            },
            Pattern::Symbol(atom) => Pattern::Symbol(*atom),
            Pattern::Tuple(items) => Pattern::Tuple(items.clone()),
        })
    }
}

// Conversions from plain values

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        ensure_sufficient_stack(|| match value {
            Value::Atom(atom) => Pattern::Symbol(atom),
            Value::List(items) => Pattern::Array(items.iter().cloned().map(Into::into).collect()),
            Value::Tuple(items) => Pattern::Tuple(items.iter().cloned().map(Into::into).collect()),
            Value::Object(obj) => Pattern::Object {
                tag: obj.tag(),
                fields: obj.iter().map(|(k, v)| (k, v.clone().into())).collect(),
            },
            scalar @ (Value::Nil
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Bitstring(_)) => Pattern::Literal(scalar),
        })
    }
}

impl From<&Value> for Pattern {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Literal(Value::Bool(b))
    }
}

impl From<i64> for Pattern {
    fn from(n: i64) -> Self {
        Pattern::Literal(Value::Int(n))
    }
}

impl From<i32> for Pattern {
    fn from(n: i32) -> Self {
        Pattern::Literal(Value::from(n))
    }
}

impl From<f64> for Pattern {
    fn from(x: f64) -> Self {
        Pattern::Literal(Value::Float(x))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Literal(Value::string(s))
    }
}

impl From<Atom> for Pattern {
    fn from(atom: Atom) -> Self {
        Pattern::Symbol(atom)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

impl From<TypeTag> for Pattern {
    fn from(tag: TypeTag) -> Self {
        Pattern::FunctionTag(tag)
    }
}

impl From<Vec<Pattern>> for Pattern {
    fn from(items: Vec<Pattern>) -> Self {
        Pattern::Array(items)
    }
}

/// Compact rendering for diagnostics and trace output.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Bound(value) => write!(f, "^{value}"),
            Pattern::Parameter => write!(f, "$"),
            Pattern::HeadTail => write!(f, "[$ | $]"),
            Pattern::StartsWith(prefix) => write!(f, "{prefix:?} <> $"),
            Pattern::Capture(inner) => write!(f, "({inner}) = $"),
            Pattern::Literal(value) => write!(f, "{value}"),
            Pattern::Regex(re) => write!(f, "~r/{}/", re.as_str()),
            Pattern::FunctionTag(tag) => write!(f, "{tag}()"),
            Pattern::Array(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Pattern::Object { tag, fields } => {
                if *tag == Atom::OBJECT {
                    write!(f, "%{{")?;
                } else {
                    write!(f, "%{tag}{{")?;
                }
                for (i, (key, pattern)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {pattern}")?;
                }
                write!(f, "}}")
            }
            Pattern::Symbol(atom) => write!(f, ":{atom}"),
            Pattern::Tuple(items) => {
                write!(f, "{{")?;
                write_joined(f, items)?;
                write!(f, "}}")
            }
        })
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Pattern]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
