//! Runtime values for the Elx runtime.
//!
//! # Heap Enforcement
//!
//! Heap-backed variants hold a `Heap<T>`, whose constructor is private to
//! this crate. External code builds them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let xs = Value::list(vec![Value::int(1)]);        // OK
//! let s = Value::Str(Heap::new("hello".into()));    // ERROR: Heap::new is pub(crate)
//! ```
//!
//! All heap storage is `Arc`-backed, so values are `Send + Sync` and cheap
//! to clone.

mod heap;
mod object;

use std::fmt;

use elx_stack::ensure_sufficient_stack;

use crate::{Atom, Bitstring};

pub use heap::Heap;
pub use object::{ObjectLayout, ObjectValue};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Atom(Atom),

    // Heap types
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    Tuple(Heap<Vec<Value>>),
    Object(ObjectValue),

    /// Encoded binary; shares its storage between clones.
    Bitstring(Bitstring),
}

/// A value's constructor, used by constructor-tag patterns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Nil,
    Bool,
    Int,
    Float,
    Str,
    Atom,
    List,
    Tuple,
    Bitstring,
    /// Objects are distinguished by their nominal tag.
    Object(Atom),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Object(tag) => write!(f, "%{tag}"),
            other => f.write_str(other.name()),
        }
    }
}

impl TypeTag {
    fn name(self) -> &'static str {
        match self {
            TypeTag::Nil => "nil",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "str",
            TypeTag::Atom => "atom",
            TypeTag::List => "list",
            TypeTag::Tuple => "tuple",
            TypeTag::Bitstring => "bitstring",
            TypeTag::Object(_) => "object",
        }
    }
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Intern `name` and wrap it as an atom value.
    #[inline]
    pub fn atom(name: &str) -> Self {
        Value::Atom(Atom::new(name))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Object with an explicit nominal tag.
    ///
    /// ```text
    /// let user = Value::object(Atom::new("User"), [(Atom::new("name"), Value::string("jo"))]);
    /// ```
    pub fn object(tag: Atom, fields: impl IntoIterator<Item = (Atom, Value)>) -> Self {
        Value::Object(ObjectValue::new(tag, fields))
    }

    /// Plain object, tagged `Object`.
    pub fn map(fields: impl IntoIterator<Item = (Atom, Value)>) -> Self {
        Value::Object(ObjectValue::new(Atom::OBJECT, fields))
    }

    #[inline]
    pub fn bitstring(bits: Bitstring) -> Self {
        Value::Bitstring(bits)
    }

    /// `{:ok, value}`
    pub fn ok(value: Value) -> Self {
        Value::tuple(vec![Value::Atom(Atom::OK), value])
    }

    /// `{:error, reason}`
    pub fn error(reason: Value) -> Self {
        Value::tuple(vec![Value::Atom(Atom::ERROR), reason])
    }
}

// Value Methods

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Nil => TypeTag::Nil,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Atom(_) => TypeTag::Atom,
            Value::Str(_) => TypeTag::Str,
            Value::List(_) => TypeTag::List,
            Value::Tuple(_) => TypeTag::Tuple,
            Value::Object(obj) => TypeTag::Object(obj.tag()),
            Value::Bitstring(_) => TypeTag::Bitstring,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.type_tag().name()
    }

    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<Atom> {
        match self {
            Value::Atom(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_bitstring(&self) -> Option<&Bitstring> {
        match self {
            Value::Bitstring(bits) => Some(bits),
            _ => None,
        }
    }

    /// Deep structural equality.
    ///
    /// Sequences and strings compare length first, then elementwise. Floats
    /// compare by value with `NaN` equal to itself. `Int` and `Float` are
    /// different types and never equal here.
    pub fn equals(&self, other: &Value) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_eq(*a, *b),
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.len() == b.len() && a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Object(a), Value::Object(b)) => a.equals(b),
            (Value::Bitstring(a), Value::Bitstring(b)) => a == b,
            _ => false,
        })
    }
}

/// Float equality with `NaN` equal to itself.
#[allow(clippy::float_cmp, reason = "exact comparison is the matching semantics")]
pub(crate) fn float_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Atom(a) => write!(f, "Atom({a})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Object(obj) => {
                write!(f, "Object({}, ", obj.tag())?;
                f.debug_map().entries(obj.iter()).finish()?;
                write!(f, ")")
            }
            Value::Bitstring(bits) => write!(f, "{bits:?}"),
        }
    }
}

/// Inspect-style rendering used in diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Atom(a) => write!(f, ":{a}"),
            Value::Str(s) => write!(f, "{:?}", &***s),
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "{{")?;
                write_joined(f, items)?;
                write!(f, "}}")
            }
            Value::Object(obj) => {
                if obj.tag() == Atom::OBJECT {
                    write!(f, "%{{")?;
                } else {
                    write!(f, "%{}{{", obj.tag())?;
                }
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Bitstring(bits) => write!(f, "{bits}"),
        })
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Atom> for Value {
    fn from(a: Atom) -> Self {
        Value::Atom(a)
    }
}

impl From<Bitstring> for Value {
    fn from(bits: Bitstring) -> Self {
        Value::Bitstring(bits)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}
