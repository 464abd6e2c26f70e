//! The bindings buffer.

use std::ops::Deref;

use elx_value::Value;
use smallvec::SmallVec;

/// Values captured by a match, in the order their patterns were encountered
/// during compile-time descent.
///
/// Handlers and guards receive bindings positionally, so the order is part
/// of every pattern's contract.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings(SmallVec<[Value; 4]>);

impl Bindings {
    pub fn new() -> Self {
        Bindings(SmallVec::new())
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0.into_vec()
    }
}

impl Deref for Bindings {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl IntoIterator for Bindings {
    type Item = Value;
    type IntoIter = smallvec::IntoIter<[Value; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Bindings> for Vec<Value> {
    fn from(bindings: Bindings) -> Self {
        bindings.into_vec()
    }
}
