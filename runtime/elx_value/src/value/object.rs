//! Object values: ordered key/value mappings with a nominal type tag.

use rustc_hash::FxHashMap;

use super::{Heap, Value};
use crate::Atom;

/// Key order and O(1) key lookup for an object.
#[derive(Clone, Debug, Default)]
pub struct ObjectLayout {
    keys: Vec<Atom>,
    indices: FxHashMap<Atom, usize>,
}

impl ObjectLayout {
    /// Index of `key`, if present.
    pub fn get_index(&self, key: Atom) -> Option<usize> {
        self.indices.get(&key).copied()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[Atom] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Object instance.
///
/// Keys keep their first insertion position; a repeated key overwrites the
/// earlier value.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    tag: Atom,
    layout: Heap<ObjectLayout>,
    values: Heap<Vec<Value>>,
}

impl ObjectValue {
    pub fn new(tag: Atom, fields: impl IntoIterator<Item = (Atom, Value)>) -> Self {
        let mut layout = ObjectLayout::default();
        let mut values: Vec<Value> = Vec::new();
        for (key, value) in fields {
            if let Some(index) = layout.get_index(key) {
                values[index] = value;
            } else {
                layout.indices.insert(key, layout.keys.len());
                layout.keys.push(key);
                values.push(value);
            }
        }
        ObjectValue {
            tag,
            layout: Heap::new(layout),
            values: Heap::new(values),
        }
    }

    /// The nominal type tag.
    pub fn tag(&self) -> Atom {
        self.tag
    }

    pub fn layout(&self) -> &ObjectLayout {
        &self.layout
    }

    pub fn get(&self, key: Atom) -> Option<&Value> {
        let index = self.layout.get_index(key)?;
        self.values.get(index)
    }

    pub fn contains_key(&self, key: Atom) -> bool {
        self.layout.get_index(key).is_some()
    }

    pub fn keys(&self) -> &[Atom] {
        self.layout.keys()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &Value)> + '_ {
        self.layout.keys.iter().copied().zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deep equality: same tag, same key set, deep-equal values.
    pub fn equals(&self, other: &ObjectValue) -> bool {
        self.tag == other.tag
            && self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| value.equals(v)))
    }
}
