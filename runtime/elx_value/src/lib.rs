//! Elx Value - runtime values for the Elx runtime.
//!
//! This crate provides:
//! - `Value`: the closed set of values patterns are matched against
//! - `Heap<T>`: shared storage for heap-backed values
//! - `Atom`: interned symbols, also used as object keys and type tags
//! - `ObjectValue`: ordered key/value mappings carrying a nominal tag
//! - `TypeTag`: a value's constructor, for constructor-based matching
//!
//! Bitstrings are re-exported from `elx_bitstring` so that callers building
//! values only need this crate.

mod atom;
mod value;

pub use atom::{Atom, AtomError};
pub use elx_bitstring::{Bitstring, EncodeError, Modifier, Segment, SegmentKind};
pub use value::{Heap, ObjectLayout, ObjectValue, TypeTag, Value};
