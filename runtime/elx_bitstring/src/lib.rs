//! Elx Bitstring - binary segment construction for the Elx runtime.
//!
//! This crate provides:
//! - `Segment`: one described unit of binary data (kind, size, unit, modifiers)
//! - `Modifier`: the closed set of segment modifiers, applied in append order
//! - `Bitstring`: an immutable sequence assembled from encoded segments
//! - `EncodeError`: failures raised while encoding
//!
//! # Encoding Pipeline
//!
//! Each segment is converted according to its kind, then its modifiers are
//! folded over the produced values in the order they were appended. The
//! bitstring is the concatenation of every segment's output, computed once
//! when the bitstring is built.
//!
//! ```text
//! let bits = Bitstring::new(vec![
//!     Segment::integer(65).signed(),
//!     Segment::binary("AB"),
//!     Segment::float(1.5).size(32).little(),
//! ])?;
//! ```

mod bitstring;
mod encode;
mod errors;
mod segment;

pub use bitstring::{Bitstring, Iter};
pub use errors::EncodeError;
pub use segment::{Modifier, Segment, SegmentKind, SegmentValue};
