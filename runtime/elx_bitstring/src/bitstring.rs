//! The `Bitstring` value.
//!
//! A bitstring owns the segments it was built from and the flat sequence
//! they encode to. The sequence is computed once in [`Bitstring::new`] and
//! shared between clones; neither part is ever mutated afterwards.

use std::fmt;
use std::sync::Arc;

use crate::encode::encode_segment;
use crate::{EncodeError, Segment};

/// Immutable ordered sequence of encoded segments.
#[derive(Clone)]
pub struct Bitstring {
    segments: Arc<[Segment]>,
    encoded: Arc<[i64]>,
}

/// Iterator over a bitstring's encoded values.
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, i64>>;

impl Bitstring {
    /// Encode `segments` in declaration order.
    ///
    /// Fails if any segment cannot be encoded (e.g. a float sized other than
    /// 32 or 64 bits).
    #[tracing::instrument(level = "trace", skip_all, fields(segments = segments.len()))]
    pub fn new(segments: Vec<Segment>) -> Result<Self, EncodeError> {
        let mut encoded = Vec::new();
        for (index, segment) in segments.iter().enumerate() {
            match encode_segment(segment) {
                Ok(values) => encoded.extend(values),
                Err(err) => {
                    tracing::debug!(index, %segment, %err, "segment failed to encode");
                    return Err(err);
                }
            }
        }
        Ok(Bitstring {
            segments: segments.into(),
            encoded: encoded.into(),
        })
    }

    /// The empty bitstring `<<>>`.
    pub fn empty() -> Self {
        Bitstring {
            segments: Arc::from(Vec::new()),
            encoded: Arc::from(Vec::new()),
        }
    }

    /// Build a bitstring of one integer segment per byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let values: Vec<i64> = bytes.iter().copied().map(i64::from).collect();
        Self::from_values(&values)
    }

    /// Build a bitstring of one unsized integer segment per value.
    ///
    /// Encodes to exactly `values`. Used to drop the segment structure of an
    /// already encoded bitstring.
    pub fn from_values(values: &[i64]) -> Self {
        let segments: Vec<Segment> = values.iter().map(|&v| Segment::integer(v)).collect();
        Bitstring {
            segments: segments.into(),
            encoded: Arc::from(values),
        }
    }

    /// Number of encoded values.
    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.encoded.get(index).copied()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.encoded.iter().copied()
    }

    /// The encoded sequence.
    pub fn values(&self) -> &[i64] {
        &self.encoded
    }

    /// The segments in declaration order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Convert to raw bytes.
    ///
    /// Integer segments without a `signed` modifier keep their value, so the
    /// sequence may hold elements that are not bytes; those are rejected.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        self.encoded
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u8::try_from(value).map_err(|_| EncodeError::NotAByte { index, value })
            })
            .collect()
    }
}

impl Default for Bitstring {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Bitstring {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for Bitstring {}

impl<'a> IntoIterator for &'a Bitstring {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<<")?;
        for (i, value) in self.encoded.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(">>")
    }
}

impl fmt::Debug for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitstring({self})")
    }
}
