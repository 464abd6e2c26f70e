//! Errors raised while encoding bitstring segments.

use thiserror::Error;

/// Encoding failure.
///
/// Raised by `Bitstring::new` when a segment cannot be converted, and by
/// `Bitstring::to_bytes` when the encoded sequence is not a byte sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A float segment declared a width other than 32 or 64 bits.
    #[error("invalid size for float: {size} (expected 32 or 64)")]
    InvalidSegment { size: u32 },

    /// An encoded element falls outside `0..=255`.
    #[error("element {index} is not a byte: {value}")]
    NotAByte { index: usize, value: i64 },
}
