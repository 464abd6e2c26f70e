//! Segment encoder.
//!
//! Converts one segment into its flat value sequence: a base conversion
//! selected by the segment's value, followed by a fold over its modifiers.

use crate::{EncodeError, Modifier, Segment, SegmentValue};

/// Encode a single segment, applying its modifiers in append order.
pub(crate) fn encode_segment(segment: &Segment) -> Result<Vec<i64>, EncodeError> {
    let mut out = convert(segment)?;
    for modifier in segment.modifiers() {
        apply_modifier(*modifier, &mut out);
    }
    Ok(out)
}

fn convert(segment: &Segment) -> Result<Vec<i64>, EncodeError> {
    let values = match segment.value() {
        SegmentValue::Integer(n) => vec![*n],
        SegmentValue::Float(x) => float_to_bytes(*x, segment.declared_size().unwrap_or(0))?,
        SegmentValue::Bitstring(bits) => bits.values().to_vec(),
        SegmentValue::Binary(s) | SegmentValue::Utf8(s) => utf8_bytes(s),
        SegmentValue::Utf16(s) => utf16_slots(s),
        SegmentValue::Utf32(s) => utf32_slots(s),
    };
    Ok(values)
}

fn apply_modifier(modifier: Modifier, out: &mut [i64]) {
    match modifier {
        Modifier::Little => out.reverse(),
        // Truncates to 8 bits whatever the declared size.
        Modifier::Signed => {
            for value in out.iter_mut() {
                *value &= 0xFF;
            }
        }
        Modifier::Unsigned
        | Modifier::Native
        | Modifier::Big
        | Modifier::Size(_)
        | Modifier::Unit(_) => {}
    }
}

/// Big-endian IEEE-754 bytes for a 32 or 64 bit float.
pub(crate) fn float_to_bytes(value: f64, size: u32) -> Result<Vec<i64>, EncodeError> {
    match size {
        64 => Ok(bytes_to_values(&value.to_be_bytes())),
        32 => {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "32-bit float segments narrow the value by definition"
            )]
            let narrowed = value as f32;
            Ok(bytes_to_values(&narrowed.to_be_bytes()))
        }
        _ => Err(EncodeError::InvalidSegment { size }),
    }
}

pub(crate) fn utf8_bytes(s: &str) -> Vec<i64> {
    bytes_to_values(s.as_bytes())
}

/// One 2-byte big-endian slot per UTF-16 code unit position.
///
/// A slot holds the low 16 bits of the codepoint starting at that position.
/// An astral character spans two positions: the first slot keeps the low 16
/// bits of the full codepoint, the second holds the trailing surrogate.
pub(crate) fn utf16_slots(s: &str) -> Vec<i64> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for slot in code_unit_slots(s) {
        out.push(i64::from(slot >> 8));
        out.push(i64::from(slot & 0xFF));
    }
    out
}

/// One 4-byte big-endian slot per UTF-16 code unit position.
///
/// Uses the same 16-bit values as [`utf16_slots`], zero-extended; the two
/// high bytes of every slot are always zero.
pub(crate) fn utf32_slots(s: &str) -> Vec<i64> {
    let mut out = Vec::with_capacity(s.len() * 4);
    for slot in code_unit_slots(s) {
        out.extend([0, 0, i64::from(slot >> 8), i64::from(slot & 0xFF)]);
    }
    out
}

/// The 16-bit value read at each UTF-16 code unit position of `s`.
fn code_unit_slots(s: &str) -> impl Iterator<Item = u32> + '_ {
    s.chars().flat_map(|c| {
        let cp = u32::from(c);
        let trailing = (cp > 0xFFFF).then(|| 0xDC00 | ((cp - 0x1_0000) & 0x3FF));
        std::iter::once(cp & 0xFFFF).chain(trailing)
    })
}

fn bytes_to_values(bytes: &[u8]) -> Vec<i64> {
    bytes.iter().copied().map(i64::from).collect()
}

#[cfg(test)]
mod tests;
