use super::*;
use pretty_assertions::assert_eq;
use crate::Bitstring;

#[test]
fn integer_passes_through_unchanged() {
    assert_eq!(encode_segment(&Segment::integer(300)), Ok(vec![300]));
    assert_eq!(encode_segment(&Segment::integer(-1)), Ok(vec![-1]));
}

#[test]
fn signed_integer_truncates_to_eight_bits() {
    assert_eq!(encode_segment(&Segment::integer(65).signed()), Ok(vec![65]));
    assert_eq!(encode_segment(&Segment::integer(300).signed()), Ok(vec![44]));
    assert_eq!(encode_segment(&Segment::integer(-1).signed()), Ok(vec![255]));
}

#[test]
fn signed_ignores_declared_size() {
    let seg = Segment::integer(0x1234).size(16).signed();
    assert_eq!(encode_segment(&seg), Ok(vec![0x34]));
}

#[test]
fn float64_is_big_endian_ieee754() {
    assert_eq!(
        encode_segment(&Segment::float(1.5)),
        Ok(vec![0x3F, 0xF8, 0, 0, 0, 0, 0, 0])
    );
}

#[test]
fn float32_is_big_endian_ieee754() {
    assert_eq!(
        encode_segment(&Segment::float(1.5).size(32)),
        Ok(vec![0x3F, 0xC0, 0, 0])
    );
}

#[test]
fn float_with_other_size_is_invalid() {
    assert_eq!(
        encode_segment(&Segment::float(1.5).size(16)),
        Err(EncodeError::InvalidSegment { size: 16 })
    );
}

#[test]
fn binary_encodes_utf8() {
    assert_eq!(encode_segment(&Segment::binary("AB")), Ok(vec![65, 66]));
    assert_eq!(encode_segment(&Segment::utf8("é")), Ok(vec![0xC3, 0xA9]));
}

#[test]
fn utf8_encodes_astral_codepoints_in_four_bytes() {
    assert_eq!(
        encode_segment(&Segment::utf8("😀")),
        Ok(vec![0xF0, 0x9F, 0x98, 0x80])
    );
}

#[test]
fn utf16_uses_fixed_two_byte_slots() {
    assert_eq!(utf16_slots("Aé"), vec![0, 0x41, 0, 0xE9]);
    assert_eq!(utf16_slots("€"), vec![0x20, 0xAC]);
}

#[test]
fn utf16_astral_takes_two_slots() {
    // low 16 bits of U+1F600, then its trailing surrogate
    assert_eq!(utf16_slots("😀"), vec![0xF6, 0x00, 0xDE, 0x00]);
    assert_eq!(utf16_slots("a😀b").len(), 8);
}

#[test]
fn utf32_uses_fixed_four_byte_slots() {
    assert_eq!(utf32_slots("A"), vec![0, 0, 0, 0x41]);
    assert_eq!(utf32_slots("€"), vec![0, 0, 0x20, 0xAC]);
}

#[test]
fn utf32_keeps_sixteen_bits_like_utf16() {
    assert_eq!(
        utf32_slots("😀"),
        vec![0, 0, 0xF6, 0x00, 0, 0, 0xDE, 0x00]
    );
    assert_eq!(
        encode_segment(&Segment::utf32("😀")),
        Ok(vec![0, 0, 0xF6, 0x00, 0, 0, 0xDE, 0x00])
    );
}

#[test]
fn little_reverses_segment_output() {
    assert_eq!(
        encode_segment(&Segment::float(1.5).size(32).little()),
        Ok(vec![0, 0, 0xC0, 0x3F])
    );
}

#[test]
fn modifiers_apply_in_order() {
    let seg = Segment::utf16("A").little().little();
    assert_eq!(encode_segment(&seg), Ok(vec![0, 0x41]));
}

#[test]
fn byte_order_noops_leave_output_alone() {
    let seg = Segment::binary("ab").big().native().unsigned().unit(8);
    assert_eq!(encode_segment(&seg), Ok(vec![97, 98]));
}

#[test]
fn nested_bitstring_is_unwrapped_verbatim() {
    let nested = Bitstring::from_bytes(&[1, 2, 3]);
    assert_eq!(encode_segment(&Segment::bits(nested)), Ok(vec![1, 2, 3]));
}
