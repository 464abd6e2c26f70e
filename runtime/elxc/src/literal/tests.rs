#![allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]

use super::*;
use elx_bitstring::{SegmentKind, SegmentValue};
use pretty_assertions::assert_eq;

fn encode(source: &str) -> Vec<i64> {
    Bitstring::new(parse_literal(source).unwrap())
        .unwrap()
        .values()
        .to_vec()
}

#[test]
fn empty_literal() {
    assert!(parse_literal("<<>>").unwrap().is_empty());
    assert!(parse_literal("  << >>  ").unwrap().is_empty());
}

#[test]
fn untyped_values_take_default_kinds() {
    let segments = parse_literal(r#"<<1, 2.5, "a", <<3>>>>"#).unwrap();
    let kinds: Vec<SegmentKind> = segments.iter().map(Segment::kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Integer,
            SegmentKind::Float,
            SegmentKind::Binary,
            SegmentKind::Bitstring
        ]
    );
}

#[test]
fn options_apply_in_written_order() {
    let segments = parse_literal("<<-1::integer-size(16)-signed-little>>").unwrap();
    assert_eq!(segments.len(), 1);
    let seg = &segments[0];
    assert_eq!(seg.value(), &SegmentValue::Integer(-1));
    assert_eq!(seg.declared_size(), Some(16));
    assert_eq!(
        seg.modifiers(),
        &[Modifier::Size(16), Modifier::Signed, Modifier::Little]
    );
}

#[test]
fn bare_number_option_is_size() {
    let segments = parse_literal("<<7::8>>").unwrap();
    assert_eq!(segments[0].declared_size(), Some(8));
}

#[test]
fn encodes_the_cli_example() {
    assert_eq!(
        encode(r#"<<65::signed, 1.5::float-size(32), "AB"::binary>>"#),
        vec![65, 0x3F, 0xC0, 0, 0, 65, 66]
    );
}

#[test]
fn strings_keep_commas_and_escapes() {
    let segments = parse_literal(r#"<<"a,b", "q\"x\n">>"#).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].value(), &SegmentValue::Binary("a,b".to_string()));
    assert_eq!(segments[1].value(), &SegmentValue::Binary("q\"x\n".to_string()));
}

#[test]
fn integers_typed_as_text_are_codepoints() {
    assert_eq!(encode("<<233::utf8>>"), vec![0xC3, 0xA9]);
    assert_eq!(encode("<<65::utf32>>"), vec![0, 0, 0, 65]);
    assert_eq!(
        parse_literal("<<-1::utf8>>").unwrap_err(),
        ParseError::InvalidCodepoint { code: -1, pos: 2 }
    );
}

#[test]
fn integers_typed_as_float_convert() {
    let segments = parse_literal("<<2::float>>").unwrap();
    assert_eq!(segments[0].value(), &SegmentValue::Float(2.0));
}

#[test]
fn numbers_in_other_notations() {
    assert_eq!(encode("<<0xFF, 1_000::size(16)>>"), vec![255, 1000]);
    let segments = parse_literal("<<1e2, -0.5>>").unwrap();
    assert_eq!(segments[0].value(), &SegmentValue::Float(100.0));
    assert_eq!(segments[1].value(), &SegmentValue::Float(-0.5));
}

#[test]
fn nested_literals_encode_first() {
    assert_eq!(encode(r#"<<<<"A">>::bits, 1>>"#), vec![65, 1]);
    assert_eq!(
        parse_literal("<<<<1.0::size(16)>>>>").unwrap_err(),
        ParseError::Nested {
            pos: 2,
            source: EncodeError::InvalidSegment { size: 16 }
        }
    );
}

#[test]
fn syntax_errors_report_positions() {
    assert_eq!(
        parse_literal("1, 2").unwrap_err(),
        ParseError::Expected { expected: "<<", pos: 0 }
    );
    assert_eq!(
        parse_literal("<<1, 2").unwrap_err(),
        ParseError::Expected { expected: ">>", pos: 6 }
    );
    assert_eq!(
        parse_literal(r#"<<"abc>>"#).unwrap_err(),
        ParseError::UnterminatedString { pos: 2 }
    );
    assert_eq!(
        parse_literal("<<1>> x").unwrap_err(),
        ParseError::TrailingInput { pos: 6 }
    );
}

#[test]
fn unknown_and_conflicting_options() {
    assert_eq!(
        parse_literal("<<1::wide>>").unwrap_err(),
        ParseError::UnknownOption {
            option: "wide".to_string(),
            pos: 5
        }
    );
    assert_eq!(
        parse_literal("<<1::integer-float>>").unwrap_err(),
        ParseError::DuplicateType { pos: 2 }
    );
    assert_eq!(
        parse_literal(r#"<<"a"::integer>>"#).unwrap_err(),
        ParseError::TypeMismatch {
            value: "string",
            kind: "integer",
            pos: 2
        }
    );
}

#[test]
fn deeply_nested_literals_parse() {
    let depth = 200_000;
    let source = format!("{}{}", "<<".repeat(depth), ">>".repeat(depth));
    let segments = parse_literal(&source).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].kind(), SegmentKind::Bitstring);
    assert!(Bitstring::new(segments).unwrap().is_empty());

    let source = format!("{}7{}", "<<".repeat(depth), ">>".repeat(depth));
    assert_eq!(encode(&source), vec![7]);
}

#[test]
fn nested_literals_keep_only_their_encoding() {
    let segments = parse_literal(r#"<<<<"A"::utf16, 1::signed>>>>"#).unwrap();
    let SegmentValue::Bitstring(inner) = segments[0].value() else {
        panic!("expected a nested bitstring");
    };
    assert_eq!(inner.values(), &[0, 65, 1]);
    assert_eq!(inner.segments(), &[Segment::integer(0), Segment::integer(65), Segment::integer(1)]);
}
