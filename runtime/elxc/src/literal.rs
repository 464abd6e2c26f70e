//! Parser for bitstring literal syntax.
//!
//! ```text
//! literal = "<<" [segment ("," segment)*] ">>"
//! segment = value ["::" option ("-" option)*]
//! value   = integer | float | string | literal
//! option  = type | modifier | "size(" n ")" | "unit(" n ")" | n
//! ```
//!
//! A bare number option is shorthand for `size(n)`. Options other than the
//! type are applied in the order written. Without a type, integers encode as
//! `integer`, floats as `float`, strings as `binary` and nested literals as
//! `bitstring`.

use elx_bitstring::{Bitstring, EncodeError, Modifier, Segment};
use elx_stack::ensure_sufficient_stack;

/// Failure to parse a bitstring literal. Positions are byte offsets.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} at byte {pos}")]
    Expected { expected: &'static str, pos: usize },

    #[error("unterminated string starting at byte {pos}")]
    UnterminatedString { pos: usize },

    #[error("invalid number `{text}` at byte {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown segment option `{option}` at byte {pos}")]
    UnknownOption { option: String, pos: usize },

    #[error("segment at byte {pos} declares more than one type")]
    DuplicateType { pos: usize },

    #[error("a {value} value cannot be encoded as {kind} (segment at byte {pos})")]
    TypeMismatch {
        value: &'static str,
        kind: &'static str,
        pos: usize,
    },

    #[error("{code} is not a valid codepoint (segment at byte {pos})")]
    InvalidCodepoint { code: i64, pos: usize },

    #[error("nested bitstring at byte {pos}: {source}")]
    Nested { pos: usize, source: EncodeError },

    #[error("unexpected trailing input at byte {pos}")]
    TrailingInput { pos: usize },
}

/// Parse a complete literal into its segments.
///
/// # Errors
/// Returns a `ParseError` describing the first syntax or typing problem.
pub fn parse_literal(source: &str) -> Result<Vec<Segment>, ParseError> {
    let mut parser = Parser { src: source, pos: 0 };
    let segments = parser.literal()?;
    parser.skip_ws();
    if parser.pos < source.len() {
        return Err(ParseError::TrailingInput { pos: parser.pos });
    }
    Ok(segments)
}

/// A segment value before its type is applied.
#[derive(Debug)]
enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bits(Bitstring),
}

impl Literal {
    fn describe(&self) -> &'static str {
        match self {
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Str(_) => "string",
            Literal::Bits(_) => "bitstring",
        }
    }
}

/// Segment type names accepted after `::`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TypeName {
    Integer,
    Float,
    Bits,
    Bitstring,
    Binary,
    Bytes,
    Utf8,
    Utf16,
    Utf32,
}

impl TypeName {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "integer" => TypeName::Integer,
            "float" => TypeName::Float,
            "bits" => TypeName::Bits,
            "bitstring" => TypeName::Bitstring,
            "binary" => TypeName::Binary,
            "bytes" => TypeName::Bytes,
            "utf8" => TypeName::Utf8,
            "utf16" => TypeName::Utf16,
            "utf32" => TypeName::Utf32,
            _ => return None,
        })
    }

    fn as_str(self) -> &'static str {
        match self {
            TypeName::Integer => "integer",
            TypeName::Float => "float",
            TypeName::Bits => "bits",
            TypeName::Bitstring => "bitstring",
            TypeName::Binary => "binary",
            TypeName::Bytes => "bytes",
            TypeName::Utf8 => "utf8",
            TypeName::Utf16 => "utf16",
            TypeName::Utf32 => "utf32",
        }
    }
}

enum SegmentOption {
    Type(TypeName),
    Modifier(Modifier),
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &'static str) -> Result<(), ParseError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected: token,
                pos: self.pos,
            })
        }
    }

    /// Consume the longest prefix whose bytes satisfy `accept`.
    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let len = self.rest().bytes().take_while(|&b| accept(b)).count();
        self.pos += len;
        &self.src[start..self.pos]
    }

    fn literal(&mut self) -> Result<Vec<Segment>, ParseError> {
        ensure_sufficient_stack(|| self.literal_inner())
    }

    fn literal_inner(&mut self) -> Result<Vec<Segment>, ParseError> {
        self.skip_ws();
        self.expect("<<")?;
        self.skip_ws();
        let mut segments = Vec::new();
        if self.eat(">>") {
            return Ok(segments);
        }
        loop {
            segments.push(self.segment()?);
            self.skip_ws();
            if !self.eat(",") {
                break;
            }
            self.skip_ws();
        }
        self.expect(">>")?;
        Ok(segments)
    }

    fn segment(&mut self) -> Result<Segment, ParseError> {
        let start = self.pos;
        let value = self.value()?;
        self.skip_ws();

        let mut type_name = None;
        let mut modifiers = Vec::new();
        if self.eat("::") {
            loop {
                self.skip_ws();
                match self.option()? {
                    SegmentOption::Type(name) => {
                        if type_name.replace(name).is_some() {
                            return Err(ParseError::DuplicateType { pos: start });
                        }
                    }
                    SegmentOption::Modifier(modifier) => modifiers.push(modifier),
                }
                self.skip_ws();
                if !self.eat("-") {
                    break;
                }
            }
        }

        let segment = typed_segment(value, type_name, start)?;
        Ok(modifiers
            .into_iter()
            .fold(segment, Segment::with_modifier))
    }

    fn value(&mut self) -> Result<Literal, ParseError> {
        match self.peek() {
            Some(b'"') => self.string().map(Literal::Str),
            Some(b'<') => {
                let pos = self.pos;
                let segments = self.literal()?;
                // Only the encoded values are kept, so the result never
                // nests deeper than one level.
                Bitstring::new(segments)
                    .map(|bits| Literal::Bits(Bitstring::from_values(bits.values())))
                    .map_err(|source| ParseError::Nested { pos, source })
            }
            Some(b'-' | b'0'..=b'9') => self.number(),
            _ => Err(ParseError::Expected {
                expected: "segment value",
                pos: self.pos,
            }),
        }
    }

    fn string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += offset + 1;
                    return Ok(out);
                }
                '\\' => {
                    let Some((_, escaped)) = chars.next() else {
                        break;
                    };
                    out.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => other,
                    });
                }
                c => out.push(c),
            }
        }
        Err(ParseError::UnterminatedString { pos: start })
    }

    fn number(&mut self) -> Result<Literal, ParseError> {
        let start = self.pos;
        let negative = self.eat("-");

        if self.eat("0x") {
            let digits = self.take_while(|b| b.is_ascii_hexdigit() || b == b'_');
            let digits = digits.replace('_', "");
            let magnitude = i64::from_str_radix(&digits, 16).map_err(|_| self.invalid_number(start))?;
            return Ok(Literal::Int(if negative { -magnitude } else { magnitude }));
        }

        self.take_while(|b| b.is_ascii_digit() || b == b'_');
        let mut is_float = false;
        if self.rest().starts_with('.')
            && self.rest()[1..].starts_with(|c: char| c.is_ascii_digit())
        {
            is_float = true;
            self.pos += 1;
            self.take_while(|b| b.is_ascii_digit() || b == b'_');
        }
        if self.rest().starts_with(['e', 'E']) {
            is_float = true;
            self.pos += 1;
            if self.rest().starts_with(['+', '-']) {
                self.pos += 1;
            }
            self.take_while(|b| b.is_ascii_digit());
        }

        let text = self.src[start..self.pos].replace('_', "");
        if is_float {
            text.parse().map(Literal::Float).map_err(|_| self.invalid_number(start))
        } else {
            text.parse().map(Literal::Int).map_err(|_| self.invalid_number(start))
        }
    }

    fn invalid_number(&self, start: usize) -> ParseError {
        ParseError::InvalidNumber {
            text: self.src[start..self.pos].to_string(),
            pos: start,
        }
    }

    fn option(&mut self) -> Result<SegmentOption, ParseError> {
        let pos = self.pos;
        let name = self.take_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        if name.is_empty() {
            return Err(ParseError::Expected {
                expected: "segment option",
                pos,
            });
        }
        if name.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(SegmentOption::Modifier(Modifier::Size(parse_u32(name, pos)?)));
        }
        if self.eat("(") {
            self.skip_ws();
            let arg_pos = self.pos;
            let arg = self.take_while(|b| b.is_ascii_digit());
            let n = parse_u32(arg, arg_pos)?;
            self.skip_ws();
            self.expect(")")?;
            return match name {
                "size" => Ok(SegmentOption::Modifier(Modifier::Size(n))),
                "unit" => Ok(SegmentOption::Modifier(Modifier::Unit(n))),
                _ => Err(ParseError::UnknownOption {
                    option: format!("{name}({n})"),
                    pos,
                }),
            };
        }
        if let Some(type_name) = TypeName::from_name(name) {
            return Ok(SegmentOption::Type(type_name));
        }
        let modifier = match name {
            "signed" => Modifier::Signed,
            "unsigned" => Modifier::Unsigned,
            "native" => Modifier::Native,
            "big" => Modifier::Big,
            "little" => Modifier::Little,
            _ => {
                return Err(ParseError::UnknownOption {
                    option: name.to_string(),
                    pos,
                })
            }
        };
        Ok(SegmentOption::Modifier(modifier))
    }
}

fn parse_u32(text: &str, pos: usize) -> Result<u32, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        text: text.to_string(),
        pos,
    })
}

#[allow(
    clippy::cast_precision_loss,
    reason = "integer literals typed as float follow IEEE-754 rounding"
)]
fn typed_segment(
    value: Literal,
    type_name: Option<TypeName>,
    pos: usize,
) -> Result<Segment, ParseError> {
    let mismatch = |value: &Literal, name: TypeName| ParseError::TypeMismatch {
        value: value.describe(),
        kind: name.as_str(),
        pos,
    };
    let Some(name) = type_name else {
        return Ok(match value {
            Literal::Int(n) => Segment::integer(n),
            Literal::Float(x) => Segment::float(x),
            Literal::Str(s) => Segment::binary(s),
            Literal::Bits(bits) => Segment::bitstring(bits),
        });
    };
    match (name, value) {
        (TypeName::Integer, Literal::Int(n)) => Ok(Segment::integer(n)),
        (TypeName::Float, Literal::Int(n)) => Ok(Segment::float(n as f64)),
        (TypeName::Float, Literal::Float(x)) => Ok(Segment::float(x)),
        (TypeName::Bitstring, Literal::Bits(bits)) => Ok(Segment::bitstring(bits)),
        (TypeName::Bits, Literal::Bits(bits)) => Ok(Segment::bits(bits)),
        (TypeName::Binary, Literal::Str(s)) => Ok(Segment::binary(s)),
        (TypeName::Bytes, Literal::Str(s)) => Ok(Segment::bytes(s)),
        (TypeName::Utf8 | TypeName::Utf16 | TypeName::Utf32, Literal::Int(code)) => {
            let c = u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or(ParseError::InvalidCodepoint { code, pos })?;
            typed_segment(Literal::Str(c.to_string()), Some(name), pos)
        }
        (TypeName::Utf8, Literal::Str(s)) => Ok(Segment::utf8(s)),
        (TypeName::Utf16, Literal::Str(s)) => Ok(Segment::utf16(s)),
        (TypeName::Utf32, Literal::Str(s)) => Ok(Segment::utf32(s)),
        (name, value) => Err(mismatch(&value, name)),
    }
}

#[cfg(test)]
mod tests;
