//! Segment descriptions.
//!
//! A `Segment` pairs a raw value with the metadata that controls how it is
//! encoded. Builder methods consume the segment and return it with one more
//! field set or one more modifier appended, so a segment reads the same way
//! as the literal it describes:
//!
//! ```text
//! Segment::integer(-1).size(16).signed().little()
//! ```

use std::fmt;

use crate::Bitstring;

/// The base conversion applied to a segment's value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Integer,
    Float,
    Bitstring,
    Binary,
    Utf8,
    Utf16,
    Utf32,
}

impl SegmentKind {
    /// The type name as written in a segment literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bitstring => "bitstring",
            Self::Binary => "binary",
            Self::Utf8 => "utf8",
            Self::Utf16 => "utf16",
            Self::Utf32 => "utf32",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of a segment.
///
/// The variant determines the segment's kind; text variants share a payload
/// type but encode differently.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentValue {
    Integer(i64),
    Float(f64),
    Bitstring(Bitstring),
    Binary(String),
    Utf8(String),
    Utf16(String),
    Utf32(String),
}

impl SegmentValue {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Integer(_) => SegmentKind::Integer,
            Self::Float(_) => SegmentKind::Float,
            Self::Bitstring(_) => SegmentKind::Bitstring,
            Self::Binary(_) => SegmentKind::Binary,
            Self::Utf8(_) => SegmentKind::Utf8,
            Self::Utf16(_) => SegmentKind::Utf16,
            Self::Utf32(_) => SegmentKind::Utf32,
        }
    }
}

/// Segment modifier.
///
/// Modifiers are applied to the segment's encoded output in the order they
/// were appended. `Size` and `Unit` only record metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Signed,
    Unsigned,
    Native,
    Big,
    Little,
    Size(u32),
    Unit(u32),
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => f.write_str("signed"),
            Self::Unsigned => f.write_str("unsigned"),
            Self::Native => f.write_str("native"),
            Self::Big => f.write_str("big"),
            Self::Little => f.write_str("little"),
            Self::Size(n) => write!(f, "size({n})"),
            Self::Unit(n) => write!(f, "unit({n})"),
        }
    }
}

/// One described unit of binary data awaiting encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    value: SegmentValue,
    size: Option<u32>,
    unit: Option<u32>,
    modifiers: Vec<Modifier>,
}

impl Segment {
    fn with_metadata(value: SegmentValue, size: Option<u32>, unit: Option<u32>) -> Self {
        Segment {
            value,
            size,
            unit,
            modifiers: Vec::new(),
        }
    }

    /// Integer segment: 8 bits, unit 1.
    pub fn integer(value: i64) -> Self {
        Self::with_metadata(SegmentValue::Integer(value), Some(8), Some(1))
    }

    /// Float segment: 64 bits, unit 1.
    pub fn float(value: f64) -> Self {
        Self::with_metadata(SegmentValue::Float(value), Some(64), Some(1))
    }

    /// Nested bitstring segment, sized to the nested bitstring's length.
    pub fn bitstring(value: Bitstring) -> Self {
        let size = length_as_size(value.len());
        Self::with_metadata(SegmentValue::Bitstring(value), Some(size), Some(1))
    }

    /// Alias for [`Segment::bitstring`].
    pub fn bits(value: Bitstring) -> Self {
        Self::bitstring(value)
    }

    /// Binary segment: unit 8, sized to the number of characters.
    pub fn binary(value: impl Into<String>) -> Self {
        let value = value.into();
        let size = length_as_size(value.chars().count());
        Self::with_metadata(SegmentValue::Binary(value), Some(size), Some(8))
    }

    /// Alias for [`Segment::binary`].
    pub fn bytes(value: impl Into<String>) -> Self {
        Self::binary(value)
    }

    pub fn utf8(value: impl Into<String>) -> Self {
        Self::with_metadata(SegmentValue::Utf8(value.into()), None, None)
    }

    pub fn utf16(value: impl Into<String>) -> Self {
        Self::with_metadata(SegmentValue::Utf16(value.into()), None, None)
    }

    pub fn utf32(value: impl Into<String>) -> Self {
        Self::with_metadata(SegmentValue::Utf32(value.into()), None, None)
    }

    /// Set the declared size in bits.
    ///
    /// The size is recorded on the segment and appended to the modifier list;
    /// it never re-slices the encoded output.
    #[must_use]
    pub fn size(mut self, bits: u32) -> Self {
        self.size = Some(bits);
        self.modifiers.push(Modifier::Size(bits));
        self
    }

    /// Set the unit multiplier.
    #[must_use]
    pub fn unit(mut self, unit: u32) -> Self {
        self.unit = Some(unit);
        self.modifiers.push(Modifier::Unit(unit));
        self
    }

    #[must_use]
    pub fn signed(self) -> Self {
        self.with_modifier(Modifier::Signed)
    }

    #[must_use]
    pub fn unsigned(self) -> Self {
        self.with_modifier(Modifier::Unsigned)
    }

    #[must_use]
    pub fn native(self) -> Self {
        self.with_modifier(Modifier::Native)
    }

    #[must_use]
    pub fn big(self) -> Self {
        self.with_modifier(Modifier::Big)
    }

    #[must_use]
    pub fn little(self) -> Self {
        self.with_modifier(Modifier::Little)
    }

    /// Append any modifier.
    ///
    /// `Size` and `Unit` also update the segment's recorded metadata.
    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        match modifier {
            Modifier::Size(bits) => return self.size(bits),
            Modifier::Unit(unit) => return self.unit(unit),
            _ => self.modifiers.push(modifier),
        }
        self
    }

    pub fn value(&self) -> &SegmentValue {
        &self.value
    }

    pub fn kind(&self) -> SegmentKind {
        self.value.kind()
    }

    pub fn declared_size(&self) -> Option<u32> {
        self.size
    }

    pub fn declared_unit(&self) -> Option<u32> {
        self.unit
    }

    /// Modifiers in application order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }
}

/// Renders the segment in literal syntax, e.g. `65::integer-signed`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            SegmentValue::Integer(n) => write!(f, "{n}")?,
            SegmentValue::Float(x) => write!(f, "{x:?}")?,
            SegmentValue::Bitstring(bits) => write!(f, "{bits}")?,
            SegmentValue::Binary(s)
            | SegmentValue::Utf8(s)
            | SegmentValue::Utf16(s)
            | SegmentValue::Utf32(s) => write!(f, "{s:?}")?,
        }
        write!(f, "::{}", self.kind())?;
        for modifier in &self.modifiers {
            write!(f, "-{modifier}")?;
        }
        Ok(())
    }
}

fn length_as_size(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
