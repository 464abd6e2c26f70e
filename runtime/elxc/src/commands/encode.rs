//! The `encode` command: bitstring literal to encoded sequence.

use elx_bitstring::{Bitstring, EncodeError};

use crate::config::{EncodeConfig, OutputFormat};
use crate::literal::{parse_literal, ParseError};

/// Failure of the `encode` command.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Parse and encode `source`, rendering the result per `config`.
///
/// With `show_segments`, one line per segment precedes the composite:
///
/// ```text
/// 0: 65::integer-signed => <<65>>
/// 1: "AB"::binary => <<65, 66>>
/// <<65, 65, 66>>
/// ```
///
/// # Errors
/// Returns `CliError` when the literal does not parse, a segment does not
/// encode, or hex output is requested for a non-byte element.
#[tracing::instrument(level = "debug", skip(config))]
pub fn encode_literal(source: &str, config: &EncodeConfig) -> Result<String, CliError> {
    let segments = parse_literal(source)?;
    tracing::debug!(segments = segments.len(), "parsed literal");

    let mut out = String::new();
    if config.show_segments {
        for (index, segment) in segments.iter().enumerate() {
            let encoded = Bitstring::new(vec![segment.clone()])?;
            out.push_str(&format!(
                "{index}: {segment} => {}\n",
                render(&encoded, config.output)?
            ));
        }
    }

    let bits = Bitstring::new(segments)?;
    out.push_str(&render(&bits, config.output)?);
    Ok(out)
}

fn render(bits: &Bitstring, format: OutputFormat) -> Result<String, EncodeError> {
    match format {
        OutputFormat::Decimal => Ok(bits.to_string()),
        OutputFormat::Hex => {
            let hex: Vec<String> = bits.to_bytes()?.iter().map(|b| format!("{b:02x}")).collect();
            Ok(hex.join(" "))
        }
    }
}
