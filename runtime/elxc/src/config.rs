//! Options for the `encode` command.

/// How the encoded sequence is printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<<65, 66>>`
    #[default]
    Decimal,
    /// `41 42`; fails unless every element is a byte.
    Hex,
}

impl OutputFormat {
    /// Parse an output format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "decimal" | "dec" => Some(Self::Decimal),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }
}

/// Encode options parsed from command line arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Output format (--hex, --format=<decimal|hex>)
    pub output: OutputFormat,
    /// List each parsed segment with its own encoding (--segments)
    pub show_segments: bool,
}

/// Split `encode` arguments into the literal and its options.
///
/// Unknown flags are reported on stderr and ignored. Returns `None` for the
/// literal when no positional argument was given.
pub fn parse_encode_options(args: &[String]) -> (Option<String>, EncodeConfig) {
    let mut config = EncodeConfig::default();
    let mut literal = None;

    for arg in args {
        if arg == "--hex" || arg == "-x" {
            config.output = OutputFormat::Hex;
        } else if let Some(name) = arg.strip_prefix("--format=") {
            if let Some(format) = OutputFormat::from_name(name) {
                config.output = format;
            } else {
                eprintln!("warning: unknown output format '{name}', options: decimal, hex");
            }
        } else if arg == "--segments" || arg == "-s" {
            config.show_segments = true;
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        } else if literal.is_none() {
            literal = Some(arg.clone());
        } else {
            eprintln!("warning: ignoring extra argument '{arg}'");
        }
    }

    (literal, config)
}
