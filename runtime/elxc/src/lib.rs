//! Elx CLI library.
//!
//! Parses Elixir-style bitstring literals and encodes them with
//! `elx_bitstring`. The `elx` binary is a thin argument dispatcher over
//! `commands`.

pub mod commands;
pub mod config;
pub mod literal;

use std::sync::Once;

pub use commands::{encode_literal, CliError};
pub use config::{parse_encode_options, EncodeConfig, OutputFormat};
pub use literal::{parse_literal, ParseError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Reads filter directives from `ELX_LOG`, falling back to `RUST_LOG`, and
/// does nothing when neither is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let directives = std::env::var("ELX_LOG").or_else(|_| std::env::var("RUST_LOG"));
        if let Ok(directives) = directives {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}
