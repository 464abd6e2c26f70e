//! Command handlers for the elx CLI.

mod encode;

pub use encode::{encode_literal, CliError};
