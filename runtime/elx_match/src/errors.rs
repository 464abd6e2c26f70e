//! The error raised by the matching entry points.
//!
//! Matchers themselves never fail; a `MatchError` is only produced when a
//! dispatcher exhausts its clauses or a one-shot `bind` does not match.

use elx_value::Value;
use thiserror::Error;

/// Matching failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No clause (or single pattern) matched.
    ///
    /// `rendered` holds the unmatched value or argument list as shown in the
    /// message; it is `None` when there was nothing to render.
    #[error("{}", no_match_message(.rendered.as_deref()))]
    NoMatch { rendered: Option<String> },
}

impl MatchError {
    /// The rendering of the unmatched value, if any.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            MatchError::NoMatch { rendered } => rendered.as_deref(),
        }
    }
}

fn no_match_message(rendered: Option<&str>) -> String {
    match rendered {
        Some(rendered) => format!("no match for: {rendered}"),
        None => "no match for arguments given".to_string(),
    }
}

/// `NoMatch` for a single unmatched value.
#[cold]
pub fn no_match(value: &Value) -> MatchError {
    MatchError::NoMatch {
        rendered: Some(value.to_string()),
    }
}

/// `NoMatch` for a call's argument list, rendered comma-separated.
#[cold]
pub fn no_match_for_args(args: &[Value]) -> MatchError {
    if args.is_empty() {
        return MatchError::NoMatch { rendered: None };
    }
    let rendered: Vec<String> = args.iter().map(Value::to_string).collect();
    MatchError::NoMatch {
        rendered: Some(rendered.join(", ")),
    }
}
