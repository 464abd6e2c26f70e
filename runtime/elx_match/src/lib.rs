//! Elx Match - structural pattern matching and clause dispatch.
//!
//! This crate provides:
//! - `Pattern`: the closed set of pattern variants
//! - `compile` / `Matcher`: patterns compiled once into reusable predicates
//! - `Bindings`: values captured by a successful match, in descent order
//! - `Dispatcher`: ordered, guarded clauses resolved by first match
//! - `bind`, `is_match`, `contains`: one-shot matching entry points
//! - `MatchError`: the error raised when nothing matches
//!
//! # Matching Model
//!
//! Matchers are total predicates: a structural mismatch is `false`, never an
//! error. Only the dispatcher and `bind` raise `MatchError::NoMatch`.
//!
//! ```text
//! let area = Dispatcher::builder()
//!     .clause([Pattern::tuple([Pattern::symbol("square"), Pattern::parameter()])], |b| {
//!         b[0].as_int().map(|s| s * s)
//!     })
//!     .clause([Pattern::tuple([Pattern::symbol("rect"), Pattern::parameter(), Pattern::parameter()])], |b| {
//!         Some(b[0].as_int()? * b[1].as_int()?)
//!     })
//!     .build();
//! ```

mod bind;
mod bindings;
mod compile;
mod dispatch;
mod errors;
mod pattern;

pub use bind::{bind, contains, is_match, is_match_guarded};
pub use bindings::Bindings;
pub use compile::{compile, Matcher};
pub use dispatch::{Clause, Dispatcher, DispatcherBuilder, Guard, Handler};
pub use errors::{no_match, no_match_for_args, MatchError};
pub use pattern::Pattern;

pub use elx_value::{Atom, TypeTag, Value};
