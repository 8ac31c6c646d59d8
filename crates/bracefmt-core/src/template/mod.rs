//! Template module - brace placeholder substitution
//!
//! Renders a format string by replacing each `{key}` placeholder with a
//! [`Value`](crate::value::Value) obtained from a resolver.
//!
//! ## Syntax
//!
//! - Placeholders: `{0}` (positional) or `{name}` (named); the key is taken verbatim
//! - Escape sequences: `{{` emits `{` and `}}` emits `}`
//! - Inside a placeholder the first `}` always closes it
//!
//! ## Resolution
//!
//! The engine only sees a [`Resolver`]. Whether keys are indices, names, or
//! something a caller computes on the fly is decided by the resolver alone.

pub mod engine;
pub mod error;
pub mod resolve;

pub use engine::{format, format_by_index, format_by_name, format_plain, Formatter};
pub use error::MissingReason;
pub use resolve::{FnResolver, IndexResolver, NameResolver, NoArguments, Resolver};
