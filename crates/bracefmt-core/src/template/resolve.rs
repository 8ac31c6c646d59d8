//! Placeholder resolvers
//!
//! A resolver maps the raw key text of a placeholder to a [`Value`]. The
//! engine calls it once per placeholder, left to right, and propagates any
//! error it returns unchanged.

use std::borrow::Cow;

use crate::args::NamedArgs;
use crate::config::MissingNamePolicy;
use crate::error::{FormatError, Result};
use crate::template::error::MissingReason;
use crate::value::Value;

/// Maps placeholder keys to values
pub trait Resolver {
    /// Resolve the key of one placeholder
    ///
    /// Borrowing resolvers return `Cow::Borrowed`; resolvers that compute
    /// values return `Cow::Owned`.
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>>;
}

impl<R: Resolver + ?Sized> Resolver for &mut R {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        (**self).resolve(key)
    }
}

/// Positional lookup: the key is a zero-based index into a slice
#[derive(Debug, Clone, Copy)]
pub struct IndexResolver<'a> {
    args: &'a [Value],
}

impl<'a> IndexResolver<'a> {
    pub fn new(args: &'a [Value]) -> Self {
        Self { args }
    }
}

/// Parse a key as a plain non-negative base-10 index
///
/// Signs, whitespace and trailing characters are rejected. Returns
/// `Ok(None)` for a well-formed index too large for `usize`.
fn parse_index(key: &str) -> Result<Option<usize>> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::missing(key, MissingReason::NotAnIndex));
    }
    Ok(key.parse::<usize>().ok())
}

impl Resolver for IndexResolver<'_> {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        let len = self.args.len();
        parse_index(key)?
            .and_then(|index| self.args.get(index))
            .map(Cow::Borrowed)
            .ok_or_else(|| FormatError::missing(key, MissingReason::OutOfRange { len }))
    }
}

/// Named lookup: the key is matched verbatim against the mapping
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    args: &'a NamedArgs,
    missing: MissingNamePolicy,
}

impl<'a> NameResolver<'a> {
    pub fn new(args: &'a NamedArgs) -> Self {
        Self {
            args,
            missing: MissingNamePolicy::default(),
        }
    }

    pub fn with_missing_policy(mut self, missing: MissingNamePolicy) -> Self {
        self.missing = missing;
        self
    }
}

impl Resolver for NameResolver<'_> {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        match (self.args.get(key), self.missing) {
            (Some(value), _) => Ok(Cow::Borrowed(value)),
            (None, MissingNamePolicy::Error) => {
                Err(FormatError::missing(key, MissingReason::UnknownName))
            }
            (None, MissingNamePolicy::Empty) => {
                tracing::debug!(key, "unknown name substituted with empty text");
                Ok(Cow::Owned(Value::Text(String::new())))
            }
        }
    }
}

/// Resolver for calls without arguments: every lookup fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArguments;

impl Resolver for NoArguments {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        Err(FormatError::missing(key, MissingReason::NoArguments))
    }
}

/// Adapts a closure into a [`Resolver`]
pub struct FnResolver<F>(pub F);

impl<F> Resolver for FnResolver<F>
where
    F: FnMut(&str) -> Result<Value>,
{
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        (self.0)(key).map(Cow::Owned)
    }
}
