//! Resolver wrapper that records lookups

use std::borrow::Cow;

use bracefmt_core::{Resolver, Result, Value};

/// Wraps another resolver and records every key passed through it
///
/// Keys are recorded before delegating, so failed lookups are recorded too.
pub struct RecordingResolver<R> {
    inner: R,
    keys: Vec<String>,
}

impl<R: Resolver> RecordingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            keys: Vec::new(),
        }
    }

    /// Keys requested so far, in call order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn calls(&self) -> usize {
        self.keys.len()
    }
}

impl<R: Resolver> Resolver for RecordingResolver<R> {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        self.keys.push(key.to_string());
        self.inner.resolve(key)
    }
}
