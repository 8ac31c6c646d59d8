//! Shared test helpers for template engine tests

use std::borrow::Cow;

use crate::args::{Args, NamedArgs};
use crate::error::Result;
use crate::template::resolve::Resolver;
use crate::value::Value;

/// `["string", 1, 3.3]`
pub(super) fn mixed_args() -> Args {
    Args::new().with("string").with(1).with(3.3)
}

/// `{first: "string", second: 1, third: 3.3}`
pub(super) fn mixed_named() -> NamedArgs {
    NamedArgs::new()
        .with("first", "string")
        .with("second", 1)
        .with("third", 3.3)
}

/// Resolver that records every key it is asked for and echoes it back as text
#[derive(Default)]
pub(super) struct EchoResolver {
    pub keys: Vec<String>,
}

impl Resolver for EchoResolver {
    fn resolve(&mut self, key: &str) -> Result<Cow<'_, Value>> {
        self.keys.push(key.to_string());
        Ok(Cow::Owned(Value::from(key)))
    }
}
