//! Argument sources
//!
//! [`Args`] holds positional arguments addressed by zero-based index and
//! [`NamedArgs`] holds arguments addressed by exact name. Both are plain
//! containers; the resolvers in [`crate::template::resolve`] turn them into
//! placeholder lookups.

use crate::error::{FormatError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered positional arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Args::push`]
    ///
    /// ```
    /// use bracefmt_core::{format_by_index, Args};
    ///
    /// let args = Args::new().with("string").with(1).with(3.3);
    /// assert_eq!(format_by_index("{0} {1} {2}", &args).unwrap(), "string 1 3.3");
    /// ```
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Parse a JSON array of strings and numbers
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| FormatError::ArgsParseError(e.to_string()))?;

        raw.into_iter().map(Value::try_from).collect()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl<V: Into<Value>> FromIterator<V> for Args {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AsRef<[Value]> for Args {
    fn as_ref(&self) -> &[Value] {
        &self.values
    }
}

/// Arguments keyed by name
///
/// Keys are matched verbatim: case-sensitive and untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedArgs {
    values: BTreeMap<String, Value>,
}

impl NamedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert an argument, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a flat TOML table of strings and numbers
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(source).map_err(|e| FormatError::ArgsParseError(e.to_string()))?;

        table
            .into_iter()
            .map(|(name, value)| Value::try_from(value).map(|value| (name, value)))
            .collect()
    }

    /// Parse a flat JSON object of strings and numbers
    pub fn from_json_str(json: &str) -> Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| FormatError::ArgsParseError(e.to_string()))?;

        object
            .into_iter()
            .map(|(name, value)| Value::try_from(value).map(|value| (name, value)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for NamedArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
