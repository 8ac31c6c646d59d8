use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Formatting policies for inputs the placeholder grammar leaves undefined
///
/// Every field is optional in an options file; omitted fields fail closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub unterminated: UnterminatedPolicy,
    #[serde(default)]
    pub stray_close: StrayClosePolicy,
    #[serde(default)]
    pub missing_name: MissingNamePolicy,
}

/// What to do with a `{` that is never closed before the end of the template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
    /// Fail with `MalformedTemplate`
    #[default]
    Error,
    /// Emit the `{` and everything after it verbatim
    Literal,
    /// Silently discard the `{` and everything after it
    Drop,
}

/// What to do with a single `}` outside any placeholder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrayClosePolicy {
    #[default]
    Error,
    Literal,
}

/// What named lookups do when the name is absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Fail with `MissingArgument`
    #[default]
    Error,
    /// Substitute empty text
    Empty,
}

impl FormatOptions {
    /// Options that accept every template the historical formatter accepted
    pub fn lenient() -> Self {
        Self {
            unterminated: UnterminatedPolicy::Drop,
            stray_close: StrayClosePolicy::Literal,
            missing_name: MissingNamePolicy::Empty,
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| FormatError::ConfigParseError(e.to_string()))
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Write options as TOML
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FormatError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_options() {
        let options = FormatOptions::from_toml_str("").unwrap();
        assert_eq!(options, FormatOptions::default());
        assert_eq!(options.unterminated, UnterminatedPolicy::Error);
        assert_eq!(options.stray_close, StrayClosePolicy::Error);
        assert_eq!(options.missing_name, MissingNamePolicy::Error);
    }

    #[test]
    fn test_parse_full_options() {
        let toml = r#"
unterminated = "literal"
stray_close = "literal"
missing_name = "empty"
"#;
        let options = FormatOptions::from_toml_str(toml).unwrap();
        assert_eq!(options.unterminated, UnterminatedPolicy::Literal);
        assert_eq!(options.stray_close, StrayClosePolicy::Literal);
        assert_eq!(options.missing_name, MissingNamePolicy::Empty);
    }

    #[test]
    fn test_parse_partial_options() {
        let options = FormatOptions::from_toml_str("unterminated = \"drop\"\n").unwrap();
        assert_eq!(options.unterminated, UnterminatedPolicy::Drop);
        assert_eq!(options.missing_name, MissingNamePolicy::Error);
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let result = FormatOptions::from_toml_str("missing_name = \"guess\"\n");
        assert!(matches!(result, Err(FormatError::ConfigParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FormatOptions::from_file("/nonexistent/bracefmt/options.toml");
        assert!(matches!(result, Err(FormatError::IoError(_))));
    }
}
