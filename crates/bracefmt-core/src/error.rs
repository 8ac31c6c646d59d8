use crate::template::error::MissingReason;
use crate::value::ValueKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    // Value errors
    #[error("TYPE_MISMATCH: expected {expected} value, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("UNSUPPORTED_VALUE: {0}")]
    UnsupportedValue(String),

    #[error("INTEGER_OVERFLOW: {0} does not fit in a signed 64-bit integer")]
    IntegerOverflow(String),

    // Resolution errors
    #[error("MISSING_ARGUMENT: no argument for placeholder '{key}' ({reason})")]
    MissingArgument { key: String, reason: MissingReason },

    #[error("RESOLUTION_FAILED: placeholder '{key}': {message}")]
    Resolution { key: String, message: String },

    // Template errors
    #[error("MALFORMED_TEMPLATE: {message} at byte {position} (line {line})")]
    MalformedTemplate {
        message: String,
        position: usize,
        line: usize,
    },

    // Loading errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("ARGS_PARSE_ERROR: {0}")]
    ArgsParseError(String),

    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormatError {
    pub fn missing(key: impl Into<String>, reason: MissingReason) -> Self {
        FormatError::MissingArgument {
            key: key.into(),
            reason,
        }
    }

    /// Error for custom resolvers that fail for reasons other than a missing argument
    pub fn resolution(key: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::Resolution {
            key: key.into(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(template: &str, position: usize, message: impl Into<String>) -> Self {
        FormatError::MalformedTemplate {
            message: message.into(),
            position,
            line: line_at(template, position),
        }
    }
}

/// 1-based line number of a byte offset
fn line_at(template: &str, position: usize) -> usize {
    let end = position.min(template.len());
    template.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

pub type Result<T> = std::result::Result<T, FormatError>;
