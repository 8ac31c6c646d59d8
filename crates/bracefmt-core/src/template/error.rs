//! Placeholder resolution failure reasons

use std::fmt;

/// Why a resolver could not produce a value for a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingReason {
    /// Positional key is not a non-negative base-10 integer
    NotAnIndex,

    /// Positional key is past the end of the argument list
    OutOfRange {
        /// Number of arguments supplied
        len: usize,
    },

    /// Named key is absent from the mapping
    UnknownName,

    /// The call supplied no arguments at all
    NoArguments,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::NotAnIndex => write!(f, "key is not a positional index"),
            MissingReason::OutOfRange { len } => {
                write!(f, "index out of range for {} argument(s)", len)
            }
            MissingReason::UnknownName => write!(f, "no argument with that name"),
            MissingReason::NoArguments => write!(f, "no arguments were supplied"),
        }
    }
}
