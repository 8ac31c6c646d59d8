//! Brace placeholder string formatting
//!
//! ```
//! use bracefmt_core::{format_by_index, format_by_name, Args, NamedArgs};
//!
//! let args = Args::new().with("world").with("Hello");
//! assert_eq!(format_by_index("{1}, {0}!", &args).unwrap(), "Hello, world!");
//!
//! let named = NamedArgs::new().with("first", "string").with("second", 1).with("third", 3.3);
//! assert_eq!(
//!     format_by_name("{first} {second} {third}", &named).unwrap(),
//!     "string 1 3.3"
//! );
//! ```

// Core modules
pub mod args;
pub mod config;
pub mod error;
pub mod template;
pub mod value;

// Re-export commonly used types
pub use args::{Args, NamedArgs};
pub use config::FormatOptions;
pub use error::{FormatError, Result};
pub use template::{
    format, format_by_index, format_by_name, format_plain, Formatter, MissingReason, Resolver,
};
pub use value::{Value, ValueKind};
