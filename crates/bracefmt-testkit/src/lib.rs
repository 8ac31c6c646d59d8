//! Test utilities for bracefmt
//!
//! This crate provides shared testing utilities used across the bracefmt workspace.

pub mod fixtures;
pub mod recording;

pub use fixtures::{greeting_args, mixed_args, mixed_named};
pub use recording::RecordingResolver;

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh temporary `.toml` file
///
/// The file is removed when the returned handle is dropped.
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
///
/// # Examples
///
/// ```rust
/// use bracefmt_core::FormatOptions;
/// use bracefmt_testkit::options_file;
///
/// let file = options_file("missing_name = \"empty\"\n");
/// let options = FormatOptions::from_file(file.path()).unwrap();
/// assert_eq!(options, FormatOptions {
///     missing_name: bracefmt_core::config::MissingNamePolicy::Empty,
///     ..FormatOptions::default()
/// });
/// ```
pub fn options_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("bracefmt-options-")
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temporary options file");

    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary options file");
    file.flush().expect("Failed to flush temporary options file");

    file
}
