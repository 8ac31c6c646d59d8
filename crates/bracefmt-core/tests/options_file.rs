//! Loading formatter options from TOML files

use bracefmt_core::config::{MissingNamePolicy, StrayClosePolicy, UnterminatedPolicy};
use bracefmt_core::{FormatError, FormatOptions, Formatter};
use bracefmt_testkit::{mixed_named, options_file};
use tempfile::TempDir;

#[test]
fn test_load_lenient_options_and_format() {
    let file = options_file(
        r#"
unterminated = "literal"
stray_close = "literal"
missing_name = "empty"
"#,
    );
    let options = FormatOptions::from_file(file.path()).unwrap();
    assert_eq!(options.unterminated, UnterminatedPolicy::Literal);
    assert_eq!(options.stray_close, StrayClosePolicy::Literal);
    assert_eq!(options.missing_name, MissingNamePolicy::Empty);

    let result = Formatter::with_options(options)
        .format_by_name("{first}{nope} } {open", &mixed_named())
        .unwrap();
    assert_eq!(result, "string } {open");
}

#[test]
fn test_empty_file_uses_strict_defaults() {
    let file = options_file("");
    let options = FormatOptions::from_file(file.path()).unwrap();
    assert_eq!(options, FormatOptions::default());

    let err = Formatter::with_options(options)
        .format_by_name("{nope}", &mixed_named())
        .unwrap_err();
    assert!(matches!(err, FormatError::MissingArgument { .. }));
}

#[test]
fn test_invalid_file_is_config_error() {
    let file = options_file("unterminated = 3\n");
    let err = FormatOptions::from_file(file.path()).unwrap_err();
    assert!(matches!(err, FormatError::ConfigParseError(_)));
    assert!(err.to_string().starts_with("CONFIG_PARSE_ERROR:"));
}

#[test]
fn test_options_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("options.toml");

    let options = FormatOptions::lenient();
    options.to_file(&path).unwrap();

    let loaded = FormatOptions::from_file(&path).unwrap();
    assert_eq!(loaded, options);
}
