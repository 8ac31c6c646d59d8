//! Unit tests for Scanner

use super::scan::{ScanState, Scanner, Segment};

fn segments(text: &str) -> Vec<Segment<'_>> {
    Scanner::new(text).collect()
}

#[test]
fn test_scan_empty() {
    assert!(segments("").is_empty());
}

#[test]
fn test_scan_plain_text_is_one_literal() {
    assert_eq!(segments("no braces here"), vec![Segment::Literal("no braces here")]);
}

#[test]
fn test_scan_placeholder_between_literals() {
    assert_eq!(
        segments("Hello, {0}!"),
        vec![
            Segment::Literal("Hello, "),
            Segment::Placeholder { key: "0", start: 7 },
            Segment::Literal("!"),
        ]
    );
}

#[test]
fn test_scan_adjacent_placeholders() {
    assert_eq!(
        segments("{a}{b}"),
        vec![
            Segment::Placeholder { key: "a", start: 0 },
            Segment::Placeholder { key: "b", start: 3 },
        ]
    );
}

#[test]
fn test_scan_escapes() {
    assert_eq!(
        segments("{{}}"),
        vec![Segment::Escape('{'), Segment::Escape('}')]
    );
    assert_eq!(
        segments("a{{b"),
        vec![
            Segment::Literal("a"),
            Segment::Escape('{'),
            Segment::Literal("b"),
        ]
    );
}

#[test]
fn test_scan_empty_key() {
    assert_eq!(
        segments("{}"),
        vec![Segment::Placeholder { key: "", start: 0 }]
    );
}

#[test]
fn test_scan_key_is_verbatim() {
    assert_eq!(
        segments("{ spaced key }"),
        vec![Segment::Placeholder {
            key: " spaced key ",
            start: 0
        }]
    );
}

#[test]
fn test_scan_open_brace_inside_placeholder_is_key_text() {
    assert_eq!(
        segments("{a{b}"),
        vec![Segment::Placeholder { key: "a{b", start: 0 }]
    );
}

#[test]
fn test_scan_double_close_inside_placeholder_closes_once() {
    // The first '}' closes the placeholder; the second is then a lone '}'
    assert_eq!(
        segments("{0}}"),
        vec![
            Segment::Placeholder { key: "0", start: 0 },
            Segment::StrayClose { pos: 3 },
        ]
    );
}

#[test]
fn test_scan_closed_placeholder_then_escape() {
    assert_eq!(
        segments("{0}}}"),
        vec![
            Segment::Placeholder { key: "0", start: 0 },
            Segment::Escape('}'),
        ]
    );
}

#[test]
fn test_scan_unterminated() {
    assert_eq!(
        segments("abc {key"),
        vec![
            Segment::Literal("abc "),
            Segment::Unterminated {
                key: "key",
                start: 4
            },
        ]
    );
    assert_eq!(
        segments("{"),
        vec![Segment::Unterminated { key: "", start: 0 }]
    );
}

#[test]
fn test_scan_stray_close() {
    assert_eq!(
        segments("a}b"),
        vec![
            Segment::Literal("a"),
            Segment::StrayClose { pos: 1 },
            Segment::Literal("b"),
        ]
    );
}

#[test]
fn test_scan_multibyte_text() {
    assert_eq!(
        segments("héllo {名前} ✓"),
        vec![
            Segment::Literal("héllo "),
            Segment::Placeholder {
                key: "名前",
                start: 7
            },
            Segment::Literal(" ✓"),
        ]
    );
}

#[test]
fn test_scan_state_after_exhaustion() {
    let mut scanner = Scanner::new("x{y}");
    assert_eq!(scanner.state(), ScanState::Text { run_start: 0 });
    assert_eq!(scanner.next(), Some(Segment::Literal("x")));
    assert_eq!(scanner.state(), ScanState::Text { run_start: 1 });
    assert_eq!(
        scanner.next(),
        Some(Segment::Placeholder { key: "y", start: 1 })
    );
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.state(), ScanState::Done);
    assert_eq!(scanner.next(), None);
}
