//! Placeholder scanner
//!
//! Splits a format string into [`Segment`]s in a single forward pass with one
//! byte of lookahead.

use crate::config::consts::delimiters::{CLOSE, OPEN};

/// One unit of a scanned template
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment<'a> {
    /// Run of ordinary text, emitted verbatim
    Literal(&'a str),

    /// `{{` or `}}`, emitted as the single delimiter
    Escape(char),

    /// `{key}`
    Placeholder {
        /// Raw key text between the braces
        key: &'a str,
        /// Byte position of the opening `{`
        start: usize,
    },

    /// `{key` running to the end of the template
    Unterminated {
        /// Raw text after the opening `{`
        key: &'a str,
        /// Byte position of the opening `{`
        start: usize,
    },

    /// Single `}` outside any placeholder
    StrayClose {
        /// Byte position of the `}`
        pos: usize,
    },
}

/// Scanner state machine
///
/// ```text
/// Text ──{x──> InPlaceholder ──}──> [Placeholder] → Text
///  │ │                  │
///  │ └─{{ or }}──> [Escape] → Text
///  │                    └─EOF──> [Unterminated]
///  └─}x──> [StrayClose] → Text
/// ```
///
/// Inside a placeholder every byte except `}` belongs to the key, including `{`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanState {
    /// Outside a placeholder; `run_start` is where the pending literal run began
    Text { run_start: usize },

    /// Inside a placeholder opened at `open`
    InPlaceholder { open: usize },

    /// Input exhausted
    Done,
}

/// Iterator over the segments of a template
///
/// Slices are taken only at delimiter positions, which are ASCII and
/// therefore always UTF-8 boundaries.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Text { run_start: 0 },
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// Flush the pending literal run, if any, before handling the byte at `pos`
    fn flush_literal(&mut self, run_start: usize) -> Option<Segment<'a>> {
        if run_start < self.pos {
            self.state = ScanState::Text {
                run_start: self.pos,
            };
            Some(Segment::Literal(&self.text[run_start..self.pos]))
        } else {
            None
        }
    }

    fn finish(&mut self) -> Option<Segment<'a>> {
        let end = self.bytes.len();
        let segment = match self.state {
            ScanState::Text { run_start } if run_start < end => {
                Some(Segment::Literal(&self.text[run_start..end]))
            }
            ScanState::InPlaceholder { open } => Some(Segment::Unterminated {
                key: &self.text[open + 1..end],
                start: open,
            }),
            _ => None,
        };
        self.state = ScanState::Done;
        segment
    }

    /// Handle a delimiter byte seen outside a placeholder
    fn process_delimiter(&mut self, byte: u8) -> Option<Segment<'a>> {
        let next = self.bytes.get(self.pos + 1).copied();

        if next == Some(byte) {
            self.pos += 2;
            self.state = ScanState::Text { run_start: self.pos };
            return Some(Segment::Escape(byte as char));
        }

        if byte == OPEN {
            self.state = ScanState::InPlaceholder { open: self.pos };
            self.pos += 1;
            return None;
        }

        let pos = self.pos;
        self.pos += 1;
        self.state = ScanState::Text { run_start: self.pos };
        Some(Segment::StrayClose { pos })
    }

    /// Record step for O(n) verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        loop {
            if self.state == ScanState::Done {
                return None;
            }
            if self.pos >= self.bytes.len() {
                return self.finish();
            }

            #[cfg(test)]
            Self::record_test_step();

            let byte = self.bytes[self.pos];
            match self.state {
                ScanState::Text { run_start } => {
                    if byte == OPEN || byte == CLOSE {
                        if let Some(literal) = self.flush_literal(run_start) {
                            return Some(literal);
                        }
                        if let Some(segment) = self.process_delimiter(byte) {
                            return Some(segment);
                        }
                    } else {
                        self.pos += 1;
                    }
                }
                ScanState::InPlaceholder { open } => {
                    if byte == CLOSE {
                        let key = &self.text[open + 1..self.pos];
                        self.pos += 1;
                        self.state = ScanState::Text { run_start: self.pos };
                        return Some(Segment::Placeholder { key, start: open });
                    }
                    self.pos += 1;
                }
                ScanState::Done => return None,
            }
        }
    }
}
