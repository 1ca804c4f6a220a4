//! Source location tracking.
//!
//! A single-file, single-pass pipeline only ever needs a position inside
//! the one source text currently being compiled, so `Span` carries a byte
//! offset plus a human-facing line/column pair and nothing else — no
//! `FileId`, no `SourceMap`. See spec.md's Non-goal on multiple source
//! files.

use std::fmt;

/// A location in source text: a byte offset plus 1-based line/column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character this span covers.
    pub offset: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (in characters, not bytes).
    pub column: u32,
}

impl Span {
    /// A span at the very start of a source file.
    pub const START: Span = Span {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
