// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token, AST node, and diagnostic carries a [`Span`] indicating its
//! position in the source text. Spans are created only by the lexer; the
//! parser composes them with [`Span::merge`] and never forges one.

use std::ops::Range;

use serde::Serialize;

/// A span of source text.
///
/// Carries the 1-based line and column of the first byte, the 0-based byte
/// offset, and the length in bytes. Spans address the original source text;
/// re-emitting a document is not byte-preserving.
///
/// # Examples
///
/// ```
/// use tdl_core::source_analysis::Span;
///
/// let span = Span::new(1, 5, 4, 7);
/// assert_eq!(span.offset(), 4);
/// assert_eq!(span.end(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    line: u32,
    column: u32,
    offset: u32,
    length: u32,
}

impl Span {
    /// Creates a new span.
    ///
    /// `line` and `column` are 1-based; `offset` is a 0-based byte index and
    /// `length` a byte count.
    #[must_use]
    pub const fn new(line: u32, column: u32, offset: u32, length: u32) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }

    /// Returns the 1-based line number of the first byte.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }

    /// Returns the 1-based column of the first byte.
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// Returns the 0-based byte offset.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Returns the length in bytes.
    #[must_use]
    pub const fn length(self) -> u32 {
        self.length
    }

    /// Returns the byte offset one past the last byte (exclusive).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.offset + self.length
    }

    /// Returns true if the span covers zero bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Creates a span covering `self` through the end of `other`.
    ///
    /// Keeps the line, column, and offset of `self`; the length extends to
    /// the last byte of `other`. The arguments are expected in source order.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            line: self.line,
            column: self.column,
            offset: self.offset,
            length: other.end() - self.offset,
        }
    }

    /// Converts to a `Range<usize>` for indexing into source text.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.as_range()
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.offset as usize, span.length as usize).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_new_and_accessors() {
        let span = Span::new(2, 3, 10, 5);
        assert_eq!(span.line(), 2);
        assert_eq!(span.column(), 3);
        assert_eq!(span.offset(), 10);
        assert_eq!(span.length(), 5);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());
    }

    #[test]
    fn span_empty() {
        let span = Span::new(1, 1, 7, 0);
        assert!(span.is_empty());
        assert_eq!(span.end(), 7);
    }

    #[test]
    fn span_merge_extends_to_end_of_second() {
        let a = Span::new(1, 1, 0, 7);
        let b = Span::new(3, 4, 20, 10);
        let merged = a.merge(b);
        assert_eq!(merged.line(), 1);
        assert_eq!(merged.column(), 1);
        assert_eq!(merged.offset(), 0);
        assert_eq!(merged.length(), 30);
    }

    #[test]
    fn span_merge_is_identity_on_self() {
        let a = Span::new(4, 9, 33, 6);
        assert_eq!(a.merge(a), a);
    }

    #[test]
    fn span_as_range() {
        let span = Span::new(1, 6, 5, 10);
        let range: Range<usize> = span.into();
        assert_eq!(range, 5..15);
    }
}
