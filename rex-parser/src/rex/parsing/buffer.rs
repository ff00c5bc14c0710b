//! The pattern cursor
//!
//! [`PatternBuffer`] is the single piece of mutable state threaded through
//! the recursive descent: the pattern text (as characters, so offsets are
//! character offsets), the current position, the active options, the error
//! highlight set when a structural failure is raised, and the span index.
//!
//! The offset only ever moves forward during a parse. The one way to parse
//! a region out of order is [`PatternBuffer::slice`], which hands back an
//! independent buffer over a substring, used when a lookaround body needs
//! to be interpreted in isolation.

use crate::rex::ast::error::{ParseError, ParseResult};
use crate::rex::options::ExplainOptions;
use crate::rex::parsing::span::{SpanEntry, SpanTable};

/// A pattern string with a cursor in it.
#[derive(Debug, Clone)]
pub struct PatternBuffer {
    chars: Vec<char>,
    offset: usize,
    options: ExplainOptions,
    error: Option<(usize, usize)>,
    spans: SpanTable,
}

impl PatternBuffer {
    /// Buffer over `pattern` with default options.
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, ExplainOptions::default())
    }

    pub fn with_options(pattern: &str, options: ExplainOptions) -> Self {
        Self {
            chars: pattern.chars().collect(),
            offset: 0,
            options,
            error: None,
            spans: SpanTable::new(),
        }
    }

    /// The character under the cursor. Fails once the cursor has run off the
    /// end of the pattern.
    pub fn current(&self) -> ParseResult<char> {
        self.chars
            .get(self.offset)
            .copied()
            .ok_or(ParseError::UnexpectedEnd)
    }

    /// The character under the cursor, or `None` at the end. Convenience for
    /// loops that treat end-of-input as a stop condition rather than an
    /// error.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.chars.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn advance(&mut self) {
        self.offset += 1;
    }

    pub fn advance_by(&mut self, count: usize) {
        self.offset += count;
    }

    /// Advance over `prefix`, a byte-prefix of [`PatternBuffer::remaining`].
    /// Micro-grammar matchers work on the remaining text as a string; this
    /// converts their byte-measured consumption back into character offsets.
    pub fn advance_over(&mut self, prefix: &str) {
        self.offset += prefix.chars().count();
    }

    /// The unconsumed suffix of the pattern, for matchers that need
    /// lookahead beyond one character.
    pub fn remaining(&self) -> String {
        self.chars[self.offset.min(self.chars.len())..]
            .iter()
            .collect()
    }

    /// An independent buffer over the inclusive `[start, end]` substring,
    /// with a fresh cursor and default options. Lets a caller reparse a
    /// lookaround's captured sub-pattern in isolation.
    pub fn slice(&self, start: usize, end: usize) -> PatternBuffer {
        let text: String = self.chars[start..=end].iter().collect();
        PatternBuffer::new(&text)
    }

    pub fn options(&self) -> &ExplainOptions {
        &self.options
    }

    pub fn ignore_pattern_whitespace(&self) -> bool {
        self.options.ignore_pattern_whitespace
    }

    pub fn explicit_capture(&self) -> bool {
        self.options.explicit_capture
    }

    /// Record the source range to highlight for a structural failure.
    pub fn set_error(&mut self, location: usize, length: usize) {
        self.error = Some((location, length));
    }

    /// The `(location, length)` to highlight, set only when a structural
    /// failure was raised.
    pub fn error(&self) -> Option<(usize, usize)> {
        self.error
    }

    /// Register a node's span in the index. See [`SpanTable::register`].
    pub fn register_span(&mut self, label: String, start: usize, end: usize, can_coalesce: bool) {
        self.spans.register(label, start, end, can_coalesce);
    }

    /// End any in-progress literal-run coalescing (called when a
    /// non-character construct begins).
    pub fn clear_series(&mut self) {
        self.spans.clear_series();
    }

    /// The innermost registered span containing `offset`.
    pub fn lookup(&self, offset: usize) -> Option<&SpanEntry> {
        self.spans.lookup(offset)
    }

    pub fn spans(&self) -> &SpanTable {
        &self.spans
    }

    pub fn into_spans(self) -> SpanTable {
        self.spans
    }

    /// Require a closing `)` under the cursor and consume it.
    ///
    /// At end of input this is the unterminated-group failure: the buffer's
    /// error highlight is pointed at the group's open paren and the same
    /// range is carried in the returned error.
    pub fn expect_closing_paren(&mut self, group_start: usize) -> ParseResult<()> {
        let current = match self.current() {
            Ok(current) => current,
            Err(_) => {
                self.set_error(group_start, 1);
                return Err(ParseError::UnterminatedGroup {
                    location: group_start,
                    length: 1,
                });
            }
        };

        if current != ')' {
            return Err(ParseError::UnterminatedClosure {
                offset: self.offset,
            });
        }

        self.advance();
        Ok(())
    }
}
