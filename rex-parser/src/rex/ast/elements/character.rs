//! Character: a single literal, escape, anchor or quantifier symbol
//!
//! The `special` flag separates characters that render as their own
//! explanatory line from plain literals that the renderer (and the span
//! index) may coalesce into a run. Only `.` `+` `*` `?`, the table-mapped
//! escapes and back references are special; `^`, `$`, space and the
//! literal/unicode/control/hex escape forms are not, which is inherited
//! behavior kept as-is.

use crate::rex::ast::error::ParseResult;
use crate::rex::parsing::buffer::PatternBuffer;
use crate::rex::parsing::grammar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    text: String,
    special: bool,
}

impl Character {
    /// Parse one character construct. The quantifier symbols `+` `*` `?`
    /// additionally check for a trailing `?` marking them non-greedy; `\`
    /// hands off to the escape decoder. Every branch consumes exactly the
    /// characters it describes.
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<Character> {
        let start = buffer.offset();
        let mut special = false;
        let mut quantifier = false;

        let mut text = match buffer.current()? {
            '.' => {
                buffer.advance();
                special = true;
                ". (any character)".to_string()
            }
            '+' => {
                buffer.advance();
                special = true;
                quantifier = true;
                "+ (one or more times)".to_string()
            }
            '*' => {
                buffer.advance();
                special = true;
                quantifier = true;
                "* (zero or more times)".to_string()
            }
            '?' => {
                buffer.advance();
                special = true;
                quantifier = true;
                "? (zero or one time)".to_string()
            }
            '^' => {
                buffer.advance();
                "^ (anchor to start of string)".to_string()
            }
            '$' => {
                buffer.advance();
                "$ (anchor to end of string)".to_string()
            }
            ' ' => {
                buffer.advance();
                "' ' (space)".to_string()
            }
            '\\' => {
                let (text, escape_special) = decode_escape(buffer)?;
                special = escape_special;
                text
            }
            other => {
                buffer.advance();
                other.to_string()
            }
        };

        if quantifier && buffer.peek() == Some('?') {
            text.push_str(" (non-greedy)");
            buffer.advance();
        }

        let can_coalesce = text.chars().count() == 1;
        buffer.register_span(text.clone(), start, buffer.offset() - 1, can_coalesce);

        Ok(Character { text, special })
    }

    /// Whether this character renders as its own explanatory line rather
    /// than joining a coalesced literal run.
    pub fn special(&self) -> bool {
        self.special
    }

    pub fn describe(&self, _indent: usize) -> String {
        self.text.clone()
    }
}

/// Decode the construct after a `\`. Returns the description text and the
/// special flag for it.
fn decode_escape(buffer: &mut PatternBuffer) -> ParseResult<(String, bool)> {
    buffer.advance(); // eat the backslash

    let current = buffer.current()?;
    if let Some(description) = grammar::ESCAPE_DESCRIPTIONS.get(&current) {
        buffer.advance();
        return Ok((description.to_string(), true));
    }

    // \k<name> back reference
    let rest = buffer.remaining();
    if let Some(caps) = grammar::BACK_REFERENCE.captures(&rest) {
        let text = format!("Backreference to match: {}", &caps["name"]);
        buffer.advance_over(&rest[..caps.get(0).map(|m| m.end()).unwrap_or(0)]);
        return Ok((text, true));
    }

    match current {
        'u' => {
            buffer.advance();
            let digits = take_chars(buffer, 4)?;
            Ok((format!("Unicode {}", digits), false))
        }
        'c' => {
            buffer.advance();
            let control = buffer.current()?;
            buffer.advance();
            Ok((format!("CTRL-{}", control), false))
        }
        'x' => {
            buffer.advance();
            let digits = take_chars(buffer, 2)?;
            Ok((format!("Hex {}", digits), false))
        }
        ' ' => {
            buffer.advance();
            Ok(("' ' (space)".to_string(), false))
        }
        other => {
            // escaped literal; eligible for coalescing like any plain char
            buffer.advance();
            Ok((other.to_string(), false))
        }
    }
}

/// Consume exactly `count` characters, failing if the pattern ends first.
fn take_chars(buffer: &mut PatternBuffer, count: usize) -> ParseResult<String> {
    let taken: String = buffer.remaining().chars().take(count).collect();
    if taken.chars().count() < count {
        return Err(crate::rex::ast::error::ParseError::UnexpectedEnd);
    }
    buffer.advance_by(count);
    Ok(taken)
}
