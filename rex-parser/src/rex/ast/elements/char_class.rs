//! Character class: a `[...]` bracket expression
//!
//! The class body is not interpreted further; the description quotes it
//! verbatim, negated or not. A class with no closing `]` is the softer of
//! the two failure modes: the parse does not abort, the node's description
//! is the diagnostic itself and the cursor stays where the attempted match
//! left it.

use crate::rex::ast::error::ParseResult;
use crate::rex::parsing::buffer::PatternBuffer;
use crate::rex::parsing::grammar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    negated: bool,
    /// The raw class body text; `None` when the closing `]` was missing.
    body: Option<String>,
}

impl CharClass {
    /// Parse `[`, then negation marker, body and closing bracket.
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<CharClass> {
        let start = buffer.offset();
        buffer.advance(); // eat '['

        let rest = buffer.remaining();
        let char_class = match grammar::CHARACTER_CLASS.captures(&rest) {
            Some(caps) => {
                let negated = &caps["negated"] == "^";
                let body = caps["body"].to_string();
                let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
                buffer.advance_over(&rest[..end]);
                CharClass {
                    negated,
                    body: Some(body),
                }
            }
            None => CharClass {
                negated: false,
                body: None,
            },
        };

        buffer.register_span(char_class.describe(0), start, buffer.offset() - 1, false);
        Ok(char_class)
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    pub fn describe(&self, _indent: usize) -> String {
        match &self.body {
            Some(body) if self.negated => format!("Any character not in \"{}\"", body),
            Some(body) => format!("Any character in \"{}\"", body),
            None => "missing ']' in character class".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pattern: &str) -> (CharClass, usize) {
        let mut buffer = PatternBuffer::new(pattern);
        let char_class = CharClass::parse(&mut buffer).unwrap();
        (char_class, buffer.offset())
    }

    #[test]
    fn plain_class() {
        let (char_class, consumed) = parse("[abc]x");
        assert_eq!(char_class.describe(0), "Any character in \"abc\"");
        assert!(!char_class.negated());
        assert_eq!(consumed, 5);
    }

    #[test]
    fn negated_class() {
        let (char_class, consumed) = parse("[^0-9]");
        assert_eq!(char_class.describe(0), "Any character not in \"0-9\"");
        assert!(char_class.negated());
        assert_eq!(consumed, 6);
    }

    #[test]
    fn missing_bracket_degrades_to_a_diagnostic() {
        let (char_class, consumed) = parse("[abc");
        assert_eq!(char_class.describe(0), "missing ']' in character class");
        // only the '[' was consumed
        assert_eq!(consumed, 1);
    }

    #[test]
    fn first_closing_bracket_ends_the_class() {
        let (char_class, consumed) = parse("[a]b]");
        assert_eq!(char_class.describe(0), "Any character in \"a\"");
        assert_eq!(consumed, 3);
    }

    #[test]
    fn registers_one_span_covering_the_whole_class() {
        let mut buffer = PatternBuffer::new("[abc]");
        CharClass::parse(&mut buffer).unwrap();
        let entry = buffer.lookup(2).unwrap();
        assert_eq!(entry.label, "Any character in \"abc\"");
        assert_eq!((entry.start, entry.end), (0, 4));
    }
}
