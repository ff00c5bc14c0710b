//! Expression: a run of the grammar until `)` or end of input
//!
//! The expression loop is the dispatcher of the whole parse: it inspects
//! the current character and hands control to the node constructor that
//! owns that syntax. It stops - without consuming - on `)`, which is what
//! lets an enclosing group's own closing-paren check succeed.

use crate::rex::ast::elements::{
    Alternate, Capture, CharClass, Character, Node, Quantifier,
};
use crate::rex::ast::error::ParseResult;
use crate::rex::parsing::buffer::PatternBuffer;

/// An ordered sequence of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    items: Vec<Node>,
}

impl Expression {
    /// Parse items until `)` or end of input.
    ///
    /// In ignore-whitespace mode, unescaped whitespace is skipped and `#`
    /// starts a comment running to the end of the line (or of the pattern).
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<Expression> {
        let mut items = Vec::new();

        while let Some(current) = buffer.peek() {
            if buffer.ignore_pattern_whitespace()
                && matches!(current, ' ' | '\r' | '\n' | '\t')
            {
                buffer.advance();
                continue;
            }

            match current {
                '(' => items.push(Node::Capture(Capture::parse(buffer)?)),
                // end of closure; leave the paren for the owner.
                ')' => break,
                '[' => items.push(Node::CharClass(CharClass::parse(buffer)?)),
                '{' => items.push(Node::Quantifier(Quantifier::parse(buffer)?)),
                '|' => items.push(Node::Alternate(Alternate::parse(buffer))),
                '#' if buffer.ignore_pattern_whitespace() => eat_comment(buffer),
                _ => items.push(Node::Character(Character::parse(buffer)?)),
            }
        }

        Ok(Expression { items })
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    /// Render the children in order. Consecutive plain (non-special)
    /// characters are buffered and flushed as a single indented line; every
    /// other child gets its own description, indented, with a line break
    /// appended unless its text already ends in one.
    pub fn describe(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut out = String::new();
        let mut run = String::new();

        for item in &self.items {
            if let Node::Character(character) = item {
                if !character.special() {
                    run.push_str(&character.describe(indent));
                    continue;
                }
            }

            // flush any buffered plain characters first...
            if !run.is_empty() {
                out.push_str(&pad);
                out.push_str(&run);
                out.push('\n');
                run.clear();
            }

            out.push_str(&pad);
            let text = item.describe(indent);
            if !text.is_empty() {
                out.push_str(&text);
                if !text.ends_with('\n') {
                    out.push('\n');
                }
            }
        }

        if !run.is_empty() {
            out.push_str(&pad);
            out.push_str(&run);
            out.push('\n');
        }

        out
    }
}

// Eat the whole comment until the end of the line. The newline itself is
// left for the whitespace skip; end of input also ends the comment.
fn eat_comment(buffer: &mut PatternBuffer) {
    while let Some(current) = buffer.peek() {
        if current == '\r' || current == '\n' {
            break;
        }
        buffer.advance();
    }
}
