//! Conditional: `(?(condition)yes|no)`
//!
//! The parser sees two expressions: the condition, then the combined
//! yes/no expression. The branch boundary is not a parse-time construct -
//! rendering walks the combined expression's children in order and switches
//! to the "else match" branch at the first top-level [`Alternate`].
//!
//! [`Alternate`]: crate::rex::ast::elements::Alternate

use crate::rex::ast::elements::{Expression, Node};
use crate::rex::ast::error::ParseResult;
use crate::rex::parsing::buffer::PatternBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    condition: Expression,
    yes_no: Expression,
}

impl Conditional {
    /// Parse the condition expression, require `)`, parse the combined
    /// yes/no expression, require `)`. The second paren doubles as the
    /// enclosing group's closing paren.
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<Conditional> {
        let start = buffer.offset();

        let condition = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;

        let yes_no = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;

        let conditional = Conditional { condition, yes_no };
        buffer.register_span(conditional.describe(0), start, buffer.offset() - 1, false);
        Ok(conditional)
    }

    pub fn condition(&self) -> &Expression {
        &self.condition
    }

    pub fn yes_no(&self) -> &Expression {
        &self.yes_no
    }

    pub fn describe(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut result = format!("{}if: {}", pad, self.condition.describe(0));
        result.push_str(&format!("{}match: ", pad));

        // walk through until we find an alternation
        for item in self.yes_no.items() {
            if matches!(item, Node::Alternate(_)) {
                result.push_str(&format!("\n{}else match: ", pad));
            } else {
                result.push_str(&item.describe(indent));
            }
        }

        result.push('\n');
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rex::ast::error::ParseError;

    fn parse(pattern: &str) -> (Conditional, usize) {
        let mut buffer = PatternBuffer::new(pattern);
        let conditional = Conditional::parse(&mut buffer).unwrap();
        (conditional, buffer.offset())
    }

    #[test]
    fn parses_condition_and_branches() {
        // as reached from "(?(x)yes|no)" after the "?(" introducer
        let (conditional, consumed) = parse("x)yes|no)");
        assert_eq!(conditional.condition().items().len(), 1);
        assert_eq!(conditional.yes_no().items().len(), 6);
        assert_eq!(consumed, 9);
    }

    #[test]
    fn renders_if_match_and_else_match() {
        let (conditional, _) = parse("x)yes|no)");
        assert_eq!(conditional.describe(0), "if: x\nmatch: yes\nelse match: no\n");
    }

    #[test]
    fn renders_without_an_else_branch() {
        let (conditional, _) = parse("x)yes)");
        assert_eq!(conditional.describe(0), "if: x\nmatch: yes\n");
    }

    #[test]
    fn missing_second_paren_is_unterminated() {
        let mut buffer = PatternBuffer::new("x)yes");
        let error = Conditional::parse(&mut buffer).unwrap_err();
        assert!(matches!(error, ParseError::UnterminatedGroup { .. }));
    }
}
