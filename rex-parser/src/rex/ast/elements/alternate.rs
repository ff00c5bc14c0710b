//! Alternate: the `|` separator
//!
//! Purely a position marker between branches; it never has children. The
//! conditional renderer also keys off it to split the yes branch from the
//! no branch.

use crate::rex::parsing::buffer::PatternBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternate;

impl Alternate {
    /// Register the separator's own position and skip the `|`.
    pub fn parse(buffer: &mut PatternBuffer) -> Alternate {
        let alternate = Alternate;
        buffer.register_span(
            alternate.describe(0),
            buffer.offset(),
            buffer.offset(),
            false,
        );
        buffer.advance();
        alternate
    }

    pub fn describe(&self, indent: usize) -> String {
        format!("{}or", " ".repeat(indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_the_pipe_and_registers_its_position() {
        let mut buffer = PatternBuffer::new("|b");
        Alternate::parse(&mut buffer);
        assert_eq!(buffer.offset(), 1);
        let entry = buffer.lookup(0).unwrap();
        assert_eq!(entry.label, "or");
        assert_eq!((entry.start, entry.end), (0, 0));
    }

    #[test]
    fn describe_carries_its_own_indent() {
        assert_eq!(Alternate.describe(2), "  or");
    }
}
