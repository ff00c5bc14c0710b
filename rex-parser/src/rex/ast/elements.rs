//! The node kinds of an explained pattern
//!
//! One module per kind, following the grammar: the leaf kinds consume a
//! bounded slice of the buffer ([`character`], [`char_class`],
//! [`quantifier`], [`alternate`]), the composite kinds own sub-expressions
//! ([`expression`], [`capture`], [`conditional`]).
//!
//! Each struct's `parse` is the parsing rule for its syntax and its
//! `describe(indent)` is its renderer. [`Node`] closes the set: no syntax
//! form is ever added at runtime, so a plain enum carries the one
//! capability every kind shares.

pub mod alternate;
pub mod capture;
pub mod char_class;
pub mod character;
pub mod conditional;
pub mod expression;
pub mod quantifier;

pub use alternate::Alternate;
pub use capture::{Capture, CaptureBody};
pub use char_class::CharClass;
pub use character::Character;
pub use conditional::Conditional;
pub use expression::Expression;
pub use quantifier::{Quantifier, QuantifierBound};

/// A parsed syntactic unit of the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Expression(Expression),
    Character(Character),
    CharClass(CharClass),
    Quantifier(Quantifier),
    Alternate(Alternate),
    Capture(Capture),
    Conditional(Conditional),
}

impl Node {
    /// Render this node's explanation at the given indent level.
    pub fn describe(&self, indent: usize) -> String {
        match self {
            Node::Expression(expression) => expression.describe(indent),
            Node::Character(character) => character.describe(indent),
            Node::CharClass(char_class) => char_class.describe(indent),
            Node::Quantifier(quantifier) => quantifier.describe(indent),
            Node::Alternate(alternate) => alternate.describe(indent),
            Node::Capture(capture) => capture.describe(indent),
            Node::Conditional(conditional) => conditional.describe(indent),
        }
    }
}
