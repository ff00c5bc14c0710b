//! Node tree definitions for explained patterns
//!
//! A parsed pattern is a tree over a closed set of node kinds (see
//! [`elements`]). Each kind owns both sides of its job: its `parse`
//! constructor is the parsing rule for its syntax, and its `describe`
//! method is the renderer for its explanation line(s).
//!
//! Spans
//!
//!     Every constructor, on success, leaves the buffer positioned one past
//!     the last character it consumed and registers exactly one span
//!     covering its consumed range. Children register before their parent,
//!     so spans nest: a lookup at any offset can always pick the shortest
//!     (innermost) covering span. See [`crate::rex::parsing::span`].
//!
//! Failure modes
//!
//!     Structural failures ([`error::ParseError`]) abort the parse with no
//!     partial tree. Two constructs degrade instead of aborting: a character
//!     class missing its `]` and a quantifier missing its `}` produce nodes
//!     whose description is the diagnostic text itself. That asymmetry is
//!     inherited behavior and is kept deliberately.

pub mod elements;
pub mod error;

pub use elements::{
    Alternate, Capture, CaptureBody, CharClass, Character, Conditional, Expression, Node,
    Quantifier, QuantifierBound,
};
pub use error::{ParseError, ParseResult};
