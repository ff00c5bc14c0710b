//! Parsing support: the pattern cursor, the span index, and the
//! micro-grammar tables.
//!
//! The parser proper lives with the node types in
//! [`crate::rex::ast::elements`]; what is here is the shared state those
//! constructors thread through the recursion ([`buffer::PatternBuffer`]),
//! the offset index it owns ([`span::SpanTable`]), and the lazily compiled
//! sub-grammar regexes and static description tables ([`grammar`]).

pub mod buffer;
pub mod grammar;
pub mod span;

pub use buffer::PatternBuffer;
pub use span::{SpanEntry, SpanTable};
