//! # rex
//!
//! A parser and natural-language explainer for regular expression patterns.
//!
//! The library parses a pattern string into a tree of semantic nodes and
//! renders that tree as an indented, human-readable explanation of what the
//! pattern does. Alongside the tree it maintains a span table mapping every
//! offset of the original pattern text back to the innermost syntax node that
//! produced it, which is what "click the source, highlight the explanation"
//! tooling is built on.
//!
//! The library never executes a pattern. Matching, replacement and splitting
//! are the business of a real regex engine; callers that want to run the
//! pattern compile the same text with one independently. A pattern can fail
//! to compile in an engine while still being describable here, and vice
//! versa.

pub mod rex;

pub use rex::{explain, Explanation};
