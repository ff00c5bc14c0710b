//! Main module for the rex library functionality

pub mod ast;
pub mod options;
pub mod parsing;

pub use ast::elements::{
    Alternate, Capture, CaptureBody, CharClass, Character, Conditional, Expression, Node,
    Quantifier, QuantifierBound,
};
pub use ast::error::{ParseError, ParseResult};
pub use options::ExplainOptions;
pub use parsing::buffer::PatternBuffer;
pub use parsing::span::{SpanEntry, SpanTable};

/// The result of explaining a pattern: the rendered explanation text plus the
/// span table for offset-to-node lookups.
#[derive(Debug, Clone)]
pub struct Explanation {
    text: String,
    spans: SpanTable,
}

impl Explanation {
    /// The rendered explanation, newline-delimited with two-space indents per
    /// nesting level.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Find the innermost node covering `offset` in the original pattern.
    pub fn lookup(&self, offset: usize) -> Option<&SpanEntry> {
        self.spans.lookup(offset)
    }

    /// All registered spans, in registration order.
    pub fn spans(&self) -> &SpanTable {
        &self.spans
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse `pattern` and render its explanation.
///
/// This is the whole pipeline: build a [`PatternBuffer`] over the text, parse
/// an [`Expression`] out of it (each node registers its source span as it is
/// constructed), then render the tree at indent level zero.
///
/// Structural failures (an unterminated group, reading past the end of the
/// pattern, an unrecognizable `(?...` form) abort with a [`ParseError`];
/// there is no partial result. A malformed character class or quantifier
/// does not abort: the node is produced with a diagnostic description
/// instead (see the element modules).
pub fn explain(pattern: &str, options: ExplainOptions) -> ParseResult<Explanation> {
    let mut buffer = PatternBuffer::with_options(pattern, options);
    let expression = Expression::parse(&mut buffer)?;
    let text = expression.describe(0);
    Ok(Explanation {
        text,
        spans: buffer.into_spans(),
    })
}
