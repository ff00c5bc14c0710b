//! Quantifier: a `{n}`, `{n,}` or `{n,m}` bound
//!
//! Like the character class, a quantifier missing its `}` degrades rather
//! than aborting: the node is produced with the diagnostic as its
//! description and no non-greedy check is attempted.

use crate::rex::ast::error::ParseResult;
use crate::rex::parsing::buffer::PatternBuffer;
use crate::rex::parsing::grammar;

/// The three shapes of a brace bound. Numbers are kept as written (leading
/// zeros and all) so descriptions echo the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantifierBound {
    Exactly(String),
    AtLeast(String),
    Between(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantifier {
    /// `None` when the closing `}` was missing.
    bound: Option<QuantifierBound>,
    non_greedy: bool,
}

impl Quantifier {
    /// Parse `{`, then look for `n}`, `n,}` or `n,m}`, then an optional
    /// trailing `?`.
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<Quantifier> {
        let start = buffer.offset();
        buffer.advance(); // eat '{'

        let rest = buffer.remaining();
        let quantifier = match grammar::QUANTIFIER_BOUND.captures(&rest) {
            Some(caps) => {
                let min = caps["min"].to_string();
                let bound = if !caps["max"].is_empty() {
                    QuantifierBound::Between(min, caps["max"].to_string())
                } else if !caps["comma"].is_empty() {
                    QuantifierBound::AtLeast(min)
                } else {
                    QuantifierBound::Exactly(min)
                };
                let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
                buffer.advance_over(&rest[..end]);

                let non_greedy = buffer.peek() == Some('?');
                if non_greedy {
                    buffer.advance();
                }
                Quantifier {
                    bound: Some(bound),
                    non_greedy,
                }
            }
            None => Quantifier {
                bound: None,
                non_greedy: false,
            },
        };

        buffer.register_span(quantifier.describe(0), start, buffer.offset() - 1, false);
        Ok(quantifier)
    }

    pub fn non_greedy(&self) -> bool {
        self.non_greedy
    }

    pub fn describe(&self, _indent: usize) -> String {
        let mut text = match &self.bound {
            Some(QuantifierBound::Between(min, max)) => {
                format!("At least {}, but not more than {} times", min, max)
            }
            Some(QuantifierBound::AtLeast(min)) => format!("At least {} times", min),
            Some(QuantifierBound::Exactly(min)) => format!("Exactly {} times", min),
            None => return "missing '}' in quantifier".to_string(),
        };
        if self.non_greedy {
            text.push_str(" (non-greedy)");
        }
        text
    }
}
