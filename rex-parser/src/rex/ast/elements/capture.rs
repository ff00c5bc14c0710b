//! Capture: a parenthesized group and its `(?...` extension forms
//!
//! A `(` followed by `?` dispatches over the extension sub-grammars in the
//! fixed priority order laid out in [`grammar`](crate::rex::parsing::grammar):
//! named, balancing, non-capturing, inline options, lookaround,
//! non-backtracking, conditional. The first match wins; each except inline
//! options (which has no body) and the conditional (which owns its own
//! closing parens) recurses into an expression for its body and then
//! requires the closing `)`.
//!
//! Without a `?` it is a plain capture, described as "Capture" - or
//! "Non-capturing Group" when explicit-capture mode is active, since the
//! engine would not number it then.

use crate::rex::ast::elements::{Conditional, Expression};
use crate::rex::ast::error::{ParseError, ParseResult};
use crate::rex::parsing::buffer::PatternBuffer;
use crate::rex::parsing::grammar;

/// What a capture owns: nothing (inline options), an expression, or a
/// conditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureBody {
    None,
    Expression(Expression),
    Conditional(Conditional),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    description: String,
    body: CaptureBody,
}

impl Capture {
    /// Parse a group starting at `(`.
    ///
    /// Fails with [`ParseError::UnterminatedGroup`] (pointing at this
    /// group's open paren) when the closing `)` is missing, and with
    /// [`ParseError::UnrecognizedCapture`] when a `(?` matches none of the
    /// extension sub-grammars.
    pub fn parse(buffer: &mut PatternBuffer) -> ParseResult<Capture> {
        let start = buffer.offset();
        buffer.advance(); // eat '('

        // a group is never part of a literal run
        buffer.clear_series();

        let capture = if buffer.current()? == '?' {
            Self::parse_extension(buffer, start)?
        } else {
            Self::parse_plain(buffer, start)?
        };

        buffer.register_span(capture.describe(0), start, buffer.offset() - 1, false);
        Ok(capture)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn body(&self) -> &CaptureBody {
        &self.body
    }

    pub fn describe(&self, indent: usize) -> String {
        match &self.body {
            CaptureBody::None => self.description.clone(),
            CaptureBody::Expression(expression) => format!(
                "{}\n{}{}End Capture",
                self.description,
                expression.describe(indent + 2),
                " ".repeat(indent)
            ),
            CaptureBody::Conditional(conditional) => {
                format!("{}\n{}", self.description, conditional.describe(indent + 2))
            }
        }
    }

    fn parse_plain(buffer: &mut PatternBuffer, start: usize) -> ParseResult<Capture> {
        let description = if buffer.explicit_capture() {
            "Non-capturing Group"
        } else {
            "Capture"
        };
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Capture {
            description: description.to_string(),
            body: CaptureBody::Expression(expression),
        })
    }

    fn parse_extension(buffer: &mut PatternBuffer, start: usize) -> ParseResult<Capture> {
        if let Some(capture) = Self::check_named(buffer, start)? {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_balancing(buffer, start)? {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_non_capturing(buffer, start)? {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_inline_options(buffer) {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_lookaround(buffer, start)? {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_non_backtracking(buffer, start)? {
            return Ok(capture);
        }
        if let Some(capture) = Self::check_conditional(buffer)? {
            return Ok(capture);
        }
        Err(ParseError::UnrecognizedCapture {
            rest: buffer.remaining(),
        })
    }

    /// `?<Name>` / `?'Name'`
    fn check_named(buffer: &mut PatternBuffer, start: usize) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::NAMED_GROUP.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let description = format!("Capture to <{}>", &caps["name"]);
        advance_to_rest(buffer, &rest, &caps);
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Some(Capture {
            description,
            body: CaptureBody::Expression(expression),
        }))
    }

    /// `?<Name1-Name2>` / `?'Name1-Name2'`
    fn check_balancing(buffer: &mut PatternBuffer, start: usize) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::BALANCING_GROUP.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let description = format!("Balancing Group <{}>-<{}>", &caps["name1"], &caps["name2"]);
        advance_to_rest(buffer, &rest, &caps);
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Some(Capture {
            description,
            body: CaptureBody::Expression(expression),
        }))
    }

    /// `?:`
    fn check_non_capturing(
        buffer: &mut PatternBuffer,
        start: usize,
    ) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::NON_CAPTURING_GROUP.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        advance_to_rest(buffer, &rest, &caps);
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Some(Capture {
            description: "Non-capturing Group".to_string(),
            body: CaptureBody::Expression(expression),
        }))
    }

    /// `?imnsx-imnsx:` - consumes through the colon, owns no body.
    fn check_inline_options(buffer: &mut PatternBuffer) -> Option<Capture> {
        let rest = buffer.remaining();
        let caps = grammar::INLINE_OPTIONS.captures(&rest)?;

        let option = &caps["options"];
        let name = grammar::OPTION_NAMES.get(option).copied().unwrap_or("");
        let description = format!("Set options to {}", name);
        let end = caps.get(0).map(|m| m.end()).unwrap_or(0);
        buffer.advance_over(&rest[..end]);
        Some(Capture {
            description,
            body: CaptureBody::None,
        })
    }

    /// `?=` `?!` `?<=` `?<!`
    fn check_lookaround(buffer: &mut PatternBuffer, start: usize) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::LOOKAROUND.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        let description = match &caps["assertion"] {
            "=" => "zero-width positive lookahead",
            "!" => "zero-width negative lookahead",
            "<=" => "zero-width positive lookbehind",
            _ => "zero-width negative lookbehind",
        };
        advance_to_rest(buffer, &rest, &caps);
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Some(Capture {
            description: description.to_string(),
            body: CaptureBody::Expression(expression),
        }))
    }

    /// `?>`
    fn check_non_backtracking(
        buffer: &mut PatternBuffer,
        start: usize,
    ) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::NON_BACKTRACKING_GROUP.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        advance_to_rest(buffer, &rest, &caps);
        let expression = Expression::parse(buffer)?;
        buffer.expect_closing_paren(start)?;
        Ok(Some(Capture {
            description: "Non-backtracking subexpression".to_string(),
            body: CaptureBody::Expression(expression),
        }))
    }

    /// `?(` - the conditional owns everything from its condition through
    /// the group's closing paren, so no paren check happens here.
    fn check_conditional(buffer: &mut PatternBuffer) -> ParseResult<Option<Capture>> {
        let rest = buffer.remaining();
        let caps = match grammar::CONDITIONAL_GROUP.captures(&rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };

        advance_to_rest(buffer, &rest, &caps);
        let conditional = Conditional::parse(buffer)?;
        Ok(Some(Capture {
            description: "Conditional Subexpression".to_string(),
            body: CaptureBody::Conditional(conditional),
        }))
    }
}

/// Advance the buffer to the start of the `rest` capture group, i.e. over
/// the extension's introducer syntax.
fn advance_to_rest(buffer: &mut PatternBuffer, rest: &str, caps: &regex::Captures<'_>) {
    let index = caps.name("rest").map(|m| m.start()).unwrap_or(0);
    buffer.advance_over(&rest[..index]);
}
