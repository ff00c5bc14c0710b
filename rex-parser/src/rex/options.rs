//! Option flags recognized by the explainer.
//!
//! Only two flags alter what the parser actually does:
//!
//! - `ignore_pattern_whitespace` changes tokenization: unescaped whitespace
//!   is skipped and `#` starts a comment that runs to the end of the line.
//! - `explicit_capture` changes the wording of plain `(...)` groups, which
//!   are described as non-capturing when the flag is on.
//!
//! The remaining flags mirror the classic engine options. They are accepted
//! so a caller can carry one option set for both the explainer and the
//! execution engine, but they have no effect on parsing or description.

use serde::{Deserialize, Serialize};

/// Option set for a single parse. Construct with struct literal syntax or
/// start from `Default` and flip the flags you need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainOptions {
    /// Skip unescaped whitespace and `#` comments while parsing.
    pub ignore_pattern_whitespace: bool,
    /// Describe plain groups as non-capturing.
    pub explicit_capture: bool,
    /// Accepted for the execution engine; no effect on the explanation.
    pub ignore_case: bool,
    /// Accepted for the execution engine; no effect on the explanation.
    pub multiline: bool,
    /// Accepted for the execution engine; no effect on the explanation.
    pub singleline: bool,
    /// Accepted for the execution engine; no effect on the explanation.
    pub right_to_left: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_flags_off() {
        let options = ExplainOptions::default();
        assert!(!options.ignore_pattern_whitespace);
        assert!(!options.explicit_capture);
        assert!(!options.ignore_case);
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = ExplainOptions {
            ignore_pattern_whitespace: true,
            explicit_capture: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: ExplainOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
