//! Escape-form wordings, table-driven

use rex_parser::rex::{explain, ExplainOptions};
use rstest::rstest;

fn text_of(pattern: &str) -> String {
    explain(pattern, ExplainOptions::default())
        .unwrap()
        .text()
        .to_string()
}

#[rstest]
#[case(r"\a", "A bell (alarm) \\u0007 ")]
#[case(r"\b", "Word boundary between //w and //W")]
#[case(r"\B", "Not at a word boundary between //w and //W")]
#[case(r"\t", "A tab \\u0009 ")]
#[case(r"\r", "A carriage return \\u000D ")]
#[case(r"\v", "A vertical tab \\u000B ")]
#[case(r"\f", "A form feed \\u000C ")]
#[case(r"\n", "A new line \\u000A ")]
#[case(r"\e", "An escape \\u001B ")]
#[case(r"\w", "Any word character ")]
#[case(r"\W", "Any non-word character ")]
#[case(r"\s", "Any whitespace character ")]
#[case(r"\S", "Any non-whitespace character ")]
#[case(r"\d", "Any digit ")]
#[case(r"\D", "Any non-digit ")]
#[case(r"\A", "Anchor to start of string (ignore multiline)")]
#[case(r"\Z", "Anchor to end of string or before \\n (ignore multiline)")]
#[case(r"\z", "Anchor to end of string (ignore multiline)")]
fn letter_escapes(#[case] pattern: &str, #[case] wording: &str) {
    assert_eq!(text_of(pattern), format!("{}\n", wording));
}

#[rstest]
#[case(r"\k<name>", "Backreference to match: name")]
#[case(r"\u0041", "Unicode 0041")]
#[case(r"\cC", "CTRL-C")]
#[case(r"\x41", "Hex 41")]
fn structured_escapes(#[case] pattern: &str, #[case] wording: &str) {
    assert_eq!(text_of(pattern), format!("{}\n", wording));
}

#[rstest]
#[case(r"\.", ".")]
#[case(r"\(", "(")]
#[case(r"\\", "\\")]
#[case(r"\q", "q")]
fn unmapped_escapes_fall_through_to_the_literal(#[case] pattern: &str, #[case] literal: &str) {
    assert_eq!(text_of(pattern), format!("{}\n", literal));
}

#[rstest]
#[case(r"a\d", "a\nAny digit \n")]
#[case(r"\.b", ".b\n")]
fn mapped_escapes_break_literal_runs_and_unmapped_ones_join_them(
    #[case] pattern: &str,
    #[case] rendered: &str,
) {
    assert_eq!(text_of(pattern), rendered);
}

#[test]
fn escaped_space_stays_in_the_run() {
    assert_eq!(text_of(r"a\ b"), "a b\n");
}

#[test]
fn trailing_backslash_fails() {
    let error = explain(r"ab\", ExplainOptions::default()).unwrap_err();
    assert_eq!(
        error,
        rex_parser::rex::ParseError::UnexpectedEnd
    );
}
