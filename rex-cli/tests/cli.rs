use assert_cmd::Command;
use predicates::prelude::*;

fn rex() -> Command {
    Command::cargo_bin("rex").unwrap()
}

#[test]
fn explains_a_literal_pattern() {
    rex()
        .arg("abc")
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn explains_a_named_capture() {
    rex()
        .arg(r"(?<year>\d{4})")
        .assert()
        .success()
        .stdout("Capture to <year>\n  Any digit \n  Exactly 4 times\nEnd Capture\n");
}

#[test]
fn no_arguments_prints_help_and_fails() {
    rex()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn whitespace_mode_skips_comments() {
    rex()
        .args(["-x", "a b # note"])
        .assert()
        .success()
        .stdout("ab\n");
}

#[test]
fn explicit_capture_mode_changes_the_group_wording() {
    rex()
        .args(["-n", "(ab)"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Non-capturing Group"));
}

#[test]
fn at_prints_the_innermost_node() {
    rex()
        .args([r"(?<year>\d{4})", "--at", "10"])
        .assert()
        .success()
        .stdout("[10..12] Exactly 4 times\n");
}

#[test]
fn at_past_the_end_fails() {
    rex()
        .args(["abc", "--at", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No node covers offset 9"));
}

#[test]
fn json_format_carries_text_and_spans() {
    rex()
        .args(["a|b", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"explanation\""))
        .stdout(predicate::str::contains("\"label\": \"or\""));
}

#[test]
fn at_with_json_format_prints_the_entry() {
    rex()
        .args(["a|b", "--at", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"or\""))
        .stdout(predicate::str::contains("\"start\": 1"));
}

#[test]
fn unknown_format_is_rejected() {
    rex()
        .args(["abc", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'yaml' not supported"));
}

#[test]
fn unterminated_group_fails_with_a_caret() {
    rex()
        .arg("ab(cd")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing closing ')' in group opened at offset 2",
        ))
        .stderr(predicate::str::contains("  ab(cd\n    ^"));
}

#[test]
fn check_reports_the_engine_verdict() {
    rex()
        .args(["a+b", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("engine: ok"));
}

#[test]
fn check_can_disagree_with_the_explanation() {
    // lookbehind explains fine but the delegated engine rejects it
    rex()
        .args(["(?<=a)b", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("engine: error:"));
}
