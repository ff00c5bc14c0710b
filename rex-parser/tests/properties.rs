//! Generated-pattern properties
//!
//! A small strategy builds structurally valid patterns (literal runs,
//! groups, alternation, bounds) and checks the parse-wide guarantees:
//! same input gives byte-identical output, and every span stays inside
//! the pattern and contains what it claims to.

use proptest::prelude::*;
use rex_parser::rex::{explain, ExplainOptions};

fn literal_run() -> impl Strategy<Value = String> {
    "[a-z]{1,5}"
}

fn pattern() -> impl Strategy<Value = String> {
    literal_run().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            inner.clone(),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{}|{}", a, b)),
            inner.clone().prop_map(|a| format!("({})", a)),
            inner.clone().prop_map(|a| format!("(?:{})", a)),
            (inner.clone(), 1usize..9, 1usize..9)
                .prop_map(|(a, min, extra)| format!("{}{{{},{}}}", a, min, min + extra)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{}{}", a, b)),
        ]
    })
}

proptest! {
    #[test]
    fn parsing_is_deterministic(pattern in pattern()) {
        let first = explain(&pattern, ExplainOptions::default()).unwrap();
        let second = explain(&pattern, ExplainOptions::default()).unwrap();
        prop_assert_eq!(first.text(), second.text());
        prop_assert_eq!(first.spans().entries(), second.spans().entries());
    }

    #[test]
    fn spans_stay_inside_the_pattern(pattern in pattern()) {
        let explanation = explain(&pattern, ExplainOptions::default()).unwrap();
        let length = pattern.chars().count();
        for entry in explanation.spans().entries() {
            prop_assert!(entry.start <= entry.end);
            prop_assert!(entry.end < length);
        }
    }

    #[test]
    fn lookup_result_contains_the_offset_and_is_minimal(pattern in pattern()) {
        let explanation = explain(&pattern, ExplainOptions::default()).unwrap();
        for offset in 0..pattern.chars().count() {
            if let Some(found) = explanation.lookup(offset) {
                prop_assert!(found.contains(offset));
                let narrowest = explanation
                    .spans()
                    .entries()
                    .iter()
                    .filter(|entry| entry.contains(offset))
                    .map(|entry| entry.length())
                    .min()
                    .unwrap();
                prop_assert_eq!(found.length(), narrowest);
            }
        }
    }

    #[test]
    fn rendered_text_ends_with_a_newline(pattern in pattern()) {
        let explanation = explain(&pattern, ExplainOptions::default()).unwrap();
        prop_assert!(explanation.text().ends_with('\n'));
    }
}
