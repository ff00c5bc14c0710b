//! Micro-grammar definitions
//!
//! Several constructs carry their own little grammar inside the main
//! character-dispatch parse: the `(?...` capture extensions, the escape
//! forms, the `[...]` class body and the `{n,m}` bound. Each is defined
//! here as a lazily compiled regex over the buffer's remaining text,
//! together with the static description tables.
//!
//! # Capture extension order
//!
//! The `(?` sub-grammars are tried in a fixed priority order for correct
//! disambiguation; the first match wins:
//!
//! 1. named group - `?<name>` / `?'name'`
//! 2. balancing group - `?<name1-name2>`
//! 3. non-capturing group - `?:`
//! 4. inline options - `?imnsx-:` (no body of its own)
//! 5. lookaround - `?=` `?!` `?<=` `?<!`
//! 6. non-backtracking subexpression - `?>`
//! 7. conditional - `?(`
//!
//! Named must precede balancing only in the sense that both accept the
//! `?<...>` shell; the name character classes keep them disjoint.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Named group: `?<Name>rest` or `?'Name'rest`. The `rest` capture marks
/// where the group body starts.
pub static NAMED_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?[<'](?P<name>[a-zA-Z0-9]+?)[>'](?P<rest>.+)").unwrap());

/// Balancing group: `?<Name1-Name2>rest` or `?'Name1-Name2'rest`.
pub static BALANCING_GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\?[<|'](?P<name1>[a-zA-Z]+?)-(?P<name2>[a-zA-Z]+?)[>|'](?P<rest>.+)").unwrap()
});

/// Non-capturing group: `?:rest`.
pub static NON_CAPTURING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?:(?P<rest>.+)").unwrap());

/// Inline option setting: `?imnsx-imnsx:`. Matches through the colon; an
/// inline-options group has no body expression.
pub static INLINE_OPTIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?(?P<options>[imnsx-]+):").unwrap());

/// Lookaround assertion: `?=`, `?!`, `?<=` or `?<!`.
pub static LOOKAROUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?(?P<assertion><=|<!|=|!)(?P<rest>.+)").unwrap());

/// Non-backtracking subexpression: `?>rest`.
pub static NON_BACKTRACKING_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?>(?P<rest>.+)").unwrap());

/// Conditional subexpression: `?(rest` - the rest (condition, branches and
/// both closing parens) is owned by the conditional parser.
pub static CONDITIONAL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\?\((?P<rest>.+)").unwrap());

/// Back reference escape: `k<name>`, matched at the escape letter.
pub static BACK_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^k<(?P<name>.+?)>").unwrap());

/// Character class body: optional negation marker, shortest body, closing
/// bracket. Searched (not anchored) so the class parser can consume through
/// the first closing bracket it can make sense of.
pub static CHARACTER_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<negated>\^?)(?P<body>.+?)\]").unwrap());

/// Quantifier bound: `n}`, `n,}` or `n,m}`, matched after the `{`.
pub static QUANTIFIER_BOUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<min>\d+)(?P<comma>,?)(?P<max>\d*)\}").unwrap());

/// Descriptions for single-letter escapes: character escapes, shorthand
/// classes and anchors. An unmapped letter falls through to the back
/// reference / unicode / control / hex forms, and finally to a literal.
pub static ESCAPE_DESCRIPTIONS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ('a', "A bell (alarm) \\u0007 "),
        ('b', "Word boundary between //w and //W"),
        ('B', "Not at a word boundary between //w and //W"),
        ('t', "A tab \\u0009 "),
        ('r', "A carriage return \\u000D "),
        ('v', "A vertical tab \\u000B "),
        ('f', "A form feed \\u000C "),
        ('n', "A new line \\u000A "),
        ('e', "An escape \\u001B "),
        ('w', "Any word character "),
        ('W', "Any non-word character "),
        ('s', "Any whitespace character "),
        ('S', "Any non-whitespace character "),
        ('d', "Any digit "),
        ('D', "Any non-digit "),
        ('A', "Anchor to start of string (ignore multiline)"),
        ('Z', "Anchor to end of string or before \\n (ignore multiline)"),
        ('z', "Anchor to end of string (ignore multiline)"),
    ])
});

/// Wordings for inline option strings. Looked up whole: an option string
/// with no entry (a combination, say `im`) renders as an empty name.
pub static OPTION_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("i", "Ignore Case"),
        ("-i", "Ignore Case Off"),
        ("m", "Multiline"),
        ("-m", "Multiline Off"),
        ("n", "Explicit Capture"),
        ("-n", "Explicit Capture Off"),
        ("s", "Singleline"),
        ("-s", "Singleline Off"),
        ("x", "Ignore Whitespace"),
        ("-x", "Ignore Whitespace Off"),
    ])
});
