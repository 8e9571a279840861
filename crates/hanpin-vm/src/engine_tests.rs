//! Behavioral tests for the matching engine, driven through compiled
//! patterns.

use hanpin_compiler::compile;
use hanpin_nfa::{StateSet, Token};

use crate::Matcher;

/// One token per character, matched only as itself.
fn literal_tokens(text: &str) -> Vec<Token> {
    text.chars().map(|c| Token::literal(c.to_string())).collect()
}

fn is_match(pattern: &str, tokens: &[Token]) -> bool {
    let nfa = compile(pattern);
    Matcher::new(&nfa).is_match(tokens)
}

fn matches_text(pattern: &str, text: &str) -> bool {
    is_match(pattern, &literal_tokens(text))
}

/// A token carrying the reading set 中 would get with initials and fuzzy
/// variants enabled.
fn zhong_token() -> Token {
    Token::new(
        "中",
        ["zhong", "zh", "zong", "z", "中"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

#[test]
fn substring_search_is_the_default() {
    assert!(matches_text("ell", "hello"));
    assert!(matches_text("hello", "hello"));
    assert!(matches_text("h", "hello"));
    assert!(!matches_text("heo", "hello"));
}

#[test]
fn empty_pattern_matches_everything() {
    assert!(matches_text("", "abc"));
    assert!(is_match("", &[]));
}

#[test]
fn empty_input() {
    assert!(is_match(".*", &[]));
    assert!(!is_match("yin", &[]));
}

#[test]
fn anchors_pin_the_match() {
    assert!(matches_text("^ab", "abc"));
    assert!(!matches_text("^bc", "abc"));
    assert!(matches_text("bc$", "abc"));
    assert!(!matches_text("ab$", "abc"));
    assert!(matches_text("^abc$", "abc"));
    assert!(!matches_text("^abc$", "abcd"));
    assert!(!matches_text("^abc$", "xabc"));
}

#[test]
fn anchors_on_empty_input() {
    assert!(matches_text("^$", ""));
    assert!(!matches_text("^$", "a"));
}

#[test]
fn wildcard_consumes_exactly_one_character() {
    assert!(matches_text("a.c", "abc"));
    assert!(matches_text("a.c", "a c"));
    assert!(!matches_text("^a.c$", "ac"));
    // `.` cannot stand in for the end of input.
    assert!(!matches_text("a.", "a"));
    assert!(!matches_text(".", ""));
}

#[test]
fn alternation_branches() {
    assert!(matches_text("ab|cd", "xcdy"));
    assert!(matches_text("ab|cd", "zab"));
    assert!(!matches_text("ab|cd", "acbd"));
}

#[test]
fn range_quantifiers_agree_with_their_operator_forms() {
    for text in ["", "a", "aa", "aaaaa"] {
        assert_eq!(matches_text("^a{0,}$", text), matches_text("^a*$", text));
        assert_eq!(matches_text("^a{1,}$", text), matches_text("^a+$", text));
        assert_eq!(matches_text("^a{0,1}$", text), matches_text("^a?$", text));
    }
}

#[test]
fn exact_counts_do_not_share_state_between_repetitions() {
    assert!(!matches_text("^a{3}$", "a"));
    assert!(!matches_text("^a{3}$", "aa"));
    assert!(matches_text("^a{3}$", "aaa"));
    assert!(!matches_text("^a{3}$", "aaaa"));
}

#[test]
fn bounded_ranges() {
    assert!(!matches_text("^a{2,4}$", "a"));
    assert!(matches_text("^a{2,4}$", "aa"));
    assert!(matches_text("^a{2,4}$", "aaa"));
    assert!(matches_text("^a{2,4}$", "aaaa"));
    assert!(!matches_text("^a{2,4}$", "aaaaa"));
}

#[test]
fn unbounded_ranges() {
    assert!(!matches_text("^a{2,}$", "a"));
    assert!(matches_text("^a{2,}$", "aa"));
    assert!(matches_text("^a{2,}$", "aaaaaa"));
}

#[test]
fn zero_count_elides_the_atom() {
    assert!(matches_text("^a{0}b$", "b"));
    assert!(!matches_text("^a{0}b$", "ab"));
}

#[test]
fn match_can_span_tokens() {
    let tokens = [
        Token::new("音", vec!["yin".to_string()]),
        Token::new("乐", vec!["yue".to_string(), "le".to_string()]),
    ];
    assert!(is_match("yinyue", &tokens));
    assert!(is_match("yinle", &tokens));
    assert!(!is_match("yueyin", &tokens));
}

#[test]
fn match_starts_at_a_reading_boundary() {
    let tokens = [
        Token::new("音", vec!["yin".to_string()]),
        Token::new("乐", vec!["yue".to_string()]),
    ];
    // A match in progress may continue through a reading, but the seed is
    // only re-introduced between tokens, so it cannot begin mid-reading.
    assert!(!is_match("inyue", &tokens));
    assert!(!is_match("nyu", &tokens));
}

#[test]
fn early_accept_ignores_later_tokens() {
    // The second token offers nothing the pattern could consume; the match
    // completes inside the first token and never looks at it.
    let tokens = [zhong_token(), Token::literal("!")];
    assert!(is_match("zhong", &tokens));
    assert!(is_match("zh", &tokens));
}

#[test]
fn any_reading_of_a_token_can_carry_the_match() {
    let tokens = [zhong_token()];
    assert!(is_match("zong", &tokens));
    assert!(is_match("z", &tokens));
    assert!(is_match("中", &tokens));
    assert!(is_match("zh.ng", &tokens));
    assert!(!is_match("hong", &tokens));
}

#[test]
fn negated_class_rejects_the_only_viable_readings() {
    assert!(!is_match("[^z]hong", &[zhong_token()]));
    assert!(is_match("[^x]hong", &[zhong_token()]));
}

#[test]
fn escape_classes_see_the_original_character() {
    assert!(is_match(r"\z", &[zhong_token()]));
    assert!(!is_match(r"\z", &literal_tokens("abc")));
    assert!(is_match(r"\d", &literal_tokens("a3c")));
    assert!(!is_match(r"\d", &literal_tokens("abc")));
    assert!(is_match(r"\s", &literal_tokens("a c")));
    assert!(is_match(r"\w", &literal_tokens("!x!")));
    assert!(!is_match(r"\w", &literal_tokens("!!")));
}

#[test]
fn advance_steps_character_by_character() {
    let nfa = compile("ab");
    let matcher = Matcher::new(&nfa);

    let mut start = StateSet::new();
    start.insert(nfa.start());
    let seed = nfa.epsilon_closure(&start);

    let after = matcher.advance(&seed, "a", "a");
    assert!(!after.is_empty());

    let dead = matcher.advance(&after, "z", "z");
    assert!(dead.is_empty());
}
