//! Tests for the label-matching predicate.

use std::collections::BTreeSet;

use crate::label::{Boundary, CharClass, Label};

fn set(chars: &str) -> BTreeSet<char> {
    chars.chars().collect()
}

#[test]
fn char_label_matches_only_itself() {
    let label = Label::Char('a');
    assert!(label.matches("a", 'a'));
    assert!(!label.matches("a", 'b'));
}

#[test]
fn set_label_is_membership() {
    let label = Label::Set(set("abc"));
    assert!(label.matches("x", 'b'));
    assert!(!label.matches("x", 'd'));
}

#[test]
fn negated_set_is_complement() {
    let label = Label::NegSet(set("z"));
    assert!(label.matches("中", 'h'));
    assert!(!label.matches("中", 'z'));
}

#[test]
fn empty_negated_set_matches_everything() {
    let label = Label::NegSet(BTreeSet::new());
    assert!(label.matches("x", 'q'));
}

#[test]
fn any_matches_whitespace_and_punctuation() {
    assert!(Label::Any.matches("x", ' '));
    assert!(Label::Any.matches("x", '!'));
    assert!(Label::Any.matches("中", 'z'));
}

#[test]
fn class_labels_look_at_the_original() {
    // The reading character is irrelevant for classes.
    let han = Label::Class(CharClass::Han);
    assert!(han.matches("中", 'z'));
    assert!(!han.matches("a", 'z'));

    let digit = Label::Class(CharClass::Digit);
    assert!(digit.matches("3", 'x'));
    assert!(!digit.matches("中", 'x'));
}

#[test]
fn char_classes() {
    assert!(CharClass::Digit.matches("42"));
    assert!(!CharClass::Digit.matches("4a"));
    assert!(!CharClass::Digit.matches(""));

    assert!(CharClass::Word.matches("a9"));
    assert!(!CharClass::Word.matches("音"));

    assert!(CharClass::Space.matches(" \t"));
    assert!(!CharClass::Space.matches("a"));

    assert!(CharClass::Han.matches("中"));
    assert!(CharClass::Han.matches("\u{4e00}"));
    assert!(CharClass::Han.matches("\u{9fff}"));
    assert!(!CharClass::Han.matches("中国"));
    assert!(!CharClass::Han.matches("a"));
    assert!(!CharClass::Han.matches("\u{3400}"));
}

#[test]
fn boundary_labels_never_match_characters() {
    assert!(!Label::Boundary(Boundary::Start).matches("a", 'a'));
    assert!(!Label::Boundary(Boundary::End).matches("a", '$'));
}

#[test]
fn verbatim_label_matches_single_char_text_only() {
    // Unrecognized escapes keep their backslash and can never be satisfied
    // by a single input character.
    assert!(!Label::Verbatim("\\q".to_string()).matches("x", 'q'));
    assert!(!Label::Verbatim("\\q".to_string()).matches("x", '\\'));
    assert!(Label::Verbatim("q".to_string()).matches("x", 'q'));
}
