//! Transition labels and the label-matching predicate.

use std::collections::BTreeSet;

/// Escape-class labels (`\d`, `\w`, `\s`, `\z`).
///
/// Class predicates are evaluated against the token's *original* text, not
/// against the reading character being consumed: `\z` should match the
/// character 中 itself even while the engine is partway through its reading
/// "zhong".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `\d` — decimal digits.
    Digit,
    /// `\w` — ASCII alphanumerics.
    Word,
    /// `\s` — whitespace.
    Space,
    /// `\z` — a single CJK ideograph (U+4E00..=U+9FFF).
    Han,
}

impl CharClass {
    /// Evaluate the class against the original token text.
    ///
    /// Whole-input tokens carry multi-character originals; Digit/Word/Space
    /// require every character to qualify, Han requires exactly one.
    pub fn matches(self, original: &str) -> bool {
        match self {
            CharClass::Digit => {
                !original.is_empty() && original.chars().all(|c| c.is_ascii_digit())
            }
            CharClass::Word => {
                !original.is_empty() && original.chars().all(|c| c.is_ascii_alphanumeric())
            }
            CharClass::Space => !original.is_empty() && original.chars().all(char::is_whitespace),
            CharClass::Han => {
                let mut chars = original.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ('\u{4e00}'..='\u{9fff}').contains(&c),
                    _ => false,
                }
            }
        }
    }
}

/// Input-boundary markers produced by the `^` and `$` anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// `^` — start of input.
    Start,
    /// `$` — end of input.
    End,
}

/// A transition label: the condition under which an edge consumes one
/// character of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Matches exactly this character.
    Char(char),
    /// `[...]` — matches any member of the set.
    Set(BTreeSet<char>),
    /// `[^...]` — matches any character not in the set.
    NegSet(BTreeSet<char>),
    /// `.` — matches any character. Boundaries never reach the character
    /// path, so no carve-out is needed for them here.
    Any,
    /// `\d` / `\w` / `\s` / `\z`, evaluated against the original text.
    Class(CharClass),
    /// `^` / `$`, traversed only by the engine's boundary steps.
    Boundary(Boundary),
    /// An escape with no assigned meaning, kept backslash-and-all. A
    /// multi-character label can never match a single input character, so
    /// the edge is inert rather than silently rewritten.
    Verbatim(String),
}

impl Label {
    /// Does consuming `candidate` satisfy this label, given the token's
    /// original text?
    pub fn matches(&self, original: &str, candidate: char) -> bool {
        match self {
            Label::Char(c) => candidate == *c,
            Label::Set(set) => set.contains(&candidate),
            Label::NegSet(set) => !set.contains(&candidate),
            Label::Any => true,
            Label::Class(class) => class.matches(original),
            Label::Boundary(_) => false,
            Label::Verbatim(text) => {
                let mut chars = text.chars();
                chars.next() == Some(candidate) && chars.next().is_none()
            }
        }
    }
}
