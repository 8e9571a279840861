//! Human-readable automaton dump for debugging and tests.
//!
//! One block per state in allocation order: a header line with start/accept
//! markers, an `eps` line when the state has epsilon successors, then one
//! line per labeled edge in insertion order. Output is deterministic, which
//! is what makes it snapshot-testable.

use crate::automaton::{Nfa, StateId};
use crate::label::{Boundary, CharClass, Label};

/// Render the automaton as text.
pub fn dump(nfa: &Nfa) -> String {
    let mut lines = Vec::new();

    for id in nfa.state_ids() {
        let mut header = id.to_string();
        if id == nfa.start() {
            header.push_str(" start");
        }
        if nfa.is_accept(id) {
            header.push_str(" accept");
        }
        lines.push(header);

        let eps = nfa.eps_successors(id);
        if !eps.is_empty() {
            lines.push(format!("  eps -> {}", join_ids(eps)));
        }
        for (label, targets) in nfa.edges(id) {
            lines.push(format!("  {} -> {}", label_text(label), join_ids(targets)));
        }
    }

    lines.join("\n")
}

fn join_ids(ids: &[StateId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn label_text(label: &Label) -> String {
    match label {
        Label::Char(c) => format!("'{c}'"),
        Label::Set(set) => format!("[{}]", set.iter().collect::<String>()),
        Label::NegSet(set) => format!("[^{}]", set.iter().collect::<String>()),
        Label::Any => "any".to_string(),
        Label::Class(CharClass::Digit) => r"\d".to_string(),
        Label::Class(CharClass::Word) => r"\w".to_string(),
        Label::Class(CharClass::Space) => r"\s".to_string(),
        Label::Class(CharClass::Han) => r"\z".to_string(),
        Label::Boundary(Boundary::Start) => "^".to_string(),
        Label::Boundary(Boundary::End) => "$".to_string(),
        Label::Verbatim(text) => format!("'{text}'"),
    }
}
