//! The token-stream matching loop.
//!
//! Search is unanchored by construction: after every token the start
//! state's closure is unioned back into the frontier, so a match is free to
//! begin at any token position. There is no separate anchored mode — `^`
//! and `$` compile to boundary labels, and the engine satisfies them with
//! virtual boundary steps at both ends of every run.

use hanpin_nfa::{Boundary, Label, Nfa, StateSet, Token};

/// Runs one compiled automaton against token streams.
///
/// The matcher borrows the automaton and never mutates it; each run only
/// allocates transient state sets, so one automaton can serve any number of
/// matchers and runs concurrently.
pub struct Matcher<'a> {
    nfa: &'a Nfa,
    seed: StateSet,
}

impl<'a> Matcher<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        let mut start = StateSet::new();
        start.insert(nfa.start());
        let seed = nfa.epsilon_closure(&start);
        Self { nfa, seed }
    }

    /// Does the pattern occur anywhere in `tokens`?
    ///
    /// Per token, every reading advances the frontier independently; the
    /// results are unioned together with the seed closure before the next
    /// token. An accepting state reached mid-token wins immediately —
    /// remaining readings and tokens are not consulted.
    pub fn is_match(&self, tokens: &[Token]) -> bool {
        let mut current = self.seed.clone();

        // Virtual start-of-input step for `^` edges.
        let hits = self.boundary_step(&current, Boundary::Start);
        if self.nfa.contains_accept(&hits) {
            return true;
        }
        current.extend(hits);

        for token in tokens {
            let mut next = StateSet::new();
            for reading in token.readings() {
                let states = self.advance(&current, token.original(), reading);
                if self.nfa.contains_accept(&states) {
                    return true;
                }
                next.extend(states);
            }
            next.extend(self.seed.iter().copied());
            current = next;
        }

        // Virtual end-of-input step for `$` edges.
        let hits = self.boundary_step(&current, Boundary::End);
        if self.nfa.contains_accept(&hits) {
            return true;
        }
        self.nfa.contains_accept(&current)
    }

    /// Feed one reading through the automaton, character by character.
    ///
    /// Escape-class labels are evaluated against `original`; every other
    /// label sees the reading character being consumed. Returns the empty
    /// set as soon as the frontier empties.
    pub fn advance(&self, states: &StateSet, original: &str, reading: &str) -> StateSet {
        let mut current = self.nfa.epsilon_closure(states);
        for c in reading.chars() {
            let mut next = StateSet::new();
            for &id in &current {
                for (label, targets) in self.nfa.edges(id) {
                    if label.matches(original, c) {
                        next.extend(targets.iter().copied());
                    }
                }
            }
            if next.is_empty() {
                return next;
            }
            current = self.nfa.epsilon_closure(&next);
        }
        current
    }

    /// Advance over a virtual input boundary.
    ///
    /// Only `Boundary` labels participate; no reading characters are
    /// consumed, so `.` and character classes cannot cross a boundary.
    fn boundary_step(&self, states: &StateSet, boundary: Boundary) -> StateSet {
        let closed = self.nfa.epsilon_closure(states);
        let mut next = StateSet::new();
        for &id in &closed {
            for (label, targets) in self.nfa.edges(id) {
                if *label == Label::Boundary(boundary) {
                    next.extend(targets.iter().copied());
                }
            }
        }
        if next.is_empty() {
            return next;
        }
        self.nfa.epsilon_closure(&next)
    }
}
