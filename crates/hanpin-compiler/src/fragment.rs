//! NFA fragment combinators (Thompson construction).
//!
//! Every combinator returns a [`Fragment`] — a sub-automaton with one entry
//! and one exit state — and wires new epsilon edges into the arena without
//! moving any existing fragment's boundary states.

use std::collections::{HashMap, HashSet};

use hanpin_nfa::{Label, Nfa, StateId};

/// A sub-automaton with single entry and exit points.
///
/// Fragments only exist during compilation; once the top-level fragment's
/// exit is marked accepting, the automaton stands on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

impl Fragment {
    pub fn new(start: StateId, end: StateId) -> Self {
        Self { start, end }
    }
}

/// A fragment that consumes nothing: a single state serving as both entry
/// and exit. This is what an empty sequence (or empty group) compiles to.
pub fn empty(nfa: &mut Nfa) -> Fragment {
    let state = nfa.add_state();
    Fragment::new(state, state)
}

/// A fragment consuming one input character via `label`.
pub fn literal(nfa: &mut Nfa, label: Label) -> Fragment {
    let start = nfa.add_state();
    let end = nfa.add_state();
    nfa.connect(start, label, end);
    Fragment::new(start, end)
}

/// Connect two fragments in series: `a` then `b`.
pub fn sequence(nfa: &mut Nfa, a: Fragment, b: Fragment) -> Fragment {
    nfa.connect_eps(a.end, b.start);
    Fragment::new(a.start, b.end)
}

/// Either branch: `a|b`.
///
/// ```text
///           ┌─→ a ─┐
/// start ─→ ─┤      ├─→ end
///           └─→ b ─┘
/// ```
pub fn alternation(nfa: &mut Nfa, a: Fragment, b: Fragment) -> Fragment {
    let start = nfa.add_state();
    let end = nfa.add_state();
    nfa.connect_eps(start, a.start);
    nfa.connect_eps(start, b.start);
    nfa.connect_eps(a.end, end);
    nfa.connect_eps(b.end, end);
    Fragment::new(start, end)
}

/// Zero or more: `a*`.
///
/// ```text
///            ┌───────┐
///            ↓       │
/// start ─→ inner ────┘
///   │         │
///   └────────→┴─→ end
/// ```
pub fn zero_or_more(nfa: &mut Nfa, inner: Fragment) -> Fragment {
    let start = nfa.add_state();
    let end = nfa.add_state();
    nfa.connect_eps(start, inner.start);
    nfa.connect_eps(start, end);
    nfa.connect_eps(inner.end, inner.start);
    nfa.connect_eps(inner.end, end);
    Fragment::new(start, end)
}

/// One or more: `a+`. Like `a*` without the skip edge from the entry.
pub fn one_or_more(nfa: &mut Nfa, inner: Fragment) -> Fragment {
    let start = nfa.add_state();
    let end = nfa.add_state();
    nfa.connect_eps(start, inner.start);
    nfa.connect_eps(inner.end, inner.start);
    nfa.connect_eps(inner.end, end);
    Fragment::new(start, end)
}

/// Zero or one: `a?`.
pub fn optional(nfa: &mut Nfa, inner: Fragment) -> Fragment {
    let start = nfa.add_state();
    let end = nfa.add_state();
    nfa.connect_eps(start, inner.start);
    nfa.connect_eps(start, end);
    nfa.connect_eps(inner.end, end);
    Fragment::new(start, end)
}

/// Exactly `count` repetitions: `a{n}`.
///
/// Repetitions after the first are structural deep copies — sharing one
/// sub-automaton would alias internal states across repetitions and let
/// epsilon cycles bleed between them.
pub fn exact(nfa: &mut Nfa, inner: Fragment, count: usize) -> Fragment {
    if count == 0 {
        // `a{0}`: the inner fragment is skipped entirely.
        let start = nfa.add_state();
        let end = nfa.add_state();
        nfa.connect_eps(start, end);
        return Fragment::new(start, end);
    }

    // Copies are taken before `sequence` adds edges to `inner`, so every
    // copy is of the pristine fragment.
    let copies: Vec<Fragment> = (1..count).map(|_| clone_fragment(nfa, inner)).collect();
    let mut result = inner;
    for copy in copies {
        result = sequence(nfa, result, copy);
    }
    result
}

/// Between `min` and `max` repetitions; `max == None` means unbounded.
///
/// Bounded ranges expand eagerly into `min` required copies plus
/// `max - min` individually skippable ones, keeping the automaton an
/// ordinary Thompson NFA at the cost of O(max) states. The parser bounds
/// `max`, so the expansion stays small.
pub fn repeat(nfa: &mut Nfa, inner: Fragment, min: usize, max: Option<usize>) -> Fragment {
    debug_assert!(max.is_none_or(|mx| mx >= min));

    match (min, max) {
        (0, None) => return zero_or_more(nfa, inner),
        (1, None) => return one_or_more(nfa, inner),
        (0, Some(1)) => return optional(nfa, inner),
        (0, Some(0)) => {
            // `a{0,0}`: the inner fragment is skipped entirely.
            let start = nfa.add_state();
            let end = nfa.add_state();
            nfa.connect_eps(start, end);
            return Fragment::new(start, end);
        }
        _ => {}
    }

    let start = nfa.add_state();
    let end = nfa.add_state();

    // Optional-tail copies are taken before the required chain adds edges
    // to `inner`. When there is no required chain, `inner` itself serves as
    // the first tail copy.
    let tail_count = match max {
        None => 1,
        Some(max) => max - min,
    };
    let mut tail = Vec::with_capacity(tail_count);
    if min == 0 {
        tail.push(inner);
        for _ in 1..tail_count {
            tail.push(clone_fragment(nfa, inner));
        }
    } else {
        for _ in 0..tail_count {
            tail.push(clone_fragment(nfa, inner));
        }
    }

    let mut chain = start;
    if min == 0 {
        nfa.connect_eps(start, end);
    } else {
        let required = exact(nfa, inner, min);
        nfa.connect_eps(start, required.start);
        nfa.connect_eps(required.end, end);
        chain = required.end;
    }

    match max {
        None => {
            // Unbounded tail: one more copy, looping on itself.
            let extra = tail[0];
            nfa.connect_eps(chain, extra.start);
            nfa.connect_eps(extra.end, extra.start);
            nfa.connect_eps(extra.end, end);
        }
        Some(_) => {
            // Each extra repetition can stop early or continue into the next.
            for copy in tail {
                nfa.connect_eps(chain, copy.start);
                nfa.connect_eps(copy.end, end);
                chain = copy.end;
            }
        }
    }

    Fragment::new(start, end)
}

/// Structurally deep-copy a fragment's subgraph.
///
/// One fresh state per reachable old state, memoized by id, so shared
/// structure and cycles copy exactly once. Accept flags and both edge kinds
/// are copied through the memo.
pub fn clone_fragment(nfa: &mut Nfa, frag: Fragment) -> Fragment {
    // Discover reachable states in deterministic order.
    let mut order = vec![frag.start];
    let mut seen: HashSet<StateId> = order.iter().copied().collect();
    let mut i = 0;
    while i < order.len() {
        let id = order[i];
        i += 1;
        for &next in nfa.eps_successors(id) {
            if seen.insert(next) {
                order.push(next);
            }
        }
        let targets: Vec<StateId> = nfa
            .edges(id)
            .flat_map(|(_, to)| to.iter().copied())
            .collect();
        for next in targets {
            if seen.insert(next) {
                order.push(next);
            }
        }
    }
    // Combinator-built fragments always reach their end from their start;
    // cover a detached end anyway.
    if seen.insert(frag.end) {
        order.push(frag.end);
    }

    let mut memo: HashMap<StateId, StateId> = HashMap::with_capacity(order.len());
    for &old in &order {
        memo.insert(old, nfa.add_state());
    }

    for &old in &order {
        let twin = memo[&old];
        if nfa.is_accept(old) {
            nfa.mark_accept(twin);
        }
        let eps: Vec<StateId> = nfa.eps_successors(old).to_vec();
        for next in eps {
            nfa.connect_eps(twin, memo[&next]);
        }
        let edges: Vec<(Label, Vec<StateId>)> = nfa
            .edges(old)
            .map(|(label, to)| (label.clone(), to.to_vec()))
            .collect();
        for (label, targets) in edges {
            for next in targets {
                nfa.connect(twin, label.clone(), memo[&next]);
            }
        }
    }

    Fragment::new(memo[&frag.start], memo[&frag.end])
}
