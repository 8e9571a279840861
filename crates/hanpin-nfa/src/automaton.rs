//! The NFA state arena.
//!
//! States live in a flat vector, referenced by `StateId`. Identity is the
//! index — never structural equality — because repetition operators create
//! cyclic graphs, and every traversal (closure, deep copy, dump) terminates
//! by tracking visited ids.

use indexmap::{IndexMap, IndexSet};

use crate::label::Label;

/// Index into `Nfa::states`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// A set of states, insertion-ordered for deterministic iteration.
pub type StateSet = IndexSet<StateId>;

/// A single state: epsilon successors, labeled transitions, accept flag.
///
/// A label may lead to several successors, and several labels may lead to
/// overlapping successor sets — both are ordinary nondeterminism.
#[derive(Debug, Clone, Default)]
struct State {
    eps: Vec<StateId>,
    edges: IndexMap<Label, Vec<StateId>>,
    accept: bool,
}

/// An automaton: mutable while the compiler wires it, read-only afterwards.
///
/// The matcher only allocates transient state sets, so a compiled `Nfa` can
/// serve any number of concurrent matches.
#[derive(Debug, Clone, Default)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fresh state and return its id.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(State::default());
        id
    }

    /// Add an epsilon edge.
    pub fn connect_eps(&mut self, from: StateId, to: StateId) {
        self.states[from.index()].eps.push(to);
    }

    /// Add a labeled edge. Repeated labels accumulate successors.
    pub fn connect(&mut self, from: StateId, label: Label, to: StateId) {
        self.states[from.index()]
            .edges
            .entry(label)
            .or_default()
            .push(to);
    }

    pub fn set_start(&mut self, id: StateId) {
        self.start = id;
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn mark_accept(&mut self, id: StateId) {
        self.states[id.index()].accept = true;
    }

    pub fn is_accept(&self, id: StateId) -> bool {
        self.states.get(id.index()).is_some_and(|s| s.accept)
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All state ids in allocation order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(|i| StateId(i as u32))
    }

    /// Epsilon successors of a state.
    pub fn eps_successors(&self, id: StateId) -> &[StateId] {
        self.states
            .get(id.index())
            .map_or(&[], |s| s.eps.as_slice())
    }

    /// Labeled edges of a state, in insertion order.
    pub fn edges(&self, id: StateId) -> impl Iterator<Item = (&Label, &[StateId])> {
        self.states
            .get(id.index())
            .into_iter()
            .flat_map(|s| s.edges.iter().map(|(label, to)| (label, to.as_slice())))
    }

    /// All states reachable from `states` through epsilon edges alone.
    ///
    /// Fixed-point worklist traversal; the visited set doubles as the
    /// result, so cycles terminate. The input is not mutated.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();

        while let Some(id) = stack.pop() {
            for &next in self.eps_successors(id) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// Is any state in the set accepting?
    pub fn contains_accept(&self, states: &StateSet) -> bool {
        states.iter().any(|&id| self.is_accept(id))
    }
}
