//! Runtime engine for matching compiled hanpin automata.
//!
//! The engine runs an automaton against a token stream where each token
//! offers several alternative readings, and reports whether the pattern
//! occurs anywhere in the stream.

pub mod engine;

#[cfg(test)]
mod engine_tests;

pub use engine::Matcher;
