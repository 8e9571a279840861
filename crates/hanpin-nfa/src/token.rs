//! The unit of input consumed by the matcher.

use serde::{Deserialize, Serialize};

/// One logical unit of input text together with every string form the
/// matcher may consume it as: full readings, initials, fuzzy variants, and
/// always the literal text itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    original: String,
    readings: Vec<String>,
}

impl Token {
    /// Build a token. `readings` falls back to the original text when
    /// empty, so every token has at least one matchable form.
    pub fn new(original: impl Into<String>, readings: Vec<String>) -> Self {
        let original = original.into();
        let mut readings = readings;
        if readings.is_empty() {
            readings.push(original.clone());
        }
        Self { original, readings }
    }

    /// A token matched only as its literal text.
    pub fn literal(original: impl Into<String>) -> Self {
        Self::new(original, Vec::new())
    }

    /// The source text this token stands for. Escape-class labels are
    /// evaluated against this, not against the reading being consumed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The matchable forms, in insertion order.
    pub fn readings(&self) -> &[String] {
        &self.readings
    }
}
