//! Text-to-token conversion.

use hanpin_nfa::Token;
use indexmap::IndexSet;
use pinyin::{ToPinyin, ToPinyinMulti};
use serde::{Deserialize, Serialize};

use crate::expand::expand_reading;

/// Switches controlling how text expands into matchable readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeOptions {
    /// Add the bare initial of every reading ("zh" for "zhong"), enabling
    /// first-letter patterns like "yy" for 音乐.
    pub initials: bool,
    /// Add flat-tongue variants of zh/ch/sh readings ("zong" for "zhong").
    pub fuzzy: bool,
    /// One token per character. When false the whole input becomes a
    /// single token carrying its concatenated reading.
    pub split_chars: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            initials: true,
            fuzzy: true,
            split_chars: true,
        }
    }
}

/// Convert text into the token stream the matcher consumes.
///
/// Every character always matches as itself; Han characters additionally
/// carry each heteronym reading, expanded per `opts`.
pub fn tokenize(text: &str, opts: &TokenizeOptions) -> Vec<Token> {
    if !opts.split_chars {
        return vec![whole_input_token(text)];
    }

    text.chars()
        .zip(text.to_pinyin_multi())
        .map(|(c, multi)| {
            let mut readings = IndexSet::new();
            if let Some(multi) = multi {
                for reading in multi {
                    expand_reading(reading.plain(), opts, &mut readings);
                }
            }
            readings.insert(c.to_string());
            Token::new(c.to_string(), readings.into_iter().collect())
        })
        .collect()
}

/// The whole input as one token: the concatenation of each character's
/// default reading, plus the raw text.
fn whole_input_token(text: &str) -> Token {
    let mut full = String::new();
    for (c, reading) in text.chars().zip(text.to_pinyin()) {
        match reading {
            Some(reading) => full.push_str(reading.plain()),
            None => full.push(c),
        }
    }

    let mut readings = IndexSet::new();
    readings.insert(full);
    readings.insert(text.to_string());
    Token::new(text, readings.into_iter().collect())
}
