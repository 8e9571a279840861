//! Pinyin readings and token expansion for hanpin.
//!
//! The matcher consumes tokens; this crate produces them. Every character
//! becomes a token carrying its matchable forms: full pinyin readings
//! (heteronyms included), bare initials, fuzzy zh/ch/sh variants, and
//! always the literal character itself.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod expand;
pub mod tokenize;


pub use expand::{expand_reading, initial_of};
pub use tokenize::{TokenizeOptions, tokenize};
