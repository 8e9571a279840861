//! Pinyin-aware pattern matching for Chinese text.
//!
//! Compiles a small regex dialect into an NFA and matches it against a
//! token stream in which every character carries all of its matchable
//! forms: full pinyin readings (heteronyms included), bare initials, fuzzy
//! zh/ch/sh variants, and the literal character itself. A pattern matches
//! if it occurs anywhere in the stream, against any combination of forms.
//!
//! ```
//! assert!(hanpin::is_match("yinyue", "音乐"));
//! assert!(hanpin::is_match("yy", "音乐"));       // first letters
//! assert!(hanpin::is_match("zong", "中"));       // fuzzy zh -> z
//! assert!(hanpin::is_match("yin(yue|le)", "音乐"));
//! ```
//!
//! For control over expansion and parse strictness, build a [`Searcher`]:
//!
//! ```
//! use hanpin::Searcher;
//!
//! let searcher = Searcher::builder("zh.ng").fuzzy(false).build().unwrap();
//! assert!(searcher.is_match("中文"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]


pub use hanpin_compiler::{MAX_REPEAT, PatternError, compile, compile_strict};
pub use hanpin_nfa::{Nfa, Token};
pub use hanpin_pinyin::{TokenizeOptions, tokenize};
pub use hanpin_vm::Matcher;

/// A compiled pattern together with the tokenization switches it runs with.
#[derive(Debug)]
pub struct Searcher {
    nfa: Nfa,
    opts: TokenizeOptions,
}

/// Builder for [`Searcher`].
pub struct SearcherBuilder {
    pattern: String,
    opts: TokenizeOptions,
    strict: bool,
}

impl Searcher {
    /// Start building a searcher for `pattern`.
    pub fn builder(pattern: impl Into<String>) -> SearcherBuilder {
        SearcherBuilder {
            pattern: pattern.into(),
            opts: TokenizeOptions::default(),
            strict: false,
        }
    }

    /// Does the pattern occur anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        let tokens = tokenize(text, &self.opts);
        Matcher::new(&self.nfa).is_match(&tokens)
    }

    /// Match against an externally produced token stream.
    pub fn is_token_match(&self, tokens: &[Token]) -> bool {
        Matcher::new(&self.nfa).is_match(tokens)
    }

    /// The compiled automaton.
    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

impl SearcherBuilder {
    /// Match bare initials ("yy" for 音乐). Default: on.
    pub fn initials(mut self, value: bool) -> Self {
        self.opts.initials = value;
        self
    }

    /// Match fuzzy zh/ch/sh variants ("zong" for 中). Default: on.
    pub fn fuzzy(mut self, value: bool) -> Self {
        self.opts.fuzzy = value;
        self
    }

    /// One token per character versus the whole input as a single token.
    /// Default: per character.
    pub fn split_chars(mut self, value: bool) -> Self {
        self.opts.split_chars = value;
        self
    }

    /// Report malformed pattern syntax instead of recovering. Default:
    /// recover.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Compile the pattern. Patterns are lowercased first, since readings
    /// are always lowercase. Fails only in strict mode.
    pub fn build(self) -> Result<Searcher, PatternError> {
        let pattern = self.pattern.to_lowercase();
        let nfa = if self.strict {
            compile_strict(&pattern)?
        } else {
            compile(&pattern)
        };
        Ok(Searcher {
            nfa,
            opts: self.opts,
        })
    }
}

/// Match `pattern` against `text` with the default switches.
pub fn is_match(pattern: &str, text: &str) -> bool {
    Searcher::builder(pattern)
        .build()
        .expect("lenient compilation is infallible")
        .is_match(text)
}
