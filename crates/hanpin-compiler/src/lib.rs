//! hanpin compiler: pattern parsing and Thompson NFA construction.
//!
//! This crate provides the compilation pipeline for hanpin patterns:
//! - `fragment` - NFA fragment combinators (sequence, alternation, repetition)
//! - `parser` - recursive-descent pattern parser
//!
//! Two entry points: [`compile`] never fails (malformed quantifiers re-parse
//! as literal text, unclosed groups and classes are tolerated), while
//! [`compile_strict`] reports those positions as structured errors.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod fragment;
mod parser;


use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use hanpin_nfa::Nfa;

use parser::Parser;

/// Upper bound on `{m,n}` repetition counts.
///
/// Bounded ranges expand into O(max) states, so an unchecked bound would let
/// a short pattern like `x{1000000}` allocate an arbitrarily large
/// automaton. Bounds above the limit take the malformed-quantifier path.
pub const MAX_REPEAT: usize = 1000;

/// Errors reported by [`compile_strict`].
///
/// The lenient entry point never produces these; it recovers as described
/// on [`compile`]. Spans are byte ranges into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// `{m,n}` with missing digits, a missing `}`, or `m > n`.
    #[error("malformed repetition quantifier")]
    Quantifier { span: Range<usize> },

    /// A repetition bound above [`MAX_REPEAT`].
    #[error("repetition bound exceeds {}", MAX_REPEAT)]
    QuantifierTooLarge { span: Range<usize> },

    /// `(` with no matching `)`.
    #[error("unclosed group")]
    UnclosedGroup { span: Range<usize> },

    /// `[` with no matching `]`.
    #[error("unclosed character class")]
    UnclosedClass { span: Range<usize> },
}

impl PatternError {
    /// Byte range of the offending pattern text.
    pub fn span(&self) -> Range<usize> {
        match self {
            PatternError::Quantifier { span }
            | PatternError::QuantifierTooLarge { span }
            | PatternError::UnclosedGroup { span }
            | PatternError::UnclosedClass { span } => span.clone(),
        }
    }

    /// Render the error annotated against the pattern it came from.
    pub fn render(&self, pattern: &str) -> String {
        let title = self.to_string();
        let range = adjust_range(self.span(), pattern.len());
        let snippet = Snippet::source(pattern)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&title));
        let report = [Level::ERROR.primary_title(&title).element(snippet)];
        Renderer::plain().render(&report).to_string()
    }
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

/// Compile a pattern, recovering from malformed syntax (the default policy).
///
/// Malformed or inverted `{m,n}` quantifiers re-parse as literal text,
/// unclosed `(` and `[` are treated as closed at end of pattern. Callers
/// that want those reported should use [`compile_strict`].
pub fn compile(pattern: &str) -> Nfa {
    compile_impl(pattern, false).expect("lenient parsing is infallible")
}

/// Compile a pattern, reporting malformed syntax instead of recovering.
pub fn compile_strict(pattern: &str) -> Result<Nfa, PatternError> {
    compile_impl(pattern, true)
}

fn compile_impl(pattern: &str, strict: bool) -> Result<Nfa, PatternError> {
    let mut nfa = Nfa::new();
    let frag = Parser::new(pattern, strict).parse(&mut nfa)?;
    nfa.mark_accept(frag.end);
    nfa.set_start(frag.start);
    Ok(nfa)
}
