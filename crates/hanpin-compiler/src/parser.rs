//! Recursive-descent pattern parser.
//!
//! Precedence, lowest to highest: alternation `|`, concatenation, postfix
//! quantifiers (`*` `+` `?` `{m,n}`), atoms (literal, group, class, escape,
//! anchor, wildcard). Quantifiers chain: `a*?` is `?` applied to `a*`.
//!
//! In lenient mode nothing fails: a malformed or inverted `{m,n}` backtracks
//! and re-parses as literal text, unclosed `(` and `[` are closed at end of
//! pattern. In strict mode those positions become [`PatternError`]s.

use std::collections::BTreeSet;

use hanpin_nfa::{Boundary, CharClass, Label, Nfa};

use crate::fragment::{self, Fragment};
use crate::{MAX_REPEAT, PatternError};

pub(crate) struct Parser<'p> {
    pattern: &'p str,
    chars: Vec<(usize, char)>,
    pos: usize,
    strict: bool,
}

impl<'p> Parser<'p> {
    pub(crate) fn new(pattern: &'p str, strict: bool) -> Self {
        Self {
            pattern,
            chars: pattern.char_indices().collect(),
            pos: 0,
            strict,
        }
    }

    pub(crate) fn parse(&mut self, nfa: &mut Nfa) -> Result<Fragment, PatternError> {
        self.parse_alternation(nfa)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, c)| c)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).map(|&(_, c)| c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Byte offset of the next character, or the pattern length at the end.
    fn byte_pos(&self) -> usize {
        self.chars
            .get(self.pos)
            .map_or(self.pattern.len(), |&(byte, _)| byte)
    }

    fn parse_alternation(&mut self, nfa: &mut Nfa) -> Result<Fragment, PatternError> {
        let mut left = self.parse_sequence(nfa)?;
        while self.peek() == Some('|') {
            self.bump();
            let right = self.parse_sequence(nfa)?;
            left = fragment::alternation(nfa, left, right);
        }
        Ok(left)
    }

    fn parse_sequence(&mut self, nfa: &mut Nfa) -> Result<Fragment, PatternError> {
        let mut frags = Vec::new();
        while let Some(c) = self.peek() {
            if c == '|' || c == ')' {
                break;
            }
            frags.push(self.parse_quantified(nfa)?);
        }

        let mut iter = frags.into_iter();
        let Some(first) = iter.next() else {
            return Ok(fragment::empty(nfa));
        };
        Ok(iter.fold(first, |acc, frag| fragment::sequence(nfa, acc, frag)))
    }

    fn parse_quantified(&mut self, nfa: &mut Nfa) -> Result<Fragment, PatternError> {
        let mut frag = self.parse_atom(nfa)?;
        loop {
            match self.peek() {
                Some('*') => {
                    self.bump();
                    frag = fragment::zero_or_more(nfa, frag);
                }
                Some('+') => {
                    self.bump();
                    frag = fragment::one_or_more(nfa, frag);
                }
                Some('?') => {
                    self.bump();
                    frag = fragment::optional(nfa, frag);
                }
                Some('{') => match self.parse_counted(nfa, frag)? {
                    Some(counted) => frag = counted,
                    // Malformed: the braces re-parse as literal atoms.
                    None => break,
                },
                _ => break,
            }
        }
        Ok(frag)
    }

    /// `{m}` / `{m,}` / `{m,n}`. Returns `Ok(None)` after backtracking to
    /// just before `{` when the quantifier is malformed and we are lenient.
    fn parse_counted(
        &mut self,
        nfa: &mut Nfa,
        atom: Fragment,
    ) -> Result<Option<Fragment>, PatternError> {
        let open = self.pos;
        let open_byte = self.byte_pos();
        self.bump(); // '{'

        let min = self.parse_number();
        let (max, has_comma) = if self.peek() == Some(',') {
            self.bump();
            (self.parse_number(), true)
        } else {
            (None, false)
        };
        let closed = self.peek() == Some('}');
        if closed {
            self.bump();
        }

        let Some(min) = min else {
            return self.counted_fallback(open, open_byte);
        };
        if !closed {
            return self.counted_fallback(open, open_byte);
        }
        let max = if has_comma { max } else { Some(min) };
        if let Some(mx) = max {
            if min > mx {
                return self.counted_fallback(open, open_byte);
            }
        }
        if min > MAX_REPEAT || max.is_some_and(|mx| mx > MAX_REPEAT) {
            if self.strict {
                return Err(PatternError::QuantifierTooLarge {
                    span: open_byte..self.byte_pos(),
                });
            }
            self.pos = open;
            return Ok(None);
        }

        Ok(Some(fragment::repeat(nfa, atom, min, max)))
    }

    fn counted_fallback(
        &mut self,
        open: usize,
        open_byte: usize,
    ) -> Result<Option<Fragment>, PatternError> {
        if self.strict {
            return Err(PatternError::Quantifier {
                span: open_byte..self.byte_pos().max(open_byte + 1),
            });
        }
        self.pos = open;
        Ok(None)
    }

    fn parse_number(&mut self) -> Option<usize> {
        let mut value: Option<usize> = None;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            self.bump();
            let current = value.unwrap_or(0);
            value = Some(current.saturating_mul(10).saturating_add(digit as usize));
        }
        value
    }

    fn parse_atom(&mut self, nfa: &mut Nfa) -> Result<Fragment, PatternError> {
        let open_byte = self.byte_pos();
        let Some(c) = self.bump() else {
            // parse_sequence stops at end of input before calling us
            return Ok(fragment::empty(nfa));
        };
        match c {
            '\\' => Ok(self.parse_escape(nfa)),
            '[' => self.parse_class(nfa, open_byte),
            '(' => {
                let group = self.parse_alternation(nfa)?;
                if self.peek() == Some(')') {
                    self.bump();
                } else if self.strict {
                    return Err(PatternError::UnclosedGroup {
                        span: open_byte..open_byte + 1,
                    });
                }
                Ok(group)
            }
            '.' => Ok(fragment::literal(nfa, Label::Any)),
            '^' => Ok(fragment::literal(nfa, Label::Boundary(Boundary::Start))),
            '$' => Ok(fragment::literal(nfa, Label::Boundary(Boundary::End))),
            c => Ok(fragment::literal(nfa, Label::Char(c))),
        }
    }

    fn parse_escape(&mut self, nfa: &mut Nfa) -> Fragment {
        let label = match self.bump() {
            // A trailing backslash stands for itself.
            None => Label::Char('\\'),
            Some('d') => Label::Class(CharClass::Digit),
            Some('w') => Label::Class(CharClass::Word),
            Some('s') => Label::Class(CharClass::Space),
            Some('z') => Label::Class(CharClass::Han),
            Some('^') => Label::Char('^'),
            Some('$') => Label::Char('$'),
            // Unknown escapes keep their backslash rather than silently
            // turning into the bare character.
            Some(other) => Label::Verbatim(format!("\\{other}")),
        };
        fragment::literal(nfa, label)
    }

    fn parse_class(&mut self, nfa: &mut Nfa, open_byte: usize) -> Result<Fragment, PatternError> {
        let negated = self.peek() == Some('^');
        if negated {
            self.bump();
        }

        let mut set = BTreeSet::new();
        while let Some(c) = self.peek() {
            if c == ']' {
                break;
            }
            self.bump();
            // `x-y` range, unless the `-` is the last member before `]`
            if self.peek() == Some('-') && self.peek_at(1).is_some_and(|next| next != ']') {
                self.bump();
                if let Some(end) = self.bump() {
                    for member in c..=end {
                        set.insert(member);
                    }
                }
            } else {
                set.insert(c);
            }
        }

        if self.peek() == Some(']') {
            self.bump();
        } else if self.strict {
            return Err(PatternError::UnclosedClass {
                span: open_byte..open_byte + 1,
            });
        }

        let label = if negated {
            Label::NegSet(set)
        } else {
            Label::Set(set)
        };
        Ok(fragment::literal(nfa, label))
    }
}
