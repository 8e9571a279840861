//! Reading expansion: initials and fuzzy variants.

use indexmap::IndexSet;

use crate::tokenize::TokenizeOptions;

/// Pinyin initials, digraphs first so `zh`/`ch`/`sh` win over `z`/`c`/`s`.
const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Retroflex initials and the flat-tongue initials they are commonly
/// conflated with.
const FUZZY: &[(&str, &str)] = &[("zh", "z"), ("ch", "c"), ("sh", "s")];

/// The leading consonant cluster of a reading, or its first character for
/// vowel-onset readings like "an".
pub fn initial_of(reading: &str) -> &str {
    for initial in INITIALS {
        if reading.starts_with(initial) {
            return initial;
        }
    }
    match reading.chars().next() {
        Some(c) => &reading[..c.len_utf8()],
        None => reading,
    }
}

/// Add `reading` and its enabled variants to `out`.
///
/// Fuzzy variants include the bare flat-tongue initial even when initial
/// expansion is off: someone typing "z" for 中 is using the fuzzy rule, not
/// the initials rule.
pub fn expand_reading(reading: &str, opts: &TokenizeOptions, out: &mut IndexSet<String>) {
    out.insert(reading.to_string());

    let initial = initial_of(reading);
    if opts.initials {
        out.insert(initial.to_string());
    }
    if opts.fuzzy {
        if let Some(&(_, flat)) = FUZZY.iter().find(|&&(retroflex, _)| retroflex == initial) {
            out.insert(format!("{flat}{}", &reading[initial.len()..]));
            out.insert(flat.to_string());
        }
    }
}
