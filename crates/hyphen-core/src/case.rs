// Case detection and restoration
//
// Patterns are lower case, so callers hyphenate the lower-cased word and then
// put the caller's casing back on every string they return. Only the two
// common shapes (Capitalized, UPPER) can be restored; anything else comes
// back lower case.

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Casing shape of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters at all ("1984", "--").
    NoLetters,
    /// "hyphen"
    AllLower,
    /// "Hyphen"
    FirstUpper,
    /// Any other mix ("iPhone", "McDonald").
    Complex,
    /// "HYPHEN"
    AllUpper,
}

/// Classify the casing of `word`. Uncased characters are ignored, except
/// that `FirstUpper` requires the very first character to be upper case.
pub fn detect_case(word: &[char]) -> CaseType {
    let uppers = word.iter().filter(|&&c| is_upper(c)).count();
    let lowers = word.iter().filter(|&&c| is_lower(c)).count();

    match (uppers, lowers) {
        (0, 0) => CaseType::NoLetters,
        (0, _) => CaseType::AllLower,
        (_, 0) => CaseType::AllUpper,
        (1, _) if word.first().is_some_and(|&c| is_upper(c)) => CaseType::FirstUpper,
        _ => CaseType::Complex,
    }
}

/// Recase `word` in place. `NoLetters` and `Complex` leave it untouched;
/// `FirstUpper` upper-cases the first character and lower-cases the rest.
pub fn set_case(word: &mut [char], case_type: CaseType) {
    let map: fn(usize, char) -> char = match case_type {
        CaseType::NoLetters | CaseType::Complex => return,
        CaseType::AllLower => |_, c| simple_lower(c),
        CaseType::AllUpper => |_, c| simple_upper(c),
        CaseType::FirstUpper => |i, c| if i == 0 { simple_upper(c) } else { simple_lower(c) },
    };
    for (i, c) in word.iter_mut().enumerate() {
        *c = map(i, *c);
    }
}

/// String form of [`set_case`].
pub fn with_case(text: &str, case_type: CaseType) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    set_case(&mut chars, case_type);
    chars.into_iter().collect()
}
