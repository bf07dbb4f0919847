// Result formatting: inline marked words, (before, after) pairs, and the
// mode flags selecting between them.

use std::ops::BitOr;

use hyphen_core::case::{CaseType, set_case, with_case};
use hyphen_core::utf8::{char_count, char_slice};

use crate::breaks::{BreakVector, Hyphenation, MARKER, ReplacementTable};

/// Output mode flags.
///
/// Bit 0 selects pairs output, bit 1 capitalizes the result and bit 2
/// upper-cases it. Upper-casing wins when both case bits are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mode(u8);

impl Mode {
    pub const INLINE: Mode = Mode(0);
    pub const PAIRS: Mode = Mode(1);
    pub const CAPITALIZE: Mode = Mode(2);
    pub const UPPERCASE: Mode = Mode(4);

    /// Mode from raw bits; unknown bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Mode(bits & 0b111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_pairs(self) -> bool {
        self.contains(Mode::PAIRS)
    }

    /// Case transformation requested by the mode, if any.
    pub fn case(self) -> Option<CaseType> {
        if self.contains(Mode::UPPERCASE) {
            Some(CaseType::AllUpper)
        } else if self.contains(Mode::CAPITALIZE) {
            Some(CaseType::FirstUpper)
        } else {
            None
        }
    }

}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

/// Formatted hyphenation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Inline(String),
    Pairs(Vec<(String, String)>),
}

/// Format `hyphenation` as selected by `mode`.
///
/// The case bits apply to every returned string on its own: with
/// [`Mode::CAPITALIZE`] both halves of a pair start upper case.
pub fn format(hyphenation: &Hyphenation, mode: Mode) -> Output {
    if mode.is_pairs() {
        let pairs = hyphenation
            .pairs()
            .into_iter()
            .map(|(before, after)| (recase(&before, mode), recase(&after, mode)))
            .collect();
        Output::Pairs(pairs)
    } else {
        Output::Inline(recase(&hyphenation.inline(), mode))
    }
}

/// `text` in the case requested by `mode`'s case bits.
pub fn recase(text: &str, mode: Mode) -> String {
    match mode.case() {
        Some(case) => with_case(text, case),
        None => text.to_string(),
    }
}

/// Format `hyphenation` of a lower-cased word with the word's original
/// `case` put back.
///
/// Unlike [`format`], case covers the word as a whole, so a capitalized
/// word yields `("Zuk", "ker")`.
pub(crate) fn format_restored(hyphenation: &Hyphenation, pairs: bool, case: CaseType) -> Output {
    if pairs {
        let mut pairs = hyphenation.pairs();
        for (before, after) in &mut pairs {
            recase_pair(before, after, case);
        }
        Output::Pairs(pairs)
    } else {
        Output::Inline(with_case(&hyphenation.inline(), case))
    }
}

fn recase_pair(before: &mut String, after: &mut String, case: CaseType) {
    let split = before.chars().count();
    let mut chars: Vec<char> = before.chars().chain(after.chars()).collect();
    set_case(&mut chars, case);
    *before = chars[..split].iter().collect();
    *after = chars[split..].iter().collect();
}

/// Insert [`MARKER`] at every break of `word`, substituting text around
/// non-standard breaks.
///
/// Breaks are visited left to right behind a cursor over the original
/// characters. A substitution reaching back before the cursor (because it
/// overlaps an earlier substitution) degrades to a plain marker, and a break
/// the cursor has already passed is skipped.
pub fn format_inline(word: &str, breaks: &BreakVector, replacements: &ReplacementTable) -> String {
    let mut out = String::with_capacity(word.len() + breaks.count() * 2);
    let mut cursor = 0;

    for gap in breaks.breaks() {
        let span = replacements
            .get(gap)
            .and_then(|sub| Some((sub, sub.span(gap)?)))
            .filter(|(_, span)| span.start >= cursor);
        match span {
            Some((sub, span)) => {
                out.push_str(char_slice(word, cursor, span.start));
                out.push_str(&sub.pre);
                out.push(MARKER);
                out.push_str(&sub.post);
                cursor = span.end;
            }
            None if gap >= cursor => {
                out.push_str(char_slice(word, cursor, gap));
                out.push(MARKER);
                cursor = gap;
            }
            None => {}
        }
    }

    out.push_str(char_slice(word, cursor, usize::MAX));
    out
}

/// One `(before, after)` pair per break, each built as if that break were
/// the only one.
pub fn format_pairs(
    word: &str,
    breaks: &BreakVector,
    replacements: &ReplacementTable,
) -> Vec<(String, String)> {
    let n = char_count(word);
    breaks
        .breaks()
        .map(|gap| match replacements.get(gap).and_then(|sub| Some((sub, sub.span(gap)?))) {
            Some((sub, span)) => (
                format!("{}{}", char_slice(word, 0, span.start), sub.pre),
                format!("{}{}", sub.post, char_slice(word, span.end.min(n), n)),
            ),
            None => (
                char_slice(word, 0, gap).to_string(),
                char_slice(word, gap, n).to_string(),
            ),
        })
        .collect()
}
