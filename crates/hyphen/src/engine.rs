// Hyphenation engine -- Liang pattern matching with compound and margin rules
//
// A word is hyphenated in four steps:
// 1. The compound level splits the word at compound boundaries (hyphens and
//    apostrophes unless the dictionary declares its own level).
// 2. The main level is matched against each compound part, padded with `.`
//    so edge-anchored patterns fire. Weights merge by strict maximum, so
//    among equal weights the first pattern to reach a gap keeps it.
// 3. Breaks too close to a word or compound edge are dropped.
// 4. No break is kept directly before or after a NOHYPHEN string.

use std::iter;

use hyphen_core::character::is_word_edge_digit;
use hyphen_dict::pattern::{EDGE, Pattern};
use hyphen_dict::{DictionaryMargins, PatternDictionary, PatternLevel};

use crate::breaks::{BreakVector, Hyphenation, ReplacementTable, Substitution};
use crate::error::HyphenError;

/// Size of the engine's input buffer in bytes, terminator included.
pub const INPUT_BUFFER: usize = 100;

/// Longest encoded word, in bytes, that can be hyphenated.
///
/// The terminator counts against [`INPUT_BUFFER`], so a 99-byte word is
/// rejected. libhyphen's Python module accepts 99 bytes; this limit is one
/// byte stricter on purpose.
pub const MAX_WORD_BYTES: usize = INPUT_BUFFER - 2;

/// Margin used when neither the caller nor the dictionary sets one.
const FALLBACK_MARGIN: usize = 2;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Minimum fragment lengths around a break.
///
/// A value of 0 defers to the dictionary's `LEFTHYPHENMIN`-style directive;
/// if the dictionary has none, word margins fall back to 2 and compound
/// margins to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HyphenOptions {
    /// Characters required before the first break of a word.
    pub lmin: usize,
    /// Characters required after the last break of a word.
    pub rmin: usize,
    /// Characters required after a compound boundary before the next break.
    pub compound_lmin: usize,
    /// Characters required before a compound boundary after the previous break.
    pub compound_rmin: usize,
}

impl Default for HyphenOptions {
    fn default() -> Self {
        Self {
            lmin: 2,
            rmin: 2,
            compound_lmin: 2,
            compound_rmin: 2,
        }
    }
}

impl HyphenOptions {
    /// Options that take every margin from the dictionary.
    pub fn from_dictionary() -> Self {
        Self {
            lmin: 0,
            rmin: 0,
            compound_lmin: 0,
            compound_rmin: 0,
        }
    }

    /// Effective margins once dictionary defaults are applied.
    pub fn resolve(&self, declared: DictionaryMargins) -> HyphenOptions {
        let pick = |given: usize, declared: usize, fallback: usize| {
            if given > 0 {
                given
            } else if declared > 0 {
                declared
            } else {
                fallback
            }
        };
        HyphenOptions {
            lmin: pick(self.lmin, declared.lmin, FALLBACK_MARGIN),
            rmin: pick(self.rmin, declared.rmin, FALLBACK_MARGIN),
            compound_lmin: pick(self.compound_lmin, declared.compound_lmin, 0),
            compound_rmin: pick(self.compound_rmin, declared.compound_rmin, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Hyphenate `word` against `dict`.
///
/// The word is matched as given; callers wanting case-insensitive results
/// lower-case it first. Fails with [`HyphenError::InputTooLong`] when the
/// word's encoding in the dictionary charset exceeds [`MAX_WORD_BYTES`], and
/// with [`HyphenError::Unencodable`] when the charset cannot represent it.
pub fn hyphenate(
    dict: &PatternDictionary,
    word: &str,
    options: &HyphenOptions,
) -> Result<Hyphenation, HyphenError> {
    let charset = dict.charset();
    let encoded = charset
        .encoded_len(word)
        .ok_or_else(|| HyphenError::Unencodable {
            charset: charset.name().to_string(),
        })?;
    if encoded + 1 >= INPUT_BUFFER {
        return Err(HyphenError::InputTooLong {
            len: encoded,
            max: MAX_WORD_BYTES,
        });
    }

    let chars: Vec<char> = word.chars().collect();
    let margins = options.resolve(dict.margins());
    let matched = hyphenate_chars(dict, &chars, &margins)?;

    tracing::trace!(
        word,
        breaks = matched.breaks.count(),
        replacements = matched.replacements.len(),
        "hyphenated"
    );
    Ok(Hyphenation::new(
        word.to_string(),
        matched.breaks,
        matched.replacements,
    ))
}

/// Weights and substitutions collected for one character sequence.
#[derive(Debug)]
struct Matched {
    breaks: BreakVector,
    replacements: ReplacementTable,
}

impl Matched {
    fn new(chars: usize) -> Self {
        Self {
            breaks: BreakVector::new(chars),
            replacements: ReplacementTable::default(),
        }
    }

    fn clear(&mut self, gap: usize) {
        self.breaks.clear(gap);
        self.replacements.remove(gap);
    }
}

fn hyphenate_chars(
    dict: &PatternDictionary,
    chars: &[char],
    margins: &HyphenOptions,
) -> Result<Matched, HyphenError> {
    let n = chars.len();
    let compound = match_level(dict.compound_level(), chars)?;
    let boundaries: Vec<usize> = compound.breaks.breaks().filter(|&g| g > 0 && g < n).collect();

    let mut result = if boundaries.is_empty() {
        match_level(dict.main_level(), chars)?
    } else {
        split_compound(dict.main_level(), chars, compound, &boundaries, margins)?
    };

    apply_margins(&mut result, n, margins.lmin, margins.rmin);
    for text in dict
        .compound_level()
        .nohyphen()
        .iter()
        .chain(dict.main_level().nohyphen())
    {
        apply_nohyphen(&mut result, chars, text);
    }
    Ok(result)
}

/// Hyphenate each compound part separately and splice the parts' breaks
/// between the boundary breaks found by the compound level.
fn split_compound(
    main: &PatternLevel,
    chars: &[char],
    mut result: Matched,
    boundaries: &[usize],
    margins: &HyphenOptions,
) -> Result<Matched, HyphenError> {
    let n = chars.len();
    let mut begin = 0;
    for &end in boundaries.iter().chain(iter::once(&n)) {
        let part = &chars[begin..end];
        if part.len() >= 2 {
            let mut matched = match_level(main, part)?;
            let left = if begin == 0 { margins.lmin } else { margins.compound_lmin };
            let right = if end == n { margins.rmin } else { margins.compound_rmin };
            apply_margins(&mut matched, part.len(), left, right);

            for gap in 1..part.len() {
                result.breaks.set(begin + gap, matched.breaks.weight(gap));
                result.replacements.remove(begin + gap);
                if let Some(sub) = matched.replacements.remove(gap) {
                    result.replacements.insert(begin + gap, sub);
                }
            }
        }
        begin = end;
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// Pattern matching
// ---------------------------------------------------------------------------

/// Match every pattern of `level` against `chars` padded with word edges.
///
/// Substrings are visited by end position, and for each end from the longest
/// candidate down, which fixes the order in which equal weights compete.
fn match_level(level: &PatternLevel, chars: &[char]) -> Result<Matched, HyphenError> {
    let n = chars.len();
    let mut matched = Matched::new(n);
    if level.is_empty() {
        return Ok(matched);
    }

    let padded: Vec<char> = iter::once(EDGE)
        .chain(chars.iter().map(|&c| if is_word_edge_digit(c) { EDGE } else { c }))
        .chain(iter::once(EDGE))
        .collect();

    let shortest = level.min_len().max(1);
    for end in shortest..=padded.len() {
        let first = end.saturating_sub(level.max_len());
        for start in first..=end - shortest {
            if let Some(pattern) = level.get(&padded[start..end]) {
                merge(&mut matched, pattern, start, n)?;
            }
        }
    }
    Ok(matched)
}

/// Merge a pattern matched at padded position `start` into `matched`.
///
/// Padded gap `q` corresponds to word gap `q - 1`; the gaps outside the
/// padding edges are dropped.
fn merge(matched: &mut Matched, pattern: &Pattern, start: usize, n: usize) -> Result<(), HyphenError> {
    let span = pattern.replaced_span();
    for (k, &weight) in pattern.weights().iter().enumerate() {
        let Some(gap) = (start + k).checked_sub(1) else {
            continue;
        };
        if gap > n || !matched.breaks.raise(gap, weight) {
            continue;
        }
        matched.replacements.remove(gap);

        let (Some(span), Some(rule)) = (span.as_ref(), pattern.replacement()) else {
            continue;
        };
        if weight & 1 == 0 || k < span.start || k > span.end {
            continue;
        }

        let first = (start + span.start).checked_sub(1).ok_or_else(|| {
            HyphenError::Internal(format!("replacement span of {:?} starts before the word", pattern.letters()))
        })?;
        if first + rule.cut > n {
            return Err(HyphenError::Internal(format!(
                "replacement span {}..{} exceeds word length {n}",
                first,
                first + rule.cut
            )));
        }
        matched.replacements.insert(
            gap,
            Substitution {
                pre: rule.pre.clone(),
                post: rule.post.clone(),
                offset: gap - first,
                cut: rule.cut,
            },
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Suppression rules
// ---------------------------------------------------------------------------

/// Clear every gap whose left or right fragment would be shorter than
/// `lmin`/`rmin` characters. Fragments around a substitution are measured
/// after substitution. The word edges are always cleared.
fn apply_margins(matched: &mut Matched, n: usize, lmin: usize, rmin: usize) {
    for gap in 0..=n {
        let (left, right) = match matched.replacements.get(gap) {
            Some(sub) => (sub.left_len(gap), sub.right_len(gap, n)),
            None => (gap, n - gap),
        };
        if gap == 0 || gap == n || left < lmin || right < rmin {
            matched.clear(gap);
        }
    }
}

/// Clear the gaps directly before and after each occurrence of `text`.
fn apply_nohyphen(matched: &mut Matched, chars: &[char], text: &str) {
    let needle: Vec<char> = text.chars().collect();
    if needle.is_empty() || needle.len() > chars.len() {
        return;
    }
    for (i, window) in chars.windows(needle.len()).enumerate() {
        if window == needle.as_slice() {
            matched.clear(i);
            matched.clear(i + needle.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &str = "UTF-8\nhy3ph\nhe2n\nhena4\nhen5at\n1na\nn2at\n1tio\n2io\no2n\n";

    fn dict(data: &str) -> PatternDictionary {
        PatternDictionary::from_bytes(data.as_bytes()).unwrap()
    }

    fn inline(dict: &PatternDictionary, word: &str, options: HyphenOptions) -> String {
        hyphenate(dict, word, &options).unwrap().inline()
    }

    #[test]
    fn standard_breaks() {
        let d = dict(EN);
        let h = hyphenate(&d, "hyphenation", &HyphenOptions::default()).unwrap();
        // `o2n` weights gap 10, but it lies inside the right margin.
        assert_eq!(h.breaks().weights(), &[0, 0, 3, 0, 0, 2, 5, 4, 2, 0, 0, 0]);
        assert_eq!(h.positions(), vec![2, 6]);
        assert!(h.replacements().is_empty());
        assert_eq!(h.inline(), "hy=phen=ation");
    }

    #[test]
    fn longest_pattern_wins_ties() {
        // Both patterns end at the same character and put weight 1 on the
        // same gap. The longer one is tried first and keeps its replacement.
        let d = dict("UTF-8\nb1c\nab1c/x=y,2,1\n");
        let h = hyphenate(&d, "abcd", &HyphenOptions { lmin: 1, rmin: 1, ..Default::default() }).unwrap();
        assert_eq!(h.positions(), vec![2]);
        assert!(h.replacements().get(2).is_some());
        assert_eq!(h.inline(), "ax=ycd");
    }

    #[test]
    fn earlier_end_wins_ties() {
        // `b1c` ends before `b1cd` and reaches gap 2 first.
        let d = dict("UTF-8\nb1cd/x=y,1,2\nb1c\n");
        let h = hyphenate(&d, "abcde", &HyphenOptions { lmin: 1, rmin: 1, ..Default::default() }).unwrap();
        assert_eq!(h.positions(), vec![2]);
        assert!(h.replacements().is_empty());
        assert_eq!(h.inline(), "ab=cde");
    }

    #[test]
    fn higher_weight_wins() {
        let d = dict("UTF-8\na1b\n2b\n");
        let h = hyphenate(&d, "xxabxx", &HyphenOptions::default()).unwrap();
        assert_eq!(h.breaks().weight(3), 2);
        assert_eq!(h.inline(), "xxabxx");

        let d = dict("UTF-8\na3b\n2b\n");
        let h = hyphenate(&d, "xxabxx", &HyphenOptions::default()).unwrap();
        assert_eq!(h.breaks().weight(3), 3);
        assert_eq!(h.inline(), "xxa=bxx");
    }

    #[test]
    fn replacement_break() {
        let d = dict("UTF-8\nc1k/k=k,1,2\n");
        let h = hyphenate(&d, "zucker", &HyphenOptions::default()).unwrap();
        assert_eq!(h.positions(), vec![3]);
        let sub = h.replacements().get(3).unwrap();
        assert_eq!((sub.offset, sub.cut), (1, 2));
        assert_eq!(h.inline(), "zuk=ker");
    }

    #[test]
    fn replacement_margins_use_substituted_lengths() {
        let d = dict("UTF-8\ns1sz/sz=sz,1,3\n");
        // Plain gap 3 would leave 3 characters on the left; the
        // substitution leaves "kasz", 4 characters.
        let opts = |lmin| HyphenOptions { lmin, rmin: 2, ..Default::default() };
        assert_eq!(inline(&d, "kassza", opts(4)), "kasz=sza");
        assert_eq!(inline(&d, "kassza", opts(5)), "kassza");
    }

    #[test]
    fn edge_patterns() {
        let d = dict("UTF-8\n.ab1\n1ba.\n");
        assert_eq!(inline(&d, "abxxba", HyphenOptions::default()), "ab=xx=ba");
        assert_eq!(inline(&d, "xabbax", HyphenOptions::default()), "xabbax");
    }

    #[test]
    fn digits_act_as_edges() {
        let d = dict("UTF-8\n.ab1\n");
        assert_eq!(inline(&d, "1abcd", HyphenOptions { lmin: 1, ..Default::default() }), "1ab=cd");
    }

    #[test]
    fn word_margins() {
        let d = dict(EN);
        let opts = |lmin, rmin| HyphenOptions { lmin, rmin, ..Default::default() };
        assert_eq!(inline(&d, "hyphenation", opts(2, 5)), "hy=phen=ation");
        assert_eq!(inline(&d, "hyphenation", opts(3, 5)), "hyphen=ation");
        assert_eq!(inline(&d, "hyphenation", opts(2, 6)), "hy=phenation");
    }

    #[test]
    fn dictionary_margins_apply_when_options_are_zero() {
        let d = dict("UTF-8\nLEFTHYPHENMIN 3\nhy3ph\nhen5at\n");
        assert_eq!(inline(&d, "hyphenation", HyphenOptions::from_dictionary()), "hyphen=ation");
        assert_eq!(inline(&d, "hyphenation", HyphenOptions::default()), "hy=phen=ation");
    }

    #[test]
    fn resolve_fallbacks() {
        let declared = DictionaryMargins {
            lmin: 0,
            rmin: 3,
            compound_lmin: 0,
            compound_rmin: 4,
        };
        let resolved = HyphenOptions::from_dictionary().resolve(declared);
        assert_eq!(
            resolved,
            HyphenOptions {
                lmin: 2,
                rmin: 3,
                compound_lmin: 0,
                compound_rmin: 4
            }
        );
    }

    #[test]
    fn hyphenated_compound() {
        let d = dict(EN);
        assert_eq!(
            inline(&d, "hyphen-hyphenation", HyphenOptions::default()),
            "hy=phen-hy=phen=ation"
        );
    }

    #[test]
    fn explicit_compound_level() {
        let d = dict("UTF-8\nhaus1boot\nNEXTLEVEL\na1u\no1o\n");
        let opts = HyphenOptions { compound_rmin: 3, ..Default::default() };
        assert_eq!(inline(&d, "hausboot", opts), "haus=bo=ot");
        assert_eq!(inline(&d, "haus", opts), "ha=us");

        let loose = HyphenOptions { compound_rmin: 2, ..Default::default() };
        assert_eq!(inline(&d, "hausboot", loose), "ha=us=bo=ot");
    }

    #[test]
    fn nohyphen_clears_both_sides() {
        let d = dict("UTF-8\nNOHYPHEN x\n1x1\n");
        assert_eq!(inline(&d, "aaxaa", HyphenOptions::default()), "aaxaa");
    }

    #[test]
    fn short_and_empty_words() {
        let d = dict(EN);
        for word in ["", "a", "na"] {
            let h = hyphenate(&d, word, &HyphenOptions::default()).unwrap();
            assert!(h.is_empty(), "{word}");
            assert_eq!(h.inline(), word);
        }
    }

    #[test]
    fn input_length_limit() {
        let d = dict(EN);
        let opts = HyphenOptions::default();
        assert!(hyphenate(&d, &"a".repeat(98), &opts).is_ok());
        assert_eq!(
            hyphenate(&d, &"a".repeat(99), &opts),
            Err(HyphenError::InputTooLong { len: 99, max: 98 })
        );
        // Limit counts encoded bytes, not characters.
        assert!(hyphenate(&d, &"\u{00E4}".repeat(49), &opts).is_ok());
        assert!(matches!(
            hyphenate(&d, &"\u{00E4}".repeat(50), &opts),
            Err(HyphenError::InputTooLong { len: 100, .. })
        ));
    }

    #[test]
    fn unencodable_word() {
        let d = dict("ISO8859-1\na1b\n");
        assert!(matches!(
            hyphenate(&d, "\u{0436}ab", &HyphenOptions::default()),
            Err(HyphenError::Unencodable { .. })
        ));
    }
}
