// Pattern entries: letters, per-gap weights and optional replacement rule.
//
// Line syntax (libhyphen `hyph_*.dic`):
//
//   hy3ph                 standard pattern
//   .ach4                 `.` anchors the pattern to a word edge
//   c1k/k=k,1,2           non-standard: replace 2 letters starting at the
//                         1st with "k=k", breaking at the `=`

use std::ops::Range;

use crate::FormatError;

/// Letter that marks a word edge inside a pattern.
pub const EDGE: char = '.';

/// A non-standard hyphenation rule attached to a pattern.
///
/// When the pattern's break is taken, `cut` original letters starting at
/// pattern letter `index` are replaced by `pre` + break + `post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Replacement text before the break.
    pub pre: String,
    /// Replacement text after the break.
    pub post: String,
    /// 0-based index of the first replaced letter, not counting a leading `.`.
    pub index: usize,
    /// Number of original letters replaced.
    pub cut: usize,
}

/// One dictionary pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    letters: Box<[char]>,
    /// `letters.len() + 1` entries; `weights[k]` belongs to the gap before `letters[k]`.
    weights: Box<[u8]>,
    replacement: Option<Replacement>,
}

impl Pattern {
    /// Parse one pattern token such as `hy3ph` or `c1k/k=k,1,2`.
    pub fn parse(token: &str) -> Result<Self, FormatError> {
        let (body, rule) = match token.split_once('/') {
            Some((body, rule)) => (body, Some(rule)),
            None => (token, None),
        };

        let mut letters = Vec::with_capacity(body.len());
        let mut weights = vec![0u8];
        for c in body.chars() {
            if c.is_ascii_digit() {
                let slot = weights.len() - 1;
                weights[slot] = c as u8 - b'0';
            } else {
                letters.push(c);
                weights.push(0);
            }
        }

        if letters.iter().all(|&c| c == EDGE) {
            return Err(FormatError::EmptyPattern(token.to_string()));
        }

        let replacement = match rule {
            Some(rule) => Some(parse_replacement(rule, &letters)?),
            None => None,
        };

        Ok(Self {
            letters: letters.into_boxed_slice(),
            weights: weights.into_boxed_slice(),
            replacement,
        })
    }

    /// Pattern letters, including `.` edge markers.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Weight per gap; one more entry than [`Pattern::letters`].
    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    pub fn replacement(&self) -> Option<&Replacement> {
        self.replacement.as_ref()
    }

    /// Whether the pattern only matches at the start of a word.
    pub fn starts_at_edge(&self) -> bool {
        self.letters.first() == Some(&EDGE)
    }

    /// Letters (as indices into [`Pattern::letters`]) covered by the
    /// replacement rule, if any.
    pub fn replaced_span(&self) -> Option<Range<usize>> {
        let rep = self.replacement.as_ref()?;
        let start = rep.index + usize::from(self.starts_at_edge());
        Some(start..start + rep.cut)
    }
}

/// Parse `text[,index,cut]`.
fn parse_replacement(rule: &str, letters: &[char]) -> Result<Replacement, FormatError> {
    let invalid = || FormatError::InvalidReplacement(rule.to_string());

    let leading = usize::from(letters.first() == Some(&EDGE));
    let trailing = usize::from(letters.len() > leading && letters.last() == Some(&EDGE));
    let inner = letters.len() - leading - trailing;

    let mut parts = rule.split(',');
    let text = parts.next().unwrap_or_default();
    let (index, cut) = match (parts.next(), parts.next(), parts.next()) {
        (None, None, None) => (0, inner),
        (Some(index), Some(cut), None) => {
            let index: usize = index.trim().parse().map_err(|_| invalid())?;
            let cut: usize = cut.trim().parse().map_err(|_| invalid())?;
            (index.checked_sub(1).ok_or_else(invalid)?, cut)
        }
        _ => return Err(invalid()),
    };

    if text.is_empty() || index + cut > inner {
        return Err(invalid());
    }

    let (pre, post) = text.split_once('=').unwrap_or((text, ""));
    Ok(Replacement {
        pre: pre.to_string(),
        post: post.to_string(),
        index,
        cut,
    })
}
