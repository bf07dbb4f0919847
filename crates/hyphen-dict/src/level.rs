// Pattern level: the set of patterns applied in one matching pass.
//
// A dictionary has two levels. The compound level finds compound-word
// boundaries; the main level finds ordinary break points inside each
// compound part.

use hashbrown::HashMap;

use crate::pattern::Pattern;

/// Patterns of one level, indexed by their letters for substring lookup.
#[derive(Debug, Clone, Default)]
pub struct PatternLevel {
    patterns: HashMap<Box<[char]>, Pattern>,
    max_len: usize,
    min_len: usize,
    nohyphen: Vec<String>,
}

impl PatternLevel {
    /// The built-in compound level used when a dictionary has no
    /// `NEXTLEVEL` section: hyphens and apostrophes split compounds, and no
    /// break is offered directly next to them.
    pub(crate) fn default_compound(utf8: bool) -> Self {
        let mut level = Self::default();
        let mut markers = vec!["-", "'"];
        if utf8 {
            markers.extend(["\u{2013}", "\u{2019}"]); // EN DASH, RIGHT SINGLE QUOTATION MARK
        }
        for marker in markers {
            if let Ok(pattern) = Pattern::parse(&format!("1{marker}1")) {
                level.insert(pattern);
            }
            level.add_nohyphen(marker);
        }
        level
    }

    /// Add a pattern, returning the one it replaced if the letters were
    /// already present.
    pub(crate) fn insert(&mut self, pattern: Pattern) -> Option<Pattern> {
        let len = pattern.letters().len();
        self.max_len = self.max_len.max(len);
        self.min_len = if self.patterns.is_empty() {
            len
        } else {
            self.min_len.min(len)
        };
        let key: Box<[char]> = pattern.letters().into();
        self.patterns.insert(key, pattern)
    }

    pub(crate) fn add_nohyphen(&mut self, text: &str) {
        if !text.is_empty() && !self.nohyphen.iter().any(|s| s == text) {
            self.nohyphen.push(text.to_string());
        }
    }

    /// Look up the pattern whose letters are exactly `letters`.
    #[inline]
    pub fn get(&self, letters: &[char]) -> Option<&Pattern> {
        self.patterns.get(letters)
    }

    /// Length in letters of the longest pattern (0 when empty).
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Length in letters of the shortest pattern (0 when empty).
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Strings next to which no break may be placed.
    pub fn nohyphen(&self) -> &[String] {
        &self.nohyphen
    }

    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }
}
