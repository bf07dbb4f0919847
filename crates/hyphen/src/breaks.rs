// Break vectors and replacement tables: the raw result of hyphenating a word.
//
// Positions are gaps counted in characters. Gap `g` sits between character
// `g - 1` and character `g`, so a word of `n` characters has `n + 1` gaps;
// gaps `0` and `n` (the word edges) never carry a break.

use hashbrown::HashMap;

/// Character inserted at break points in inline output.
pub const MARKER: char = '=';

/// Per-gap weights of a word. An odd weight means a break is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakVector {
    weights: Vec<u8>,
}

impl BreakVector {
    /// All-zero vector for a word of `chars` characters.
    pub fn new(chars: usize) -> Self {
        Self {
            weights: vec![0; chars + 1],
        }
    }

    /// Number of gaps (word length in characters plus one).
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: even the empty word has one gap.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn weight(&self, gap: usize) -> u8 {
        self.weights.get(gap).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_break(&self, gap: usize) -> bool {
        self.weight(gap) & 1 == 1
    }

    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    /// Break gaps in ascending order.
    pub fn breaks(&self) -> impl Iterator<Item = usize> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w & 1 == 1)
            .map(|(gap, _)| gap)
    }

    /// Number of break gaps.
    pub fn count(&self) -> usize {
        self.breaks().count()
    }

    /// Raise the weight at `gap` if `weight` is strictly greater.
    /// Returns whether the weight changed.
    pub(crate) fn raise(&mut self, gap: usize, weight: u8) -> bool {
        match self.weights.get_mut(gap) {
            Some(slot) if weight > *slot => {
                *slot = weight;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set(&mut self, gap: usize, weight: u8) {
        if let Some(slot) = self.weights.get_mut(gap) {
            *slot = weight;
        }
    }

    pub(crate) fn clear(&mut self, gap: usize) {
        self.set(gap, 0);
    }
}

/// Text substituted around a non-standard break.
///
/// The `cut` original characters starting `offset` characters before the
/// break gap are replaced by `pre`, the break, then `post`. For example
/// `zucker` broken at gap 3 with `{pre: "k", post: "k", offset: 1, cut: 2}`
/// becomes `zuk=ker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pre: String,
    pub post: String,
    /// Characters between the start of the replaced span and the gap.
    pub offset: usize,
    /// Original characters replaced.
    pub cut: usize,
}

impl Substitution {
    /// Character range of the original word replaced when breaking at `gap`.
    ///
    /// `None` when the span would start before the word.
    pub fn span(&self, gap: usize) -> Option<std::ops::Range<usize>> {
        let start = gap.checked_sub(self.offset)?;
        Some(start..start + self.cut)
    }

    /// Characters left of the break once substituted.
    pub(crate) fn left_len(&self, gap: usize) -> usize {
        gap.saturating_sub(self.offset) + self.pre.chars().count()
    }

    /// Characters right of the break once substituted, for a word of `chars`.
    pub(crate) fn right_len(&self, gap: usize, chars: usize) -> usize {
        let end = gap.saturating_sub(self.offset) + self.cut;
        chars.saturating_sub(end) + self.post.chars().count()
    }
}

/// Substitutions keyed by the gap whose break triggers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: HashMap<usize, Substitution>,
}

impl ReplacementTable {
    pub fn get(&self, gap: usize) -> Option<&Substitution> {
        self.entries.get(&gap)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending gap order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Substitution)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(&g, s)| (g, s)).collect();
        entries.sort_unstable_by_key(|&(g, _)| g);
        entries.into_iter()
    }

    pub(crate) fn insert(&mut self, gap: usize, substitution: Substitution) {
        self.entries.insert(gap, substitution);
    }

    pub(crate) fn remove(&mut self, gap: usize) -> Option<Substitution> {
        self.entries.remove(&gap)
    }
}

/// Result of hyphenating one word.
///
/// `word` is the text that was matched (lower-cased by the callers that
/// restore case). Substitutions only exist for gaps that are breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyphenation {
    word: String,
    breaks: BreakVector,
    replacements: ReplacementTable,
}

impl Hyphenation {
    pub(crate) fn new(word: String, breaks: BreakVector, replacements: ReplacementTable) -> Self {
        Self {
            word,
            breaks,
            replacements,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn breaks(&self) -> &BreakVector {
        &self.breaks
    }

    pub fn replacements(&self) -> &ReplacementTable {
        &self.replacements
    }

    /// Break gaps in ascending order.
    pub fn positions(&self) -> Vec<usize> {
        self.breaks.breaks().collect()
    }

    /// Whether no break was found.
    pub fn is_empty(&self) -> bool {
        self.breaks.count() == 0
    }

    /// The word with [`MARKER`] at every break.
    pub fn inline(&self) -> String {
        crate::format::format_inline(&self.word, &self.breaks, &self.replacements)
    }

    /// One `(before, after)` pair per break.
    pub fn pairs(&self) -> Vec<(String, String)> {
        crate::format::format_pairs(&self.word, &self.breaks, &self.replacements)
    }
}
