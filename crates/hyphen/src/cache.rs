// Hash-indexed memo of recent hyphenation results
//
// A fixed number of slots, each holding at most one result. The slot is
// chosen by a multiplicative string hash; a colliding word overwrites the
// previous occupant (no chaining, no LRU).

use crate::breaks::Hyphenation;

/// Words longer than this (in characters) are not cached.
pub const MAX_CACHED_WORD_LEN: usize = 32;

fn slot_hash(word: &str, slots: usize) -> usize {
    let mut hash: usize = 0;
    for c in word.chars() {
        hash = hash.wrapping_mul(37).wrapping_add(c as usize);
    }
    hash % slots
}

/// Fixed-size cache of [`Hyphenation`] results keyed by the matched word.
#[derive(Debug, Clone)]
pub struct HyphenationCache {
    slots: Vec<Option<Hyphenation>>,
}

impl HyphenationCache {
    /// Cache with `slots` entries (at least one).
    pub fn new(slots: usize) -> Self {
        Self {
            slots: vec![None; slots.max(1)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, word: &str) -> Option<&Hyphenation> {
        self.slots[slot_hash(word, self.slots.len())]
            .as_ref()
            .filter(|h| h.word() == word)
    }

    /// Store `result`, evicting whatever shares its slot.
    pub fn insert(&mut self, result: Hyphenation) {
        if result.word().chars().count() > MAX_CACHED_WORD_LEN {
            return;
        }
        let slot = slot_hash(result.word(), self.slots.len());
        self.slots[slot] = Some(result);
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}
