// Hyphenator: a loaded dictionary plus margin options, with the
// word-level conveniences (case restoration, syllables, wrapping).

use std::path::Path;
use std::sync::{Arc, Mutex};

use hyphen_core::case::detect_case;
use hyphen_core::character::lower_word;
use hyphen_dict::{LoadError, PatternDictionary};

use crate::breaks::{Hyphenation, MARKER};
use crate::cache::HyphenationCache;
use crate::engine::{HyphenOptions, hyphenate};
use crate::error::HyphenError;
use crate::format::{Mode, Output, format, format_restored};

/// Words shorter than this (in characters) are never split by the
/// convenience methods.
pub const MIN_WORD_CHARS: usize = 4;

/// Hyphenation handle.
///
/// The dictionary is shared through an `Arc`, so handles with different
/// options can use one loaded dictionary. All methods take `&self`; the
/// optional result cache sits behind a `Mutex`, which keeps the handle
/// `Send + Sync`.
#[derive(Debug)]
pub struct Hyphenator {
    dict: Arc<PatternDictionary>,
    options: HyphenOptions,
    cache: Option<Mutex<HyphenationCache>>,
}

impl Hyphenator {
    /// Load the dictionary at `path`.
    pub fn load(path: impl AsRef<Path>, options: HyphenOptions) -> Result<Self, LoadError> {
        let dict = PatternDictionary::load(path)?;
        Ok(Self::new(Arc::new(dict), options))
    }

    pub fn new(dict: Arc<PatternDictionary>, options: HyphenOptions) -> Self {
        Self {
            dict,
            options,
            cache: None,
        }
    }

    /// Enable a result cache of `slots` entries.
    pub fn with_cache(mut self, slots: usize) -> Self {
        self.cache = Some(Mutex::new(HyphenationCache::new(slots)));
        self
    }

    pub fn dictionary(&self) -> &Arc<PatternDictionary> {
        &self.dict
    }

    pub fn options(&self) -> &HyphenOptions {
        &self.options
    }

    /// Hyphenate `word` exactly as given.
    pub fn hyphenate(&self, word: &str) -> Result<Hyphenation, HyphenError> {
        if let Some(hit) = self.cached(word) {
            return Ok(hit);
        }
        let result = hyphenate(&self.dict, word, &self.options)?;
        if let Some(cache) = &self.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.insert(result.clone());
            }
        }
        Ok(result)
    }

    fn cached(&self, word: &str) -> Option<Hyphenation> {
        let cache = self.cache.as_ref()?.lock().ok()?;
        cache.get(word).cloned()
    }

    /// Hyphenate `word` as given and format it according to `mode`.
    pub fn apply(&self, word: &str, mode: Mode) -> Result<Output, HyphenError> {
        Ok(format(&self.hyphenate(word)?, mode))
    }

    /// All `(before, after)` splits of `word`, in the word's own case.
    ///
    /// Returns no splits for words shorter than [`MIN_WORD_CHARS`], words
    /// already containing the break marker, and words the dictionary's
    /// charset cannot encode.
    pub fn pairs(&self, word: &str) -> Result<Vec<(String, String)>, HyphenError> {
        match self.recased(word, true)? {
            Some(Output::Pairs(pairs)) => Ok(pairs),
            _ => Ok(Vec::new()),
        }
    }

    /// `word` cut at every break, in the word's own case.
    ///
    /// A word without breaks yields a single syllable; words skipped by
    /// [`Hyphenator::pairs`] yield none.
    pub fn syllables(&self, word: &str) -> Result<Vec<String>, HyphenError> {
        match self.recased(word, false)? {
            Some(Output::Inline(text)) => Ok(text.split(MARKER).map(str::to_string).collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// `word` with `separator` at every break.
    pub fn insert_hyphens(&self, word: &str, separator: &str) -> Result<String, HyphenError> {
        let syllables = self.syllables(word)?;
        if syllables.is_empty() {
            return Ok(word.to_string());
        }
        Ok(syllables.join(separator))
    }

    /// The longest split whose first part, with `hyphen` appended, fits in
    /// `width` characters.
    ///
    /// A first part that already ends in `hyphen` (a compound split at its
    /// own hyphen) gets no second one.
    pub fn wrap(
        &self,
        word: &str,
        width: usize,
        hyphen: &str,
    ) -> Result<Option<(String, String)>, HyphenError> {
        let hyphen_len = hyphen.chars().count();
        let room = width.saturating_sub(hyphen_len);
        let split = self
            .pairs(word)?
            .into_iter()
            .rev()
            .find_map(|(mut before, after)| {
                let ends_with_hyphen = !hyphen.is_empty() && before.ends_with(hyphen);
                let limit = if ends_with_hyphen { room + hyphen_len } else { room };
                if before.chars().count() > limit {
                    return None;
                }
                if !ends_with_hyphen {
                    before.push_str(hyphen);
                }
                Some((before, after))
            });
        Ok(split)
    }

    /// Lower-case `word`, hyphenate it and restore its case on the result.
    fn recased(&self, word: &str, pairs: bool) -> Result<Option<Output>, HyphenError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < MIN_WORD_CHARS || chars.contains(&MARKER) {
            return Ok(None);
        }
        let case = detect_case(&chars);
        let result = match self.hyphenate(&lower_word(word)) {
            Ok(result) => result,
            Err(HyphenError::Unencodable { charset }) => {
                tracing::debug!(word, charset = %charset, "word not representable in dictionary charset");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        Ok(Some(format_restored(&result, pairs, case)))
    }
}
