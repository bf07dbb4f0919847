//! Pattern-based hyphenation.
//!
//! Hyphenates single words with Liang/Knuth patterns read from libhyphen
//! dictionaries, including non-standard breaks that change the spelling
//! around the break (German `Zucker` -> `Zuk-ker`).
//!
//! ```no_run
//! use hyphen::{HyphenOptions, Hyphenator};
//!
//! let hyphenator = Hyphenator::load("hyph_en_US.dic", HyphenOptions::default())?;
//! assert_eq!(hyphenator.syllables("beautiful")?, ["beau", "ti", "ful"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`breaks`] -- Break vectors, replacement tables and [`Hyphenation`] results
//! - [`engine`] -- Pattern matching, compound splitting and margin rules
//! - [`format`] -- Inline and pairs output, mode flags and case restoration
//! - [`hyphenator`] -- Shared handle with case-aware conveniences
//! - [`cache`] -- Fixed-size memo of recent results

pub mod breaks;
pub mod cache;
pub mod engine;
pub mod error;
pub mod format;
pub mod hyphenator;

pub use breaks::{BreakVector, Hyphenation, MARKER, ReplacementTable, Substitution};
pub use engine::{HyphenOptions, MAX_WORD_BYTES, hyphenate};
pub use error::HyphenError;
pub use format::{Mode, Output, recase};
pub use hyphen_dict::{LoadError, PatternDictionary};
pub use hyphenator::Hyphenator;
