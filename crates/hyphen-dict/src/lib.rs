//! Pattern dictionaries for Liang-style hyphenation.
//!
//! Reads the text dictionaries used by libhyphen (`hyph_*.dic`, as shipped
//! with LibreOffice) into an immutable [`PatternDictionary`].
//!
//! # Architecture
//!
//! - [`charset`] -- Declared character set and encoded-length checks
//! - [`pattern`] -- Pattern and replacement-rule parsing
//! - [`level`] -- Pattern sets indexed for substring lookup
//! - [`dictionary`] -- File parsing, directives and the two-level layout

use std::path::PathBuf;

pub mod charset;
pub mod dictionary;
pub mod level;
pub mod pattern;

pub use charset::Charset;
pub use dictionary::{DictionaryMargins, PatternDictionary};
pub use level::PatternLevel;
pub use pattern::{Pattern, Replacement};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read hyphenation dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The contents do not follow the dictionary format.
    #[error("malformed hyphenation dictionary at line {line}: {kind}")]
    Format { line: usize, kind: FormatError },
}

/// What exactly is wrong with a malformed dictionary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("missing character set declaration")]
    MissingCharset,
    #[error("unknown character set: {0}")]
    UnknownEncoding(String),
    #[error("text is not valid in the declared character set")]
    InvalidText,
    #[error("pattern without letters: {0}")]
    EmptyPattern(String),
    #[error("invalid replacement rule: {0}")]
    InvalidReplacement(String),
    #[error("missing or invalid value for {0}")]
    InvalidDirective(String),
    #[error("only one NEXTLEVEL section is supported")]
    ExtraLevel,
}
