// PatternDictionary: the immutable in-memory form of a hyphenation dictionary.

use std::path::Path;

use crate::charset::Charset;
use crate::level::PatternLevel;
use crate::pattern::Pattern;
use crate::{FormatError, LoadError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Margin defaults declared by the dictionary. Zero means "not declared".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryMargins {
    /// `LEFTHYPHENMIN`
    pub lmin: usize,
    /// `RIGHTHYPHENMIN`
    pub rmin: usize,
    /// `COMPOUNDLEFTHYPHENMIN`
    pub compound_lmin: usize,
    /// `COMPOUNDRIGHTHYPHENMIN`
    pub compound_rmin: usize,
}

/// A loaded hyphenation dictionary.
///
/// Built once by [`PatternDictionary::load`] or
/// [`PatternDictionary::from_bytes`] and never mutated afterwards: every
/// accessor takes `&self` and nothing inside uses interior mutability, so a
/// dictionary can be shared between threads (e.g. behind an `Arc`) and
/// queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct PatternDictionary {
    charset: Charset,
    compound: PatternLevel,
    main: PatternLevel,
    margins: DictionaryMargins,
    explicit_compound: bool,
}

impl PatternDictionary {
    /// Read and parse a dictionary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_bytes(&data)?;
        tracing::debug!(
            path = %path.display(),
            charset = dict.charset.name(),
            patterns = dict.main.len(),
            compound_patterns = dict.compound.len(),
            explicit_compound = dict.explicit_compound,
            "loaded hyphenation dictionary"
        );
        Ok(dict)
    }

    /// Parse dictionary data already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LoadError> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let mut lines = data.split(|&b| b == b'\n');

        let header = lines.next().unwrap_or_default();
        let name = std::str::from_utf8(header).map_err(|_| LoadError::Format {
            line: 1,
            kind: FormatError::MissingCharset,
        })?;
        let charset = Charset::from_name(name).map_err(|kind| LoadError::Format { line: 1, kind })?;

        let mut parser = Parser::new(charset.is_utf8());
        for (i, raw) in lines.enumerate() {
            let line = i + 2;
            let text = charset.decode(raw).ok_or(LoadError::Format {
                line,
                kind: FormatError::InvalidText,
            })?;
            parser
                .line(&text)
                .map_err(|kind| LoadError::Format { line, kind })?;
        }

        Ok(parser.finish(charset))
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Whether characters may span several bytes.
    pub fn is_utf8(&self) -> bool {
        self.charset.is_utf8()
    }

    /// Patterns that locate compound-word boundaries.
    pub fn compound_level(&self) -> &PatternLevel {
        &self.compound
    }

    /// Patterns that locate ordinary break points.
    pub fn main_level(&self) -> &PatternLevel {
        &self.main
    }

    /// Whether the compound level came from a `NEXTLEVEL` section rather
    /// than the built-in hyphen/apostrophe rules.
    pub fn has_explicit_compound_level(&self) -> bool {
        self.explicit_compound
    }

    pub fn margins(&self) -> DictionaryMargins {
        self.margins
    }

    /// Length in letters of the shortest main-level pattern.
    pub fn min_pattern_len(&self) -> usize {
        self.main.min_len()
    }
}

/// Line-by-line state while reading the dictionary body.
struct Parser {
    utf8: bool,
    current: PatternLevel,
    compound: Option<PatternLevel>,
    margins: DictionaryMargins,
}

impl Parser {
    fn new(utf8: bool) -> Self {
        Self {
            utf8,
            current: PatternLevel::default(),
            compound: None,
            margins: DictionaryMargins::default(),
        }
    }

    fn line(&mut self, text: &str) -> Result<(), FormatError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('%') || text.starts_with('#') {
            return Ok(());
        }

        let mut tokens = text.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(());
        };

        match first {
            "NEXTLEVEL" => {
                if self.compound.is_some() {
                    return Err(FormatError::ExtraLevel);
                }
                self.compound = Some(std::mem::take(&mut self.current));
            }
            "LEFTHYPHENMIN" => self.margins.lmin = directive_value(first, tokens.next())?,
            "RIGHTHYPHENMIN" => self.margins.rmin = directive_value(first, tokens.next())?,
            "COMPOUNDLEFTHYPHENMIN" => {
                self.margins.compound_lmin = directive_value(first, tokens.next())?;
            }
            "COMPOUNDRIGHTHYPHENMIN" => {
                self.margins.compound_rmin = directive_value(first, tokens.next())?;
            }
            "NOHYPHEN" => {
                let list = tokens
                    .next()
                    .ok_or_else(|| FormatError::InvalidDirective(first.to_string()))?;
                for item in list.split(',') {
                    self.current.add_nohyphen(item);
                }
            }
            token => {
                let pattern = Pattern::parse(token)?;
                if let Some(old) = self.current.insert(pattern) {
                    tracing::trace!(pattern = token, previous = ?old.weights(), "duplicate pattern replaced");
                }
            }
        }
        Ok(())
    }

    fn finish(self, charset: Charset) -> PatternDictionary {
        let (compound, explicit_compound) = match self.compound {
            Some(level) => (level, true),
            None => (PatternLevel::default_compound(self.utf8), false),
        };
        PatternDictionary {
            charset,
            compound,
            main: self.current,
            margins: self.margins,
            explicit_compound,
        }
    }
}

fn directive_value(name: &str, value: Option<&str>) -> Result<usize, FormatError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FormatError::InvalidDirective(name.to_string()))
}
