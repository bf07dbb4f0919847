// Dictionary character set: the encoding named on the first line of a
// hyphenation dictionary, fixed for the lifetime of the dictionary.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::FormatError;

/// The character set a dictionary declares in its header line.
///
/// Words handed to the engine are Rust strings; the charset only decides
/// how the dictionary body is decoded and how long a word is once encoded
/// (the engine's input cap is measured in encoded bytes).
#[derive(Debug, Clone)]
pub struct Charset {
    name: String,
    encoding: &'static Encoding,
    utf8: bool,
    // WHATWG maps the ISO-8859-1 labels to windows-1252, which also assigns
    // 0x80..=0x9F. Real Latin-1 stops at U+00FF with C1 controls there.
    latin1: bool,
}

impl Charset {
    /// Resolve a declared charset name.
    ///
    /// Names are matched as WHATWG encoding labels, which covers the
    /// spellings found in existing dictionaries (`ISO8859-1`, `KOI8-R`,
    /// `TIS-620`, ...). A `microsoft-` prefix (`microsoft-cp1251`) is dropped
    /// before the lookup. ISO-8859-1 is kept strict rather than widened to
    /// windows-1252.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormatError::MissingCharset);
        }

        let utf8 = name.eq_ignore_ascii_case("UTF-8") || name.eq_ignore_ascii_case("UTF8");
        let encoding = if utf8 {
            UTF_8
        } else {
            let label = strip_prefix_ignore_case(name, "microsoft-").unwrap_or(name);
            Encoding::for_label(label.as_bytes())
                .ok_or_else(|| FormatError::UnknownEncoding(name.to_string()))?
        };

        Ok(Self {
            name: name.to_string(),
            encoding,
            utf8,
            latin1: is_latin1_name(name),
        })
    }

    /// The name exactly as declared in the dictionary.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Whether the dictionary is UTF-8, i.e. characters may span several bytes.
    pub fn is_utf8(&self) -> bool {
        self.utf8
    }

    /// Decode raw dictionary bytes. Returns `None` on malformed input.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        if self.utf8 {
            std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
        } else if self.latin1 {
            Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()))
        } else {
            self.encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
        }
    }

    /// Length of `text` in bytes once encoded in this charset.
    ///
    /// Returns `None` when `text` contains characters the charset cannot
    /// represent.
    pub fn encoded_len(&self, text: &str) -> Option<usize> {
        if self.utf8 {
            return Some(text.len());
        }
        if self.latin1 {
            return text
                .chars()
                .try_fold(0, |len, c| (u32::from(c) <= 0xFF).then_some(len + 1));
        }
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors { None } else { Some(bytes.len()) }
    }
}

fn is_latin1_name(name: &str) -> bool {
    let folded: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    matches!(folded.as_str(), "iso88591" | "latin1" | "l1")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}
