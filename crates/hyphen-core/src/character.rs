// Character classification and simple case mapping
//
// Pattern dictionaries are written in lower case and matched one character
// at a time, so every mapping here is one-to-one: a character whose full
// Unicode mapping expands to several characters (e.g. 'ß' -> "SS") keeps
// only the first one. Break positions therefore survive case conversion.

/// One-to-one lowercase mapping.
#[inline]
pub fn simple_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// One-to-one uppercase mapping.
#[inline]
pub fn simple_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    c.to_uppercase().next().unwrap_or(c)
}

/// Whether lower-casing changes `c`.
pub fn is_upper(c: char) -> bool {
    simple_lower(c) != c
}

/// Whether upper-casing changes `c`.
pub fn is_lower(c: char) -> bool {
    simple_upper(c) != c
}

/// Digits never take part in pattern matching; the engine treats them as
/// word edges.
pub fn is_word_edge_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Lower-case a whole word with [`simple_lower`], preserving its length in
/// characters.
pub fn lower_word(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}
