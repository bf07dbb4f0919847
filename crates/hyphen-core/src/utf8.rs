// Character-level indexing over UTF-8 text
//
// Break positions and replacement spans are counted in characters. Splicing
// them into a `&str` needs byte offsets, found by stepping over characters
// and skipping continuation bytes (top two bits `10`).

/// Whether `byte` continues a multi-byte UTF-8 sequence.
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte >> 6 == 0b10
}

/// Byte offset of the `n`th character of `text`.
///
/// Returns `text.len()` when `n` is at or past the end.
pub fn char_to_byte(text: &str, n: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;
    for _ in 0..n {
        if pos >= bytes.len() {
            return bytes.len();
        }
        pos += 1;
        while pos < bytes.len() && is_continuation(bytes[pos]) {
            pos += 1;
        }
    }
    pos
}

/// Number of characters in `text`.
pub fn char_count(text: &str) -> usize {
    text.bytes().filter(|&b| !is_continuation(b)).count()
}

/// Slice of `text` from character `start` (inclusive) to `end` (exclusive).
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let from = char_to_byte(text, start);
    let to = from + char_to_byte(&text[from..], end.saturating_sub(start));
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuation_bytes() {
        assert!(!is_continuation(b'a'));
        assert!(!is_continuation(0xC3)); // lead byte of 'ä'
        assert!(is_continuation(0xA4)); // second byte of 'ä'
    }

    #[test]
    fn ascii_offsets() {
        assert_eq!(char_to_byte("zucker", 0), 0);
        assert_eq!(char_to_byte("zucker", 3), 3);
        assert_eq!(char_to_byte("zucker", 6), 6);
        assert_eq!(char_to_byte("zucker", 10), 6);
    }

    #[test]
    fn multibyte_offsets() {
        let word = "sch\u{00F6}n\u{2019}s"; // schön’s
        assert_eq!(char_to_byte(word, 3), 3);
        assert_eq!(char_to_byte(word, 4), 5); // after 2-byte 'ö'
        assert_eq!(char_to_byte(word, 5), 6);
        assert_eq!(char_to_byte(word, 6), 9); // after 3-byte '’'
        assert_eq!(char_count(word), 7);
    }

    #[test]
    fn slices_by_character() {
        let word = "gr\u{00FC}\u{00DF}e"; // grüße
        assert_eq!(char_slice(word, 1, 4), "r\u{00FC}\u{00DF}");
        assert_eq!(char_slice(word, 4, 5), "e");
        assert_eq!(char_slice(word, 2, 2), "");
    }
}
