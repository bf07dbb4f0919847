/// Error type for a single hyphenation call.
///
/// Finding no break point is not an error; it yields an empty
/// [`Hyphenation`](crate::Hyphenation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HyphenError {
    /// The encoded word does not fit the engine's fixed input buffer.
    #[error("word is {len} bytes long once encoded; at most {max} bytes can be hyphenated")]
    InputTooLong { len: usize, max: usize },

    /// The word contains characters the dictionary's charset cannot represent.
    #[error("word cannot be represented in the dictionary character set {charset}")]
    Unencodable { charset: String },

    /// An invariant of the matching machinery was violated.
    #[error("internal hyphenation error: {0}")]
    Internal(String),
}
