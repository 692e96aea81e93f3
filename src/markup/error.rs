/// Errors produced while parsing `[[tag]]` markup.
///
/// Offsets are character (not byte) positions of the tag's opening `[[`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A `[[` with no matching `]]`.
    #[error("unterminated markup tag '[[{tag}' at offset {offset}")]
    Unterminated {
        /// Text following the dangling `[[`.
        tag: String,
        /// Character offset of the `[[`.
        offset: usize,
    },

    /// An opening tag still open at end of input.
    #[error("unclosed markup tag '[[{tag}]]' at offset {offset}")]
    UnclosedTag {
        /// Tag body, e.g. `fg:green`.
        tag: String,
        /// Character offset of the opening `[[`.
        offset: usize,
    },
}

impl MarkupError {
    /// The offending tag text.
    pub fn tag(&self) -> &str {
        match self {
            Self::Unterminated { tag, .. } | Self::UnclosedTag { tag, .. } => tag,
        }
    }

    /// Character offset of the offending tag.
    pub fn offset(&self) -> usize {
        match self {
            Self::Unterminated { offset, .. } | Self::UnclosedTag { offset, .. } => *offset,
        }
    }
}
