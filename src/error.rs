use std::fmt;

/// Every way an encode or decode call can reject its input.
///
/// Once input gets past validation neither direction can fail, so this is
/// the only error type in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Encode was given no text, or text with zero symbols.
    EmptyText,
    /// Decode was given no tree.
    MissingTree,
    /// Decode was given no bit-string, or an empty one.
    EmptyBits,
    /// A token other than `'0'` or `'1'` at the given char position.
    InvalidBit { position: usize, found: char },
    /// The bit-string ended partway through a code.
    TruncatedCode { trailing: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::EmptyText => write!(f, "invalid input: text is absent or empty"),
            InvalidInput::MissingTree => write!(f, "invalid input: no Huffman tree given"),
            InvalidInput::EmptyBits => write!(f, "invalid input: bit-string is absent or empty"),
            InvalidInput::InvalidBit { position, found } => write!(
                f,
                "invalid input: expected '0' or '1' at position {}, found {:?}",
                position, found
            ),
            InvalidInput::TruncatedCode { trailing } => write!(
                f,
                "invalid input: bit-string ends {} bit(s) into an incomplete code",
                trailing
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}
