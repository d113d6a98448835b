/// Unified error type for primitives operations.
///
/// Covers Base58 decoding failures and checksum verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    /// A symbol outside the Base58 alphabet; `position` counts from zero.
    #[error("invalid base58 character {ch:?} at position {position}")]
    InvalidBase58Char { ch: char, position: usize },

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("data too short for checksum: {0} bytes")]
    TooShortForChecksum(usize),

    #[error("checksum mismatch")]
    ChecksumMismatch,
}
