use slr_primitives::PrimitivesError;

/// Reasons an address string is rejected, or a configuration refused.
///
/// The boolean entry points collapse every variant to `false`; `check`
/// hands the variant back to callers that want to report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// A symbol outside the Base58 alphabet.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// Base58 decoding failed for a reason other than a bad symbol.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Decoded data cannot hold a version byte and a 4-byte checksum.
    #[error("decoded address too short: {0} bytes")]
    TooShort(usize),

    /// Version byte is not one of the accepted network prefixes.
    #[error("unexpected version byte 0x{got:02x}")]
    VersionMismatch { got: u8 },

    /// Base58Check checksum does not match.
    #[error("checksum failed")]
    ChecksumMismatch,

    /// Validator configuration could not be loaded.
    #[error("invalid validator config: {0}")]
    InvalidConfig(String),
}

impl From<PrimitivesError> for AddressError {
    fn from(e: PrimitivesError) -> Self {
        match e {
            PrimitivesError::InvalidBase58Char { ch, position } => {
                AddressError::InvalidCharacter { ch, position }
            }
            PrimitivesError::InvalidBase58(msg) => AddressError::InvalidEncoding(msg),
            PrimitivesError::TooShortForChecksum(len) => AddressError::TooShort(len),
            PrimitivesError::ChecksumMismatch => AddressError::ChecksumMismatch,
        }
    }
}

impl From<serde_json::Error> for AddressError {
    fn from(e: serde_json::Error) -> Self {
        AddressError::InvalidConfig(e.to_string())
    }
}
