//! Base58 encoding and decoding with optional checksum support.
//!
//! Raw Base58 goes through the `bs58` crate with Bitcoin's alphabet.
//! Base58Check appends the first four bytes of SHA-256d(data) before
//! encoding and verifies them after decoding.

use crate::PrimitivesError;
use crate::hash::{checksum, CHECKSUM_LEN};

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity. `'1'` is digit zero.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// The magnitude is emitted as the minimal big-endian byte sequence, and
/// each leading '1' character contributes one leading zero byte in front
/// of it. The empty string decodes to an empty vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or `InvalidBase58Char` for the first symbol
/// outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| decode_error(s, e))
}

/// Scanning stops at the first bad byte, so everything before `index` is
/// ASCII and the byte offset doubles as the character position.
fn decode_error(s: &str, e: bs58::decode::Error) -> PrimitivesError {
    match e {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            PrimitivesError::InvalidBase58Char { ch: character, position: index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => {
            match s.get(index..).and_then(|rest| rest.chars().next()) {
                Some(ch) => PrimitivesError::InvalidBase58Char { ch, position: index },
                None => PrimitivesError::InvalidBase58(e.to_string()),
            }
        }
        other => PrimitivesError::InvalidBase58(other.to_string()),
    }
}

/// Encode a byte slice with a 4-byte double-SHA-256 checksum appended (Base58Check).
///
/// The result is `encode(data || sha256d(data)[..4])`.
///
/// # Arguments
/// * `data` - The bytes to encode (typically version byte + payload).
///
/// # Returns
/// A Base58Check-encoded string.
pub fn check_encode(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum(data));
    encode(&payload)
}

/// Split decoded Base58Check bytes into `(payload, checksum)`.
///
/// Fails when fewer than `CHECKSUM_LEN` bytes are available.
pub fn split_checksum(decoded: &[u8]) -> Result<(&[u8], &[u8]), PrimitivesError> {
    if decoded.len() < CHECKSUM_LEN {
        return Err(PrimitivesError::TooShortForChecksum(decoded.len()));
    }
    Ok(decoded.split_at(decoded.len() - CHECKSUM_LEN))
}

/// Decode a Base58Check string, verifying the 4-byte checksum.
///
/// Convenience for callers that only need the verified payload. Address
/// validation splits with `split_checksum` itself so the version byte can
/// be compared before the checksum.
///
/// # Arguments
/// * `s` - The Base58Check string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` of the payload (without checksum) on success, or an
/// error for invalid encoding, short data or checksum mismatch.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let decoded = decode(s)?;
    let (payload, claimed) = split_checksum(&decoded)?;
    if claimed != checksum(payload) {
        return Err(PrimitivesError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
