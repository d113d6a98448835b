//! SolarCoin SDK - Hashing and Base58Check primitives.
//!
//! This crate provides the building blocks for address handling:
//! - Hash functions (SHA-256, SHA-256d) and the 4-byte Base58Check checksum
//! - Base58 encoding/decoding over the Bitcoin alphabet
//! - Base58Check encoding/decoding with checksum verification

pub mod hash;
pub mod base58;

mod error;
pub use error::PrimitivesError;
