//! Parsed Base58Check wallet address.
//!
//! Holds the version byte and the identifying hash that follows it. The
//! checksum is not stored; `Display` recomputes it.

use std::fmt;
use std::str::FromStr;

use slr_primitives::base58;

use crate::{AddressError, AddressValidator};

/// A validated wallet address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    version: u8,
    hash: Vec<u8>,
}

impl Address {
    pub(crate) fn new(version: u8, hash: Vec<u8>) -> Self {
        Address { version, hash }
    }

    /// The network prefix byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The recipient hash, normally RIPEMD-160(SHA-256(pubkey)).
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Version byte followed by the hash, without checksum.
    pub fn to_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + self.hash.len());
        payload.push(self.version);
        payload.extend_from_slice(&self.hash);
        payload
    }
}

impl fmt::Display for Address {
    /// Display the address as its Base58Check string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base58::check_encode(&self.to_payload()))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse with the default (SolarCoin) validator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressValidator::default().check(s)
    }
}
