//! The Base58Check validation pipeline.
//!
//! `decode → length check → version check → checksum check`, each step
//! short-circuiting with an `AddressError`. The boolean entry points map
//! any error to `false` and never panic on malformed input.

use slr_primitives::base58;
use slr_primitives::hash::checksum;

use crate::{Address, AddressError, ValidatorConfig};

/// Validates addresses against a fixed set of accepted version bytes.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Clone, Debug, Default)]
pub struct AddressValidator {
    config: ValidatorConfig,
}

impl AddressValidator {
    /// Create a validator accepting the version bytes in `config`.
    pub fn new(config: ValidatorConfig) -> Self {
        AddressValidator { config }
    }

    /// Validator for SolarCoin P2PKH addresses (version `0x12`).
    pub fn solarcoin() -> Self {
        Self::new(ValidatorConfig::solarcoin())
    }

    /// The configuration this validator checks against.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Decode and verify `address`, returning the parsed address.
    ///
    /// # Arguments
    /// * `address` - The candidate Base58Check string.
    ///
    /// # Returns
    /// The `Address`, or the first check that failed.
    pub fn check(&self, address: &str) -> Result<Address, AddressError> {
        let decoded = base58::decode(address)?;
        // Fewer than four bytes fail the split; exactly four leave no version byte.
        let (payload, claimed) = base58::split_checksum(&decoded)?;
        let Some((&version, hash)) = payload.split_first() else {
            return Err(AddressError::TooShort(decoded.len()));
        };

        if !self.config.accepts(version) {
            return Err(AddressError::VersionMismatch { got: version });
        }
        if claimed != checksum(payload) {
            return Err(AddressError::ChecksumMismatch);
        }

        Ok(Address::new(version, hash.to_vec()))
    }

    /// `true` if `address` decodes, carries an accepted version byte and
    /// its checksum matches.
    pub fn validate(&self, address: &str) -> bool {
        match self.check(address) {
            Ok(_) => {
                tracing::trace!(address, "address accepted");
                true
            }
            Err(reason) => {
                tracing::debug!(address, %reason, "address rejected");
                false
            }
        }
    }
}

/// Validate a SolarCoin address with the default configuration.
pub fn validate_address(address: &str) -> bool {
    AddressValidator::solarcoin().validate(address)
}
