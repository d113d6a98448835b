//! Validator configuration: which address version bytes are accepted.

use serde::{Deserialize, Serialize};

use crate::AddressError;

/// SolarCoin P2PKH address version byte (addresses start with '8').
pub const SOLARCOIN_P2PKH_VERSION: u8 = 0x12;

/// Accepted network prefixes for an `AddressValidator`.
///
/// Deserialization goes through the same checks as `from_json`: the list
/// must be non-empty and duplicates are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValidatorConfig")]
pub struct ValidatorConfig {
    /// Version bytes an address may start with, in configured order.
    accepted_versions: Vec<u8>,
}

/// Wire form of `ValidatorConfig`, before validation.
#[derive(Deserialize)]
struct RawValidatorConfig {
    accepted_versions: Vec<u8>,
}

impl TryFrom<RawValidatorConfig> for ValidatorConfig {
    type Error = String;

    fn try_from(raw: RawValidatorConfig) -> Result<Self, Self::Error> {
        if raw.accepted_versions.is_empty() {
            return Err("accepted_versions must not be empty".to_string());
        }
        Ok(ValidatorConfig::with_versions(raw.accepted_versions))
    }
}

impl ValidatorConfig {
    /// Accept only SolarCoin P2PKH addresses (`0x12`).
    pub fn solarcoin() -> Self {
        Self::with_version(SOLARCOIN_P2PKH_VERSION)
    }

    /// Accept a single network prefix.
    pub fn with_version(version: u8) -> Self {
        ValidatorConfig { accepted_versions: vec![version] }
    }

    /// Accept any of several prefixes, e.g. P2PKH and P2SH of one network.
    /// Duplicates are dropped, first occurrence wins.
    pub fn with_versions(versions: impl IntoIterator<Item = u8>) -> Self {
        let mut accepted_versions = Vec::new();
        for v in versions {
            if !accepted_versions.contains(&v) {
                accepted_versions.push(v);
            }
        }
        ValidatorConfig { accepted_versions }
    }

    /// Load a configuration such as `{"accepted_versions": [18]}`.
    ///
    /// An empty version list is refused since it would reject every address.
    pub fn from_json(json: &str) -> Result<Self, AddressError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The accepted version bytes, without duplicates.
    pub fn accepted_versions(&self) -> &[u8] {
        &self.accepted_versions
    }

    /// Whether `version` is one of the accepted prefixes.
    pub fn accepts(&self, version: u8) -> bool {
        self.accepted_versions.contains(&version)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::solarcoin()
    }
}
