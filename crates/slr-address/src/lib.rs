//! SolarCoin SDK - Base58Check wallet address validation.
//!
//! Decodes a candidate address, checks its 4-byte SHA-256d checksum and
//! compares its version byte against the configured network prefix
//! (`0x12` for SolarCoin P2PKH by default).
//!
//! ```
//! assert!(slr_address::validate_address("8UCmLQphChvTvn1GqFxB64kC9ohU54fGog"));
//! assert!(!slr_address::validate_address("1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr"));
//! ```

pub mod address;
pub mod config;
pub mod validator;

mod error;
pub use error::AddressError;
pub use address::Address;
pub use config::{ValidatorConfig, SOLARCOIN_P2PKH_VERSION};
pub use validator::{validate_address, AddressValidator};
