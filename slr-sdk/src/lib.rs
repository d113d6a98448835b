#![deny(missing_docs)]

//! SolarCoin SDK - Complete SDK.
//!
//! Re-exports all SolarCoin SDK components for convenient single-crate usage.
//!
//! ```
//! use slr_sdk::address::{AddressValidator, ValidatorConfig};
//!
//! assert!(slr_sdk::validate_address("8UCmLQphChvTvn1GqFxB64kC9ohU54fGog"));
//!
//! let bitcoin = AddressValidator::new(ValidatorConfig::with_version(0x00));
//! assert!(bitcoin.validate("1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr"));
//! ```

pub use slr_primitives as primitives;
pub use slr_address as address;

pub use slr_address::validate_address;
