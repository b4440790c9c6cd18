//! Key Derivation Functions
//!
//! Two derivations are used by the public-key layer:
//!
//! - [`hkdf`] derives the ECDH-X key-encryption key
//! - [`kmac256`] is the composite KEM combiner's PRF
//!
//! ```
//! use pkcrypt_algorithms::kdf::hkdf;
//! use pkcrypt_params::HashAlgorithm;
//!
//! let kek = hkdf(HashAlgorithm::Sha256, b"shared secret", &[], b"OpenPGP X25519", 16).unwrap();
//! assert_eq!(kek.len(), 16);
//! ```

pub mod hkdf;
pub mod kmac;

pub use self::hkdf::hkdf;
pub use kmac::{kmac256, Kmac256};
