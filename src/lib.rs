//! # pkcrypt
//!
//! The public-key operations of an OpenPGP engine: X25519 / X448 key
//! agreement with AES key wrap, ECDSA with an accelerated and a software
//! backend, ML-DSA signatures and the ML-KEM + ECC composite KEM.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pkcrypt = { version = "0.3", features = ["full"] }
//! ```
//!
//! ## Features
//!
//! - `traditional` (default): ECDH-X and ECDSA
//! - `post-quantum`: ML-KEM and ML-DSA
//! - `hybrid`: the composite KEM (implies both of the above)
//! - `accelerated` (default): try the aws-lc ECDSA backend before software
//! - `legacy-leading-zero` (default): accept ECDSA signatures made over a
//!   digest whose leading zero byte was stripped
//! - `serde`: serde derives on identifiers and ciphertexts
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pkcrypt-api`]: error taxonomy, data model and traits
//! - [`pkcrypt-params`]: algorithm identifiers and descriptors
//! - [`pkcrypt-algorithms`]: hash, HKDF, KMAC256 and key-wrap adapters
//! - [`pkcrypt-kem`]: ECDH-X, the ECC-KEM and ML-KEM
//! - [`pkcrypt-sign`]: ECDSA and ML-DSA
//! - [`pkcrypt-hybrid`]: the composite KEM

// Core re-exports (always available)
pub use pkcrypt_api as api;
pub use pkcrypt_params as params;

// Crates that appear in the public signatures
pub use rand;
pub use zeroize;

// Feature-gated re-exports
#[cfg(any(feature = "traditional", feature = "post-quantum"))]
pub use pkcrypt_algorithms as algorithms;

#[cfg(any(feature = "traditional", feature = "post-quantum"))]
pub use pkcrypt_kem as kem;

#[cfg(any(feature = "traditional", feature = "post-quantum"))]
pub use pkcrypt_sign as sign;

#[cfg(feature = "hybrid")]
pub use pkcrypt_hybrid as hybrid;

/// Common imports for pkcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Kem, Signature};

    // Re-export the data model
    pub use crate::api::{
        CompositeCiphertext, CompositeKeyPair, EcdhXCiphertext, EcdsaSignature, KeyPair,
    };

    // Re-export algorithm identifiers
    pub use crate::params::{
        CompositeKemAlgorithm, Curve, EcdhXAlgorithm, HashAlgorithm, MlDsaAlgorithm,
        SymmetricAlgorithm,
    };

    // Operation modules
    #[cfg(feature = "traditional")]
    pub use crate::kem::ecdh_x;

    #[cfg(feature = "traditional")]
    pub use crate::sign::ecdsa;

    #[cfg(feature = "post-quantum")]
    pub use crate::kem::{MlKem1024, MlKem768};

    #[cfg(feature = "post-quantum")]
    pub use crate::sign::ml_dsa;

    #[cfg(feature = "hybrid")]
    pub use crate::hybrid::kem as composite;
}
