//! Key agreement and Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements the classical and lattice halves of the OpenPGP
//! session-key protection schemes:
//!
//! - [`ecdh_x`]: X25519 / X448 key agreement with HKDF and AES key wrap
//! - [`ecc_kem`]: the ECC-KEM used inside the composite KEM
//! - [`mlkem`]: ML-KEM-768 / ML-KEM-1024 behind a lazily verified handle

pub mod ecc_kem;
pub mod ecdh_x;
#[cfg(feature = "post-quantum")]
pub mod mlkem;

// Re-exports
pub use ecc_kem::{X25519Kem, X448Kem};
pub use ecdh_x::{
    decrypt, encrypt, generate, generate_ephemeral_key_pair, get_shared_secret, validate_params,
};
#[cfg(feature = "post-quantum")]
pub use mlkem::{MlKem1024, MlKem768};
