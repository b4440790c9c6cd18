//! Digital Signature Schemes
//!
//! This crate implements the signature engines of pkcrypt:
//!
//! - [`ecdsa`]: ECDSA over P-256, P-384, P-521 and secp256k1, with an
//!   optional platform-accelerated backend in front of the software one
//! - [`ml_dsa`]: ML-DSA-65 and ML-DSA-87

pub(crate) mod error;

#[cfg(feature = "traditional")]
pub mod ecdsa;
#[cfg(feature = "post-quantum")]
pub mod ml_dsa;

// Re-exports from traditional schemes
#[cfg(feature = "traditional")]
pub use ecdsa::{EcdsaBackend, SignatureInput};

// Re-exports from post-quantum schemes
#[cfg(feature = "post-quantum")]
pub use ml_dsa::{MlDsa65, MlDsa87};
