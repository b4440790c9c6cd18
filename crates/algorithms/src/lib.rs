//! Collaborator adapters for the pkcrypt library
//!
//! The public-key operations consume hashing, key derivation, key wrapping
//! and randomness but do not implement them. This crate puts a narrow,
//! identifier-driven interface in front of the RustCrypto implementations:
//!
//! - [`hash`]: fixed-output digests selected by [`HashAlgorithm`]
//! - [`kdf`]: HKDF and KMAC256
//! - [`keywrap`]: RFC 3394 AES key wrap
//! - [`lazy`]: once-initialised handles for optional primitives
//!
//! [`HashAlgorithm`]: pkcrypt_params::HashAlgorithm

pub mod hash;
pub mod kdf;
pub mod keywrap;
pub mod lazy;

pub use hash::{digest, digest_parts};
pub use kdf::{hkdf, kmac256, Kmac256};
pub use keywrap::{unwrap, wrap};
pub use lazy::LazyPrimitive;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Draw `len` random bytes into a zeroizing buffer
pub fn random_bytes<R: CryptoRng + RngCore>(
    rng: &mut R,
    len: usize,
) -> pkcrypt_api::Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(vec![0u8; len]);
    rng.try_fill_bytes(&mut out)?;
    Ok(out)
}
