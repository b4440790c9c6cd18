//! Digital signature traits for pkcrypt
//!
//! This module defines the trait implemented by fixed-parameter signature
//! schemes. The ECDSA engine is not expressed through it because its curve
//! and hash are chosen at run time.

use crate::{KeyPair, Result};
use rand::{CryptoRng, RngCore};

/// Core trait for fixed-parameter digital signature algorithms
///
/// Keys and signatures are the scheme's standard byte encodings.
pub trait Signature {
    /// The byte length of the public key.
    const PUBLIC_KEY_LEN: usize;
    /// The byte length of the secret key.
    const SECRET_KEY_LEN: usize;
    /// The byte length of a signature.
    const SIGNATURE_LEN: usize;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair>;

    /// Sign a message using the secret key
    fn sign(message: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature on a message using the public key
    ///
    /// A signature that does not verify is `Ok(false)`; only malformed key
    /// encodings are errors.
    fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;
}
