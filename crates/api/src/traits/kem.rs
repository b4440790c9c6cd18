// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! The composite KEM is generic over two implementations of this trait:
//! one classical ECC-KEM and one lattice KEM. Keys and ciphertexts travel as
//! byte slices in their OpenPGP encodings, so the trait carries the fixed
//! lengths of each encoding alongside the operations.

use crate::{KeyPair, Result};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Trait for Key Encapsulation Mechanism (KEM) components.
pub trait Kem {
    /// The byte length of the public key.
    const PUBLIC_KEY_LEN: usize;
    /// The byte length of the secret key.
    const SECRET_KEY_LEN: usize;
    /// The byte length of the ciphertext.
    const CIPHERTEXT_LEN: usize;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair>;

    /// Encapsulate a fresh key share to the recipient's public key.
    ///
    /// Returns the ciphertext and the key share. The share is only ever fed
    /// into a key-derivation step.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &[u8],
    ) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)>;

    /// Recover the key share from a ciphertext.
    ///
    /// The recipient's public key is passed alongside the secret key because
    /// some components bind it into the share.
    fn decapsulate(
        ciphertext: &[u8],
        secret_key: &[u8],
        public_key: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>>;
}
