// File: crates/hybrid/src/kem/mod.rs

//! Composite ML-KEM + ECC key encapsulation
//!
//! Each pairing runs an ECC-KEM and an ML-KEM side by side, combines both
//! shares with KMAC256 into a 256-bit KEK and wraps the session key under
//! it with AES-256 key wrap. Corrupting either ciphertext changes the KEK,
//! so decryption fails with [`Error::UnwrapIntegrity`].
//!
//! [`Error::UnwrapIntegrity`]: pkcrypt_api::Error::UnwrapIntegrity

pub mod combiner;
mod engine;


pub use combiner::multi_key_combine;
pub use engine::{Encapsulation, HybridKemEngine};

use pkcrypt_algorithms::keywrap;
use pkcrypt_api::{CompositeCiphertext, CompositeKeyPair, Result, ResultExt};
use pkcrypt_kem::{ecdh_x, MlKem1024, MlKem768, X25519Kem, X448Kem};
use pkcrypt_params::CompositeKemAlgorithm;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// ML-KEM-768 + X25519
pub type MlKem768X25519 = HybridKemEngine<X25519Kem, MlKem768>;

/// ML-KEM-1024 + X448
pub type MlKem1024X448 = HybridKemEngine<X448Kem, MlKem1024>;

/// Generate a composite key pair
pub fn generate<R: CryptoRng + RngCore>(
    algo: CompositeKemAlgorithm,
    rng: &mut R,
) -> Result<CompositeKeyPair> {
    match algo {
        CompositeKemAlgorithm::MlKem768X25519 => MlKem768X25519::keypair(rng),
        CompositeKemAlgorithm::MlKem1024X448 => MlKem1024X448::keypair(rng),
    }
}

/// Encapsulate to both public keys and wrap `session_key` under the
/// combined KEK
pub fn encrypt<R: CryptoRng + RngCore>(
    algo: CompositeKemAlgorithm,
    ecc_public_key: &[u8],
    mlkem_public_key: &[u8],
    session_key: &[u8],
    rng: &mut R,
) -> Result<CompositeCiphertext> {
    let Encapsulation {
        ecc_ciphertext,
        mlkem_ciphertext,
        kek,
    } = match algo {
        CompositeKemAlgorithm::MlKem768X25519 => {
            MlKem768X25519::encapsulate(rng, ecc_public_key, mlkem_public_key, algo.id())?
        }
        CompositeKemAlgorithm::MlKem1024X448 => {
            MlKem1024X448::encapsulate(rng, ecc_public_key, mlkem_public_key, algo.id())?
        }
    };

    let wrapped_key = keywrap::wrap(algo.descriptor().cipher, &kek, session_key)
        .with_context("composite KEM key wrap")?;
    Ok(CompositeCiphertext {
        ecc_ciphertext,
        mlkem_ciphertext,
        wrapped_key,
    })
}

/// Recover the session key
pub fn decrypt(
    algo: CompositeKemAlgorithm,
    ecc_ciphertext: &[u8],
    mlkem_ciphertext: &[u8],
    ecc_secret_key: &[u8],
    ecc_public_key: &[u8],
    mlkem_secret_key: &[u8],
    wrapped_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let kek = match algo {
        CompositeKemAlgorithm::MlKem768X25519 => MlKem768X25519::decapsulate(
            ecc_ciphertext,
            mlkem_ciphertext,
            ecc_secret_key,
            ecc_public_key,
            mlkem_secret_key,
            algo.id(),
        )?,
        CompositeKemAlgorithm::MlKem1024X448 => MlKem1024X448::decapsulate(
            ecc_ciphertext,
            mlkem_ciphertext,
            ecc_secret_key,
            ecc_public_key,
            mlkem_secret_key,
            algo.id(),
        )?,
    };

    keywrap::unwrap(algo.descriptor().cipher, &kek, wrapped_key)
        .with_context("composite KEM key unwrap")
}

/// Check both component key pairs
///
/// The ECC public point is recomputed from the secret scalar; the ML-KEM
/// public key must be the one embedded in the decapsulation key.
pub fn validate_params(
    algo: CompositeKemAlgorithm,
    ecc_public_key: &[u8],
    ecc_secret_key: &[u8],
    mlkem_public_key: &[u8],
    mlkem_secret_key: &[u8],
) -> bool {
    let descriptor = algo.descriptor();
    if !ecdh_x::validate_params(descriptor.ecc, ecc_public_key, ecc_secret_key) {
        return false;
    }
    match algo {
        CompositeKemAlgorithm::MlKem768X25519 => {
            MlKem768::validate_params(mlkem_public_key, mlkem_secret_key)
        }
        CompositeKemAlgorithm::MlKem1024X448 => {
            MlKem1024::validate_params(mlkem_public_key, mlkem_secret_key)
        }
    }
}
