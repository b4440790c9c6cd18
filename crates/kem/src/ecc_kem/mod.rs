// File: crates/kem/src/ecc_kem/mod.rs
//! ECC-KEM: the classical half of the composite KEM
//!
//! An ephemeral ECDH-X exchange whose key share is hashed together with the
//! ephemeral and recipient public points:
//!
//! ```text
//! ecc_ciphertext = ephemeral_public
//! key_share      = SHA3(X || ecc_ciphertext || recipient_public)
//! ```
//!
//! X25519 uses SHA3-256 and X448 uses SHA3-512.

use crate::ecdh_x;
use pkcrypt_algorithms::digest_parts;
use pkcrypt_api::{Error, Kem, KeyPair, Result};
use pkcrypt_params::{EcdhXAlgorithm, HashAlgorithm};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Hash of the key share for a curve
pub fn key_share_hash(algo: EcdhXAlgorithm) -> HashAlgorithm {
    match algo {
        EcdhXAlgorithm::X25519 => HashAlgorithm::Sha3_256,
        EcdhXAlgorithm::X448 => HashAlgorithm::Sha3_512,
    }
}

/// Encapsulate a key share to `recipient_public_key`
///
/// Returns the ephemeral public point (the ECC ciphertext) and the key share.
pub fn encaps<R: CryptoRng + RngCore>(
    algo: EcdhXAlgorithm,
    recipient_public_key: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let ephemeral = ecdh_x::generate_ephemeral_key_pair(algo, rng)?;
    let shared_secret = ecdh_x::get_shared_secret(algo, &ephemeral.secret_key, recipient_public_key)?;

    let key_share = key_share(algo, &shared_secret, &ephemeral.public_key, recipient_public_key);
    Ok((ephemeral.public_key, key_share))
}

/// Recover the key share from an ECC ciphertext
pub fn decaps(
    algo: EcdhXAlgorithm,
    ecc_ciphertext: &[u8],
    secret_key: &[u8],
    public_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    Error::check_length("ECC-KEM public key", algo.payload_size(), public_key.len())?;
    let shared_secret = ecdh_x::get_shared_secret(algo, secret_key, ecc_ciphertext)?;
    Ok(key_share(algo, &shared_secret, ecc_ciphertext, public_key))
}

fn key_share(
    algo: EcdhXAlgorithm,
    shared_secret: &[u8],
    ecc_ciphertext: &[u8],
    public_key: &[u8],
) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(digest_parts(
        key_share_hash(algo),
        &[shared_secret, ecc_ciphertext, public_key],
    ))
}

macro_rules! ecc_kem {
    ($name:ident, $algo:expr, $size:expr, $label:literal) => {
        #[doc = concat!("ECC-KEM over ", $label)]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Kem for $name {
            const PUBLIC_KEY_LEN: usize = $size;
            const SECRET_KEY_LEN: usize = $size;
            const CIPHERTEXT_LEN: usize = $size;

            fn name() -> &'static str {
                $label
            }

            fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<KeyPair> {
                ecdh_x::generate($algo, rng)
            }

            fn encapsulate<R: CryptoRng + RngCore>(
                rng: &mut R,
                public_key: &[u8],
            ) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
                encaps($algo, public_key, rng)
            }

            fn decapsulate(
                ciphertext: &[u8],
                secret_key: &[u8],
                public_key: &[u8],
            ) -> Result<Zeroizing<Vec<u8>>> {
                decaps($algo, ciphertext, secret_key, public_key)
            }
        }
    };
}

ecc_kem!(
    X25519Kem,
    EcdhXAlgorithm::X25519,
    pkcrypt_params::traditional::montgomery::X25519_PAYLOAD_SIZE,
    "X25519"
);
ecc_kem!(
    X448Kem,
    EcdhXAlgorithm::X448,
    pkcrypt_params::traditional::montgomery::X448_PAYLOAD_SIZE,
    "X448"
);
