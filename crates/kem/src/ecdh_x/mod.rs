// File: crates/kem/src/ecdh_x/mod.rs
//! ECDH-X: key agreement over Montgomery curves
//!
//! Session keys are protected by a key-encryption key (KEK) derived from
//! the X25519 or X448 shared secret:
//!
//! ```text
//! KEK = HKDF(hash, ephemeral_public || recipient_public || shared_secret,
//!            salt = "", info = "OpenPGP X25519" | "OpenPGP X448")
//! wrapped_key = AESKeyWrap(KEK, session_key)
//! ```
//!
//! Binding both public keys into the derivation ties the wrapped key to the
//! two parties. The concatenation order and the info labels are part of the
//! wire format.
//!
//! | Variant | Scalar | Hash    | Key wrap |
//! |---------|--------|---------|----------|
//! | X25519  | 32     | SHA-256 | AES-128  |
//! | X448    | 56     | SHA-512 | AES-256  |

mod curve25519;
mod curve448;

use pkcrypt_algorithms::{hkdf, keywrap, random_bytes};
use pkcrypt_api::{EcdhXCiphertext, KeyPair, Result, ResultExt};
use pkcrypt_params::EcdhXAlgorithm;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Generate a key pair
///
/// # Arguments
/// * `algo` - The curve variant
/// * `rng` - Source of the secret scalar
///
/// # Returns
/// The public point and the raw scalar in the curve's native little-endian
/// encoding. Clamping is applied when the scalar is used, not stored.
pub fn generate<R: CryptoRng + RngCore>(algo: EcdhXAlgorithm, rng: &mut R) -> Result<KeyPair> {
    let secret_key = random_bytes(rng, algo.payload_size())?;
    let public_key = public_key(algo, &secret_key)?;
    Ok(KeyPair {
        public_key,
        secret_key,
    })
}

/// Generate a per-message ephemeral key pair
///
/// Same derivation as [`generate`]. The secret half must be dropped as soon
/// as the shared secret has been computed.
pub fn generate_ephemeral_key_pair<R: CryptoRng + RngCore>(
    algo: EcdhXAlgorithm,
    rng: &mut R,
) -> Result<KeyPair> {
    generate(algo, rng)
}

/// Check that `public_key` is the point derived from `secret_key`
///
/// Never fails: a mismatch or malformed key is reported as `false`.
pub fn validate_params(algo: EcdhXAlgorithm, public_key: &[u8], secret_key: &[u8]) -> bool {
    match self::public_key(algo, secret_key) {
        Ok(derived) => derived.as_slice().ct_eq(public_key).into(),
        Err(err) => {
            tracing::debug!(?algo, %err, "ECDH-X parameter validation failed");
            false
        }
    }
}

/// Raw scalar multiplication of `peer_public_key` by `secret_key`
///
/// # Security
/// The output is not a symmetric key. It must go through a key derivation
/// before use.
pub fn get_shared_secret(
    algo: EcdhXAlgorithm,
    secret_key: &[u8],
    peer_public_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    match algo {
        EcdhXAlgorithm::X25519 => curve25519::shared_secret(secret_key, peer_public_key),
        EcdhXAlgorithm::X448 => curve448::shared_secret(secret_key, peer_public_key),
    }
}

/// Wrap `session_key` to `recipient_public_key`
///
/// # Arguments
/// * `algo` - The curve variant
/// * `session_key` - Key material to protect; a multiple of 8 bytes, at least 16
/// * `recipient_public_key` - The recipient's public point
/// * `rng` - Source of the ephemeral scalar
///
/// # Returns
/// The ephemeral public point and the wrapped session key
pub fn encrypt<R: CryptoRng + RngCore>(
    algo: EcdhXAlgorithm,
    session_key: &[u8],
    recipient_public_key: &[u8],
    rng: &mut R,
) -> Result<EcdhXCiphertext> {
    let descriptor = algo.descriptor();

    // 1. Fresh ephemeral key pair
    let ephemeral = generate_ephemeral_key_pair(algo, rng)?;

    // 2. Shared secret with the recipient
    let shared_secret = get_shared_secret(algo, &ephemeral.secret_key, recipient_public_key)?;

    // 3. KEK bound to both public keys
    let kek = derive_kek(algo, &ephemeral.public_key, recipient_public_key, &shared_secret)?;

    // 4. Wrap
    let wrapped_key =
        keywrap::wrap(descriptor.cipher, &kek, session_key).with_context("ECDH-X key wrap")?;

    Ok(EcdhXCiphertext {
        ephemeral_public_key: ephemeral.public_key,
        wrapped_key,
    })
}

/// Recover a session key wrapped by [`encrypt`]
///
/// # Errors
/// [`pkcrypt_api::Error::UnwrapIntegrity`] when the wrapped key does not
/// authenticate under the recomputed KEK.
pub fn decrypt(
    algo: EcdhXAlgorithm,
    ephemeral_public_key: &[u8],
    wrapped_key: &[u8],
    own_public_key: &[u8],
    own_secret_key: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let descriptor = algo.descriptor();

    let shared_secret = get_shared_secret(algo, own_secret_key, ephemeral_public_key)?;
    let kek = derive_kek(algo, ephemeral_public_key, own_public_key, &shared_secret)?;

    keywrap::unwrap(descriptor.cipher, &kek, wrapped_key).with_context("ECDH-X key unwrap")
}

/// Scalar, public point and shared secret size of the variant
pub fn payload_size(algo: EcdhXAlgorithm) -> usize {
    algo.payload_size()
}

/// Fixed-base scalar multiplication
pub(crate) fn public_key(algo: EcdhXAlgorithm, secret_key: &[u8]) -> Result<Vec<u8>> {
    match algo {
        EcdhXAlgorithm::X25519 => curve25519::public_key(secret_key),
        EcdhXAlgorithm::X448 => curve448::public_key(secret_key),
    }
}

fn derive_kek(
    algo: EcdhXAlgorithm,
    ephemeral_public_key: &[u8],
    recipient_public_key: &[u8],
    shared_secret: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let descriptor = algo.descriptor();

    let mut ikm = Zeroizing::new(Vec::with_capacity(3 * descriptor.payload_size));
    ikm.extend_from_slice(ephemeral_public_key);
    ikm.extend_from_slice(recipient_public_key);
    ikm.extend_from_slice(shared_secret);

    hkdf(
        descriptor.hash,
        &ikm,
        &[],
        descriptor.hkdf_info,
        descriptor.cipher.key_size(),
    )
}
