//! Pure-software ECDSA over the RustCrypto curve crates
//!
//! Signs and verifies the caller's digest directly. A digest shorter than
//! the field is left-padded, which keeps its integer value; a longer one is
//! truncated to its leftmost field-size bytes.

use super::{EcdsaBackend, SignatureInput};
use crate::error::{invalid_key, signing_failed};
use pkcrypt_api::{fixed_width, EcdsaSignature, Error, KeyPair, Result};
use pkcrypt_params::{Curve, CurveDescriptor};
use rand::{CryptoRng, RngCore};
use std::borrow::Cow;

macro_rules! software_curve {
    ($module:ident, $krate:ident, normalize_s: $normalize:expr) => {
        mod $module {
            use super::*;
            use $krate::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
            use $krate::ecdsa::{Signature, SigningKey, VerifyingKey};
            use $krate::elliptic_curve::sec1::ToEncodedPoint;
            use $krate::SecretKey;

            pub(super) fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> KeyPair {
                let secret = SecretKey::random(rng);
                let public = secret.public_key().to_encoded_point(false);
                KeyPair::new(public.as_bytes().to_vec(), secret.to_bytes().to_vec())
            }

            pub(super) fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
                let secret =
                    SecretKey::from_slice(secret_key).map_err(invalid_key("ECDSA secret key"))?;
                Ok(secret.public_key().to_encoded_point(false).as_bytes().to_vec())
            }

            pub(super) fn check_public_key(public_key: &[u8]) -> Result<()> {
                VerifyingKey::from_sec1_bytes(public_key)
                    .map(|_| ())
                    .map_err(invalid_key("ECDSA public key"))
            }

            pub(super) fn sign(prehash: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
                let key =
                    SigningKey::from_slice(secret_key).map_err(invalid_key("ECDSA secret key"))?;
                let signature: Signature = key
                    .sign_prehash(prehash)
                    .map_err(signing_failed("software ECDSA signing"))?;
                Ok(signature.to_bytes().to_vec())
            }

            pub(super) fn verify(prehash: &[u8], rs: &[u8], public_key: &[u8]) -> Result<bool> {
                let key = VerifyingKey::from_sec1_bytes(public_key)
                    .map_err(invalid_key("ECDSA public key"))?;
                // Zero or out-of-range r / s
                let Ok(signature) = Signature::from_slice(rs) else {
                    return Ok(false);
                };
                let signature = if $normalize {
                    signature.normalize_s().unwrap_or(signature)
                } else {
                    signature
                };
                Ok(key.verify_prehash(prehash, &signature).is_ok())
            }
        }
    };
}

software_curve!(nist_p256, p256, normalize_s: false);
software_curve!(nist_p384, p384, normalize_s: false);
software_curve!(nist_p521, p521, normalize_s: false);
// k256 only verifies low-S signatures
software_curve!(secp256k1, k256, normalize_s: true);

/// The software backend
#[derive(Clone, Copy, Debug, Default)]
pub struct Software;

pub static SOFTWARE: Software = Software;

impl EcdsaBackend for Software {
    fn name(&self) -> &'static str {
        "software"
    }

    fn sign(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        _public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<EcdsaSignature> {
        sign_prehash(curve, input.hashed, secret_key)
    }

    fn verify(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        signature: &EcdsaSignature,
        public_key: &[u8],
    ) -> Result<bool> {
        verify_prehash(curve, input.hashed, signature, public_key)
    }
}

/// Generate a key pair: uncompressed SEC1 point and big-endian scalar
pub fn generate<R: CryptoRng + RngCore>(curve: &CurveDescriptor, rng: &mut R) -> KeyPair {
    match curve.curve {
        Curve::NistP256 => nist_p256::generate(rng),
        Curve::NistP384 => nist_p384::generate(rng),
        Curve::NistP521 => nist_p521::generate(rng),
        Curve::Secp256k1 => secp256k1::generate(rng),
    }
}

/// Uncompressed public point of a secret scalar
pub fn public_key(curve: &CurveDescriptor, secret_key: &[u8]) -> Result<Vec<u8>> {
    Error::check_length("ECDSA secret key", curve.payload_size, secret_key.len())?;
    match curve.curve {
        Curve::NistP256 => nist_p256::public_key(secret_key),
        Curve::NistP384 => nist_p384::public_key(secret_key),
        Curve::NistP521 => nist_p521::public_key(secret_key),
        Curve::Secp256k1 => secp256k1::public_key(secret_key),
    }
}

/// Structural check of a public key: length and curve membership
pub fn check_public_key(curve: &CurveDescriptor, public_key: &[u8]) -> Result<()> {
    Error::check_length("ECDSA public key", curve.public_key_size, public_key.len())?;
    match curve.curve {
        Curve::NistP256 => nist_p256::check_public_key(public_key),
        Curve::NistP384 => nist_p384::check_public_key(public_key),
        Curve::NistP521 => nist_p521::check_public_key(public_key),
        Curve::Secp256k1 => secp256k1::check_public_key(public_key),
    }
}

/// Sign a digest
pub fn sign_prehash(
    curve: &CurveDescriptor,
    hashed: &[u8],
    secret_key: &[u8],
) -> Result<EcdsaSignature> {
    Error::check_length("ECDSA secret key", curve.payload_size, secret_key.len())?;
    let prehash = prehash(curve, hashed);
    let rs = match curve.curve {
        Curve::NistP256 => nist_p256::sign(&prehash, secret_key)?,
        Curve::NistP384 => nist_p384::sign(&prehash, secret_key)?,
        Curve::NistP521 => nist_p521::sign(&prehash, secret_key)?,
        Curve::Secp256k1 => secp256k1::sign(&prehash, secret_key)?,
    };
    let (r, s) = rs.split_at(rs.len() / 2);
    Ok(EcdsaSignature::from_integers(r, s, curve.payload_size))
}

/// Verify a signature over a digest
///
/// `r` and `s` must already be exactly the payload size.
pub fn verify_prehash(
    curve: &CurveDescriptor,
    hashed: &[u8],
    signature: &EcdsaSignature,
    public_key: &[u8],
) -> Result<bool> {
    if signature.r.len() != curve.payload_size || signature.s.len() != curve.payload_size {
        return Ok(false);
    }
    let prehash = prehash(curve, hashed);
    let rs = signature.to_bytes();
    match curve.curve {
        Curve::NistP256 => nist_p256::verify(&prehash, &rs, public_key),
        Curve::NistP384 => nist_p384::verify(&prehash, &rs, public_key),
        Curve::NistP521 => nist_p521::verify(&prehash, &rs, public_key),
        Curve::Secp256k1 => secp256k1::verify(&prehash, &rs, public_key),
    }
}

fn prehash<'a>(curve: &CurveDescriptor, hashed: &'a [u8]) -> Cow<'a, [u8]> {
    if hashed.len() < curve.payload_size {
        Cow::Owned(fixed_width(hashed, curve.payload_size))
    } else {
        Cow::Borrowed(hashed)
    }
}
