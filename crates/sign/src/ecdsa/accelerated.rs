//! Platform-accelerated ECDSA through aws-lc
//!
//! aws-lc hashes the message itself, so this backend needs the full message
//! and only covers the curve / hash pairs it ships fixed-width algorithms
//! for. Anything else is reported as unsupported and handled by software.
//!
//! | Curve | Sign and verify |
//! |-------|-----------------|
//! | P-256 | SHA-256         |
//! | P-384 | SHA-384         |
//! | P-521 | SHA-512         |

use super::{EcdsaBackend, SignatureInput};
use crate::error::accelerated::{key_rejected, unspecified, unsupported};
use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    self, EcdsaKeyPair, EcdsaSigningAlgorithm, EcdsaVerificationAlgorithm, UnparsedPublicKey,
};
use pkcrypt_api::{EcdsaSignature, Result};
use pkcrypt_params::{AcceleratedSupport, Curve, CurveDescriptor, HashAlgorithm};

/// The aws-lc backend
#[derive(Clone, Copy, Debug, Default)]
pub struct Accelerated;

pub static ACCELERATED: Accelerated = Accelerated;

fn signing_algorithm(curve: Curve, hash: HashAlgorithm) -> Option<&'static EcdsaSigningAlgorithm> {
    match (curve, hash) {
        (Curve::NistP256, HashAlgorithm::Sha256) => Some(&signature::ECDSA_P256_SHA256_FIXED_SIGNING),
        (Curve::NistP384, HashAlgorithm::Sha384) => Some(&signature::ECDSA_P384_SHA384_FIXED_SIGNING),
        (Curve::NistP521, HashAlgorithm::Sha512) => Some(&signature::ECDSA_P521_SHA512_FIXED_SIGNING),
        _ => None,
    }
}

fn verification_algorithm(
    curve: Curve,
    hash: HashAlgorithm,
) -> Option<&'static EcdsaVerificationAlgorithm> {
    match (curve, hash) {
        (Curve::NistP256, HashAlgorithm::Sha256) => Some(&signature::ECDSA_P256_SHA256_FIXED),
        (Curve::NistP384, HashAlgorithm::Sha384) => Some(&signature::ECDSA_P384_SHA384_FIXED),
        (Curve::NistP521, HashAlgorithm::Sha512) => Some(&signature::ECDSA_P521_SHA512_FIXED),
        _ => None,
    }
}

/// Whether accelerated failures on `curve` are fatal
fn failures_fatal(curve: &CurveDescriptor) -> Result<bool> {
    match curve.accelerated {
        AcceleratedSupport::Available { failures_fatal } => Ok(failures_fatal),
        AcceleratedSupport::Unavailable => Err(unsupported(format!(
            "no accelerated implementation of {}",
            curve.name
        ))),
    }
}

impl EcdsaBackend for Accelerated {
    fn name(&self) -> &'static str {
        "aws-lc"
    }

    fn sign(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<EcdsaSignature> {
        let failures_fatal = failures_fatal(curve)?;
        let message = input
            .message
            .ok_or_else(|| unsupported("streamed message"))?;
        let algorithm = signing_algorithm(curve.curve, input.hash).ok_or_else(|| {
            unsupported(format!("signing {} with {}", curve.name, input.hash.name()))
        })?;

        let key_pair =
            EcdsaKeyPair::from_private_key_and_public_key(algorithm, secret_key, public_key)
                .map_err(key_rejected(failures_fatal, "accelerated ECDSA key"))?;
        let signature = key_pair
            .sign(&SystemRandom::new(), message)
            .map_err(unspecified(failures_fatal, "accelerated ECDSA signing"))?;

        let rs = signature.as_ref();
        if rs.len() != 2 * curve.payload_size {
            return Err(unsupported(format!(
                "unexpected {}-byte signature for {}",
                rs.len(),
                curve.name
            )));
        }
        let (r, s) = rs.split_at(curve.payload_size);
        Ok(EcdsaSignature::from_integers(r, s, curve.payload_size))
    }

    fn verify(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        signature: &EcdsaSignature,
        public_key: &[u8],
    ) -> Result<bool> {
        let failures_fatal = failures_fatal(curve)?;
        let message = input
            .message
            .ok_or_else(|| unsupported("streamed message"))?;
        let algorithm = verification_algorithm(curve.curve, input.hash).ok_or_else(|| {
            unsupported(format!("verifying {} with {}", curve.name, input.hash.name()))
        })?;

        // The public key has been checked structurally by the dispatcher, so
        // a rejection here is about the signature
        let public_key = UnparsedPublicKey::new(algorithm, public_key);
        match public_key.verify(message, &signature.to_bytes()) {
            Ok(()) => Ok(true),
            Err(_) if failures_fatal => Ok(false),
            Err(_) => Err(unsupported(format!(
                "{} verification rejected, deferring to software",
                curve.name
            ))),
        }
    }
}
