// File: crates/sign/src/ecdsa/mod.rs
//! ECDSA over the NIST curves and secp256k1
//!
//! Every call walks an ordered list of backends for the curve. The
//! platform-accelerated backend comes first when it is compiled in, the
//! curve supports it and the whole message is at hand; the software backend
//! always comes last. A backend that answers [`Error::BackendUnsupported`]
//! hands over to the next one; any other error ends the call.
//!
//! Signatures are `r` and `s` as fixed-width big-endian integers of the
//! curve's payload size. Non-canonical (high-S) signatures are produced and
//! accepted.

#[cfg(feature = "accelerated")]
pub mod accelerated;
#[cfg(feature = "legacy-leading-zero")]
mod compat;
pub mod software;

use pkcrypt_algorithms::{digest, random_bytes};
use pkcrypt_api::{fixed_width, EcdsaSignature, Error, KeyPair, Result};
use pkcrypt_params::{AcceleratedSupport, Curve, CurveDescriptor, HashAlgorithm};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

/// What is being signed or verified
#[derive(Clone, Copy, Debug)]
pub struct SignatureInput<'a> {
    /// Hash the digest was computed with
    pub hash: HashAlgorithm,
    /// The whole message, or `None` when it was streamed into the hash
    pub message: Option<&'a [u8]>,
    /// Digest of the message under `hash`
    pub hashed: &'a [u8],
}

/// One ECDSA implementation
///
/// Each backend classifies its own failures: an operation it cannot perform
/// is reported as [`Error::BackendUnsupported`], anything else is final.
pub trait EcdsaBackend: Sync {
    fn name(&self) -> &'static str;

    fn sign(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        public_key: &[u8],
        secret_key: &[u8],
    ) -> Result<EcdsaSignature>;

    /// `Ok(false)` for a signature that does not verify
    fn verify(
        &self,
        curve: &'static CurveDescriptor,
        input: &SignatureInput<'_>,
        signature: &EcdsaSignature,
        public_key: &[u8],
    ) -> Result<bool>;
}

#[cfg(feature = "accelerated")]
fn accelerated_backend() -> Option<&'static dyn EcdsaBackend> {
    Some(&accelerated::ACCELERATED)
}

#[cfg(not(feature = "accelerated"))]
fn accelerated_backend() -> Option<&'static dyn EcdsaBackend> {
    None
}

/// Backends to try for `curve`, in order
fn candidates(curve: &CurveDescriptor, streaming: bool) -> Vec<&'static dyn EcdsaBackend> {
    let mut backends: Vec<&'static dyn EcdsaBackend> = Vec::with_capacity(2);
    if !streaming && matches!(curve.accelerated, AcceleratedSupport::Available { .. }) {
        backends.extend(accelerated_backend());
    }
    backends.push(&software::SOFTWARE);
    backends
}

fn dispatch<T>(
    curve: &'static CurveDescriptor,
    input: &SignatureInput<'_>,
    mut operation: impl FnMut(&dyn EcdsaBackend) -> Result<T>,
) -> Result<T> {
    for backend in candidates(curve, input.message.is_none()) {
        match operation(backend) {
            Err(err) if err.is_backend_unsupported() => {
                tracing::debug!(
                    curve = curve.name,
                    backend = backend.name(),
                    reason = %err,
                    "ECDSA backend unsupported, falling back"
                );
            }
            result => return result,
        }
    }
    // The software backend never reports itself unsupported
    Err(Error::unsupported("ECDSA backend", curve.name))
}

/// Generate a key pair
///
/// The public key is the uncompressed SEC1 point, the secret key the
/// big-endian scalar of the curve's payload size.
pub fn generate<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> KeyPair {
    software::generate(curve.descriptor(), rng)
}

/// Sign a digest
///
/// # Arguments
/// * `curve` - The named curve
/// * `hash` - Hash `hashed` was computed with
/// * `message` - The whole message, or `None` for a streamed one (software only)
/// * `public_key` - Uncompressed SEC1 point
/// * `secret_key` - Big-endian scalar
/// * `hashed` - The digest to sign
pub fn sign(
    curve: Curve,
    hash: HashAlgorithm,
    message: Option<&[u8]>,
    public_key: &[u8],
    secret_key: &[u8],
    hashed: &[u8],
) -> Result<EcdsaSignature> {
    let descriptor = curve.descriptor();
    let input = SignatureInput {
        hash,
        message,
        hashed,
    };
    dispatch(descriptor, &input, |backend| {
        backend.sign(descriptor, &input, public_key, secret_key)
    })
}

/// Verify a signature over a digest
///
/// A signature that does not verify is `Ok(false)`. A public key that is
/// not a point on the curve is an error.
pub fn verify(
    curve: Curve,
    hash: HashAlgorithm,
    signature: &EcdsaSignature,
    message: Option<&[u8]>,
    public_key: &[u8],
    hashed: &[u8],
) -> Result<bool> {
    let descriptor = curve.descriptor();
    software::check_public_key(descriptor, public_key)?;

    let Some(signature) = fit_to_payload(descriptor, signature) else {
        return Ok(false);
    };

    let input = SignatureInput {
        hash,
        message,
        hashed,
    };
    if dispatch(descriptor, &input, |backend| {
        backend.verify(descriptor, &input, &signature, public_key)
    })? {
        return Ok(true);
    }

    #[cfg(feature = "legacy-leading-zero")]
    if compat::verify_stripped_leading_zero(descriptor, &signature, public_key, hashed)? {
        return Ok(true);
    }

    Ok(false)
}

/// Check that `public_key` belongs to `secret_key`
///
/// Curves with a platform backend sign a random 8-byte message hashed with
/// SHA-256 and verify the result, exercising that backend. Software-only
/// curves recompute the public point and compare it in constant time.
/// Every failure, including a backend error, is `false`.
pub fn validate_params<R: CryptoRng + RngCore>(
    curve: Curve,
    public_key: &[u8],
    secret_key: &[u8],
    rng: &mut R,
) -> bool {
    let checked = match curve.descriptor().accelerated {
        AcceleratedSupport::Available { .. } => {
            sign_verify_round_trip(curve, public_key, secret_key, rng)
        }
        AcceleratedSupport::Unavailable => {
            recompute_public_key(curve.descriptor(), public_key, secret_key)
        }
    };
    match checked {
        Ok(valid) => valid,
        Err(err) => {
            tracing::debug!(?curve, %err, "ECDSA parameter validation failed");
            false
        }
    }
}

fn sign_verify_round_trip<R: CryptoRng + RngCore>(
    curve: Curve,
    public_key: &[u8],
    secret_key: &[u8],
    rng: &mut R,
) -> Result<bool> {
    let message = random_bytes(rng, 8)?;
    let hashed = digest(HashAlgorithm::Sha256, &message);
    let signature = sign(
        curve,
        HashAlgorithm::Sha256,
        Some(message.as_slice()),
        public_key,
        secret_key,
        &hashed,
    )?;
    verify(
        curve,
        HashAlgorithm::Sha256,
        &signature,
        Some(message.as_slice()),
        public_key,
        &hashed,
    )
}

fn recompute_public_key(
    curve: &CurveDescriptor,
    public_key: &[u8],
    secret_key: &[u8],
) -> Result<bool> {
    let expected = software::public_key(curve, secret_key)?;
    Ok(expected.len() == public_key.len() && bool::from(expected.ct_eq(public_key)))
}

/// Left-pad `r` and `s` to the payload size; `None` when either is wider
fn fit_to_payload(curve: &CurveDescriptor, signature: &EcdsaSignature) -> Option<EcdsaSignature> {
    let fit = |value: &[u8]| {
        let significant = value
            .iter()
            .position(|&b| b != 0)
            .map_or(&[][..], |i| &value[i..]);
        (significant.len() <= curve.payload_size)
            .then(|| fixed_width(significant, curve.payload_size))
    };
    Some(EcdsaSignature {
        r: fit(&signature.r)?,
        s: fit(&signature.s)?,
    })
}
