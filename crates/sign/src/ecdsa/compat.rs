//! Acceptance of signatures made over a digest with its leading zero byte
//! stripped
//!
//! Some older implementations dropped a leading zero octet of the digest
//! before signing. When the digest is wider than the curve, the truncation
//! then selects a different window of bits, so the signature only verifies
//! against the stripped digest.

use super::software;
use pkcrypt_api::{EcdsaSignature, Result};
use pkcrypt_params::CurveDescriptor;

/// Retry software verification against `hashed[1..]` when `hashed[0] == 0`
pub(super) fn verify_stripped_leading_zero(
    curve: &CurveDescriptor,
    signature: &EcdsaSignature,
    public_key: &[u8],
    hashed: &[u8],
) -> Result<bool> {
    let Some((&0, stripped)) = hashed.split_first() else {
        return Ok(false);
    };

    let valid = software::verify_prehash(curve, stripped, signature, public_key)?;
    if valid {
        tracing::debug!(
            curve = curve.name,
            "accepted ECDSA signature over digest with stripped leading zero"
        );
    }
    Ok(valid)
}
