//! HKDF (RFC 5869) keyed by OpenPGP hash identifier

use ::hkdf::Hkdf;
use pkcrypt_api::{Error, Result};
use pkcrypt_params::HashAlgorithm;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};
use zeroize::Zeroizing;

/// Full HKDF (Extract + Expand)
///
/// An empty `salt` is the RFC's "not provided" case: HMAC keyed with zeros.
pub fn hkdf(
    algorithm: HashAlgorithm,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let mut okm = Zeroizing::new(vec![0u8; length]);

    let expanded = match algorithm {
        HashAlgorithm::Sha224 => Hkdf::<Sha224>::new(Some(salt), ikm).expand(info, &mut okm),
        HashAlgorithm::Sha256 => Hkdf::<Sha256>::new(Some(salt), ikm).expand(info, &mut okm),
        HashAlgorithm::Sha384 => Hkdf::<Sha384>::new(Some(salt), ikm).expand(info, &mut okm),
        HashAlgorithm::Sha512 => Hkdf::<Sha512>::new(Some(salt), ikm).expand(info, &mut okm),
        HashAlgorithm::Sha3_256 => Hkdf::<Sha3_256>::new(Some(salt), ikm).expand(info, &mut okm),
        HashAlgorithm::Sha3_512 => Hkdf::<Sha3_512>::new(Some(salt), ikm).expand(info, &mut okm),
    };

    // Only fails when length exceeds 255 hash blocks
    expanded.map_err(|_| Error::InvalidLength {
        context: "HKDF output",
        expected: 255 * algorithm.output_size(),
        actual: length,
    })?;

    Ok(okm)
}
