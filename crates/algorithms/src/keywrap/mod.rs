//! RFC 3394 AES key wrap
//!
//! Unwrap failures are always reported as [`Error::UnwrapIntegrity`];
//! callers must never retry them.

use aes_kw::{KekAes128, KekAes192, KekAes256};
use pkcrypt_api::{Error, Result};
use pkcrypt_params::utils::symmetric::AES_KW_OVERHEAD;
use pkcrypt_params::SymmetricAlgorithm;
use zeroize::Zeroizing;

/// Wrap `plaintext` under `kek`
pub fn wrap(cipher: SymmetricAlgorithm, kek: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    check_kek(cipher, kek)?;
    if plaintext.len() < 16 || plaintext.len() % 8 != 0 {
        return Err(Error::InvalidParameter {
            context: "key wrap",
            message: format!(
                "plaintext must be a multiple of 8 bytes and at least 16, got {}",
                plaintext.len()
            ),
        });
    }

    let wrapped = match cipher {
        SymmetricAlgorithm::Aes128 => KekAes128::from(to_array::<16>(kek)?).wrap_vec(plaintext),
        SymmetricAlgorithm::Aes192 => KekAes192::from(to_array::<24>(kek)?).wrap_vec(plaintext),
        SymmetricAlgorithm::Aes256 => KekAes256::from(to_array::<32>(kek)?).wrap_vec(plaintext),
    };

    wrapped.map_err(|e| Error::InvalidParameter {
        context: "key wrap",
        message: e.to_string(),
    })
}

/// Unwrap `wrapped` under `kek`, checking the RFC 3394 integrity value
pub fn unwrap(cipher: SymmetricAlgorithm, kek: &[u8], wrapped: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    check_kek(cipher, kek)?;
    if wrapped.len() < 16 + AES_KW_OVERHEAD || wrapped.len() % 8 != 0 {
        return Err(Error::UnwrapIntegrity {
            context: "malformed wrapped key",
        });
    }

    let unwrapped = match cipher {
        SymmetricAlgorithm::Aes128 => KekAes128::from(to_array::<16>(kek)?).unwrap_vec(wrapped),
        SymmetricAlgorithm::Aes192 => KekAes192::from(to_array::<24>(kek)?).unwrap_vec(wrapped),
        SymmetricAlgorithm::Aes256 => KekAes256::from(to_array::<32>(kek)?).unwrap_vec(wrapped),
    };

    unwrapped
        .map(Zeroizing::new)
        .map_err(|_| Error::UnwrapIntegrity { context: "key unwrap" })
}

fn check_kek(cipher: SymmetricAlgorithm, kek: &[u8]) -> Result<()> {
    Error::check_length("key-encryption key", cipher.key_size(), kek.len())
}

fn to_array<const N: usize>(kek: &[u8]) -> Result<[u8; N]> {
    Ok(kek.try_into()?)
}
