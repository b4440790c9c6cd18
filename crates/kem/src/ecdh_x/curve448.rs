//! X448 scalar multiplication

use pkcrypt_api::{Error, Result};
use pkcrypt_params::traditional::montgomery::X448_PAYLOAD_SIZE;
use zeroize::Zeroizing;

fn secret(secret_key: &[u8]) -> Result<::x448::Secret> {
    Error::check_length("X448 secret key", X448_PAYLOAD_SIZE, secret_key.len())?;
    // Clamping happens inside the conversion
    ::x448::Secret::from_bytes(secret_key).ok_or_else(|| Error::InvalidKey {
        context: "X448 secret key",
        message: "scalar rejected".into(),
    })
}

pub(super) fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
    let secret = secret(secret_key)?;
    Ok(::x448::PublicKey::from(&secret).as_bytes().to_vec())
}

pub(super) fn shared_secret(secret_key: &[u8], peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    Error::check_length("X448 public key", X448_PAYLOAD_SIZE, peer_public_key.len())?;
    let peer = ::x448::PublicKey::from_bytes(peer_public_key).ok_or_else(|| Error::InvalidKey {
        context: "X448 public key",
        message: "peer point has small order".into(),
    })?;
    let secret = secret(secret_key)?;

    let shared = secret.as_diffie_hellman(&peer).ok_or_else(|| Error::InvalidKey {
        context: "X448 public key",
        message: "peer point has small order".into(),
    })?;

    Ok(Zeroizing::new(shared.as_bytes().to_vec()))
}
