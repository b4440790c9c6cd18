//! X25519 scalar multiplication

use pkcrypt_api::{Error, Result};
use pkcrypt_params::traditional::montgomery::X25519_PAYLOAD_SIZE;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

fn static_secret(secret_key: &[u8]) -> Result<StaticSecret> {
    let scalar: Zeroizing<[u8; X25519_PAYLOAD_SIZE]> = Zeroizing::new(
        secret_key
            .try_into()
            .map_err(|_| Error::InvalidLength {
                context: "X25519 secret key",
                expected: X25519_PAYLOAD_SIZE,
                actual: secret_key.len(),
            })?,
    );
    Ok(StaticSecret::from(*scalar))
}

pub(super) fn public_key(secret_key: &[u8]) -> Result<Vec<u8>> {
    let secret = static_secret(secret_key)?;
    Ok(PublicKey::from(&secret).as_bytes().to_vec())
}

pub(super) fn shared_secret(secret_key: &[u8], peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let peer: [u8; X25519_PAYLOAD_SIZE] =
        peer_public_key
            .try_into()
            .map_err(|_| Error::InvalidLength {
                context: "X25519 public key",
                expected: X25519_PAYLOAD_SIZE,
                actual: peer_public_key.len(),
            })?;
    let secret = static_secret(secret_key)?;

    let shared = secret.diffie_hellman(&PublicKey::from(peer));
    // Low-order peer points yield the all-zero secret
    if !shared.was_contributory() {
        return Err(Error::InvalidKey {
            context: "X25519 public key",
            message: "peer point has small order".into(),
        });
    }

    Ok(Zeroizing::new(shared.as_bytes().to_vec()))
}
