//! Data model shared by every pkcrypt component
//!
//! All of these types are plain byte containers. Encoding them into
//! OpenPGP packets belongs to the wire-format layer, not to this crate.

use core::fmt;
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A caller-owned key pair
///
/// The secret half is held in a zeroizing buffer and cleared on drop.
#[derive(Clone)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub secret_key: Zeroizing<Vec<u8>>,
}

impl KeyPair {
    /// Create a key pair from its two halves
    pub fn new(public_key: Vec<u8>, secret_key: Vec<u8>) -> Self {
        Self {
            public_key,
            secret_key: Zeroizing::new(secret_key),
        }
    }

    /// Public half
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Secret half
    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Output of ECDH-X session-key encryption
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcdhXCiphertext {
    /// Public half of the per-message ephemeral key pair
    pub ephemeral_public_key: Vec<u8>,
    /// Session key wrapped under the derived KEK
    pub wrapped_key: Vec<u8>,
}

/// An ECDSA signature as two fixed-width big-endian integers
///
/// Both halves are exactly the curve's payload size.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcdsaSignature {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl EcdsaSignature {
    /// Build a signature from big-endian integers of any width, left-padding
    /// or trimming leading bytes to `payload_size`
    pub fn from_integers(r: &[u8], s: &[u8], payload_size: usize) -> Self {
        Self {
            r: fixed_width(r, payload_size),
            s: fixed_width(s, payload_size),
        }
    }

    /// `r || s`
    pub fn to_bytes(&self) -> Vec<u8> {
        [self.r.as_slice(), self.s.as_slice()].concat()
    }
}

/// Ciphertext of the composite ML-KEM + ECC KEM
///
/// The three parts only make sense together.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompositeCiphertext {
    /// Ephemeral ECC public value
    pub ecc_ciphertext: Vec<u8>,
    /// ML-KEM ciphertext
    pub mlkem_ciphertext: Vec<u8>,
    /// Session key wrapped under the combined KEK
    pub wrapped_key: Vec<u8>,
}

/// Key material of the composite KEM: one independent pair per component
#[derive(Clone, Debug)]
pub struct CompositeKeyPair {
    pub ecc: KeyPair,
    pub mlkem: KeyPair,
}

/// Left-pad with zeros, or drop leading bytes, so that `bytes` is exactly
/// `width` long
pub fn fixed_width(bytes: &[u8], width: usize) -> Vec<u8> {
    if bytes.len() >= width {
        bytes[bytes.len() - width..].to_vec()
    } else {
        let mut out = vec![0u8; width];
        out[width - bytes.len()..].copy_from_slice(bytes);
        out
    }
}
