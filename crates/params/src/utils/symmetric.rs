//! Constants and identifiers for the key-wrap ciphers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Integrity check value prepended by RFC 3394 key wrap, in bytes
pub const AES_KW_OVERHEAD: usize = 8;

/// Symmetric ciphers usable for key wrapping, tagged with their OpenPGP ids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SymmetricAlgorithm {
    Aes128 = 7,
    Aes192 = 8,
    Aes256 = 9,
}

impl SymmetricAlgorithm {
    /// Key size in bytes
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes128 => AES128_KEY_SIZE,
            Self::Aes192 => AES192_KEY_SIZE,
            Self::Aes256 => AES256_KEY_SIZE,
        }
    }
}
