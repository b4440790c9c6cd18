//! Constants and identifiers for hash functions

use pkcrypt_api::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Rate of Keccak[512] (cSHAKE256, KMAC256) in bytes
pub const KECCAK_512_RATE: usize = 136;

/// Hash algorithms, tagged with their OpenPGP identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum HashAlgorithm {
    Sha256 = 8,
    Sha384 = 9,
    Sha512 = 10,
    Sha224 = 11,
    Sha3_256 = 12,
    Sha3_512 = 14,
}

impl HashAlgorithm {
    /// Digest length in bytes
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha224 => SHA224_OUTPUT_SIZE,
            Self::Sha256 => SHA256_OUTPUT_SIZE,
            Self::Sha384 => SHA384_OUTPUT_SIZE,
            Self::Sha512 => SHA512_OUTPUT_SIZE,
            Self::Sha3_256 => SHA3_256_OUTPUT_SIZE,
            Self::Sha3_512 => SHA3_512_OUTPUT_SIZE,
        }
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
        }
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            8 => Ok(Self::Sha256),
            9 => Ok(Self::Sha384),
            10 => Ok(Self::Sha512),
            11 => Ok(Self::Sha224),
            12 => Ok(Self::Sha3_256),
            14 => Ok(Self::Sha3_512),
            other => Err(Error::unsupported("hash algorithm", other)),
        }
    }
}
