//! Descriptors for Montgomery-curve key agreement (ECDH-X)

use crate::utils::hash::HashAlgorithm;
use crate::utils::symmetric::SymmetricAlgorithm;
use pkcrypt_api::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of an X25519 scalar and public point in bytes
pub const X25519_PAYLOAD_SIZE: usize = 32;

/// Size of an X448 scalar and public point in bytes
pub const X448_PAYLOAD_SIZE: usize = 56;

/// Montgomery curve variants, tagged with their OpenPGP public-key ids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum EcdhXAlgorithm {
    X25519 = 25,
    X448 = 26,
}

/// Static metadata of an ECDH-X variant
///
/// The hash and cipher only drive key derivation and key wrapping; the
/// curve arithmetic is fixed by the variant itself.
#[derive(Debug)]
pub struct MontgomeryDescriptor {
    pub algorithm: EcdhXAlgorithm,
    /// Scalar, public point and shared secret size
    pub payload_size: usize,
    /// HKDF hash
    pub hash: HashAlgorithm,
    /// Key-wrap cipher; its key size is the HKDF output length
    pub cipher: SymmetricAlgorithm,
    /// HKDF info label
    pub hkdf_info: &'static [u8],
}

pub const X25519: MontgomeryDescriptor = MontgomeryDescriptor {
    algorithm: EcdhXAlgorithm::X25519,
    payload_size: X25519_PAYLOAD_SIZE,
    hash: HashAlgorithm::Sha256,
    cipher: SymmetricAlgorithm::Aes128,
    hkdf_info: b"OpenPGP X25519",
};

pub const X448: MontgomeryDescriptor = MontgomeryDescriptor {
    algorithm: EcdhXAlgorithm::X448,
    payload_size: X448_PAYLOAD_SIZE,
    hash: HashAlgorithm::Sha512,
    cipher: SymmetricAlgorithm::Aes256,
    hkdf_info: b"OpenPGP X448",
};

impl EcdhXAlgorithm {
    pub const ALL: [EcdhXAlgorithm; 2] = [EcdhXAlgorithm::X25519, EcdhXAlgorithm::X448];

    pub fn descriptor(self) -> &'static MontgomeryDescriptor {
        match self {
            Self::X25519 => &X25519,
            Self::X448 => &X448,
        }
    }

    pub fn payload_size(self) -> usize {
        self.descriptor().payload_size
    }

    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EcdhXAlgorithm {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            25 => Ok(Self::X25519),
            26 => Ok(Self::X448),
            other => Err(Error::unsupported("ECDH-X algorithm", other)),
        }
    }
}
