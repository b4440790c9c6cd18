//! Constants for the composite ML-KEM + ECC key encapsulation

use super::mlkem::{MlKemDescriptor, MLKEM1024, MLKEM768};
use crate::traditional::montgomery::EcdhXAlgorithm;
use crate::utils::symmetric::SymmetricAlgorithm;
use pkcrypt_api::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// KMAC256 key of the composite combiner
pub const COMBINER_DOMAIN: &[u8] = b"OpenPGPCompositeKeyDerivationFunction";

/// KMAC256 customization string of the composite combiner
pub const COMBINER_CUSTOMIZATION: &[u8] = b"KDF";

/// The only output length the combiner supports, in bits
pub const COMBINER_OUTPUT_BITS: usize = 256;

/// Leading counter of the combiner input: the value 1 as a big-endian u32
pub const COMBINER_COUNTER: [u8; 4] = 1u32.to_be_bytes();

/// Composite KEM pairings, tagged with their OpenPGP public-key ids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum CompositeKemAlgorithm {
    MlKem768X25519 = 35,
    MlKem1024X448 = 36,
}

/// Static metadata of a composite KEM pairing
#[derive(Debug)]
pub struct CompositeKemDescriptor {
    pub algorithm: CompositeKemAlgorithm,
    /// Classical component
    pub ecc: EcdhXAlgorithm,
    /// Lattice component
    pub mlkem: &'static MlKemDescriptor,
    /// Wrap cipher for the session key
    pub cipher: SymmetricAlgorithm,
}

pub const MLKEM768_X25519: CompositeKemDescriptor = CompositeKemDescriptor {
    algorithm: CompositeKemAlgorithm::MlKem768X25519,
    ecc: EcdhXAlgorithm::X25519,
    mlkem: &MLKEM768,
    cipher: SymmetricAlgorithm::Aes256,
};

pub const MLKEM1024_X448: CompositeKemDescriptor = CompositeKemDescriptor {
    algorithm: CompositeKemAlgorithm::MlKem1024X448,
    ecc: EcdhXAlgorithm::X448,
    mlkem: &MLKEM1024,
    cipher: SymmetricAlgorithm::Aes256,
};

impl CompositeKemAlgorithm {
    pub const ALL: [CompositeKemAlgorithm; 2] = [
        CompositeKemAlgorithm::MlKem768X25519,
        CompositeKemAlgorithm::MlKem1024X448,
    ];

    pub fn descriptor(self) -> &'static CompositeKemDescriptor {
        match self {
            Self::MlKem768X25519 => &MLKEM768_X25519,
            Self::MlKem1024X448 => &MLKEM1024_X448,
        }
    }

    /// The one-byte "fixed info" of the combiner
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CompositeKemAlgorithm {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            35 => Ok(Self::MlKem768X25519),
            36 => Ok(Self::MlKem1024X448),
            other => Err(Error::unsupported("composite KEM algorithm", other)),
        }
    }
}
