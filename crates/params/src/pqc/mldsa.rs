//! Constants for ML-DSA (FIPS 204)

use pkcrypt_api::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ML-DSA parameter sets, tagged with the OpenPGP ids of the composite
/// algorithms they appear in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MlDsaAlgorithm {
    /// ML-DSA-65 (paired with Ed25519)
    MlDsa65 = 30,
    /// ML-DSA-87 (paired with Ed448)
    MlDsa87 = 31,
}

/// Encoding sizes of an ML-DSA parameter set
#[derive(Debug)]
pub struct MlDsaDescriptor {
    pub algorithm: MlDsaAlgorithm,
    pub name: &'static str,
    pub public_key_size: usize,
    pub secret_key_size: usize,
    pub signature_size: usize,
}

pub const MLDSA65: MlDsaDescriptor = MlDsaDescriptor {
    algorithm: MlDsaAlgorithm::MlDsa65,
    name: "ML-DSA-65",
    public_key_size: 1952,
    secret_key_size: 4032,
    signature_size: 3309,
};

pub const MLDSA87: MlDsaDescriptor = MlDsaDescriptor {
    algorithm: MlDsaAlgorithm::MlDsa87,
    name: "ML-DSA-87",
    public_key_size: 2592,
    secret_key_size: 4896,
    signature_size: 4627,
};

impl MlDsaAlgorithm {
    pub const ALL: [MlDsaAlgorithm; 2] = [MlDsaAlgorithm::MlDsa65, MlDsaAlgorithm::MlDsa87];

    pub fn descriptor(self) -> &'static MlDsaDescriptor {
        match self {
            Self::MlDsa65 => &MLDSA65,
            Self::MlDsa87 => &MLDSA87,
        }
    }

    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MlDsaAlgorithm {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            30 => Ok(Self::MlDsa65),
            31 => Ok(Self::MlDsa87),
            other => Err(Error::unsupported("ML-DSA algorithm", other)),
        }
    }
}
