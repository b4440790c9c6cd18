//! Curve descriptors for the Weierstrass signature engine

use crate::utils::hash::HashAlgorithm;
use pkcrypt_api::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named Weierstrass curves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Curve {
    NistP256,
    NistP384,
    NistP521,
    Secp256k1,
}

/// Whether the platform-accelerated backend may be tried for a curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceleratedSupport {
    /// Software only
    Unavailable,
    /// Accelerated backend first, then software
    Available {
        /// When false, every accelerated failure is treated as "unsupported"
        /// and falls back, even one that looks like a key problem.
        failures_fatal: bool,
    },
}

/// Static metadata of a named curve
#[derive(Debug)]
pub struct CurveDescriptor {
    pub curve: Curve,
    /// Name used in the OpenPGP curve registry
    pub name: &'static str,
    /// DER content octets of the curve OID
    pub oid: &'static [u8],
    /// Byte length of a scalar, and of each of `r` and `s`
    pub payload_size: usize,
    /// Byte length of an uncompressed SEC1 public point
    pub public_key_size: usize,
    /// Hash preferred for this curve's strength
    pub preferred_hash: HashAlgorithm,
    pub accelerated: AcceleratedSupport,
}

/// NIST P-256
pub const P256: CurveDescriptor = CurveDescriptor {
    curve: Curve::NistP256,
    name: "p256",
    oid: &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07],
    payload_size: 32,
    public_key_size: 65,
    preferred_hash: HashAlgorithm::Sha256,
    accelerated: AcceleratedSupport::Available { failures_fatal: true },
};

/// NIST P-384
pub const P384: CurveDescriptor = CurveDescriptor {
    curve: Curve::NistP384,
    name: "p384",
    oid: &[0x2B, 0x81, 0x04, 0x00, 0x22],
    payload_size: 48,
    public_key_size: 97,
    preferred_hash: HashAlgorithm::Sha384,
    accelerated: AcceleratedSupport::Available { failures_fatal: true },
};

/// NIST P-521
///
/// Some platform backends reject valid P-521 operations outright, so an
/// accelerated failure on this curve never counts as a key problem.
pub const P521: CurveDescriptor = CurveDescriptor {
    curve: Curve::NistP521,
    name: "p521",
    oid: &[0x2B, 0x81, 0x04, 0x00, 0x23],
    payload_size: 66,
    public_key_size: 133,
    preferred_hash: HashAlgorithm::Sha512,
    accelerated: AcceleratedSupport::Available { failures_fatal: false },
};

/// secp256k1
pub const SECP256K1: CurveDescriptor = CurveDescriptor {
    curve: Curve::Secp256k1,
    name: "secp256k1",
    oid: &[0x2B, 0x81, 0x04, 0x00, 0x0A],
    payload_size: 32,
    public_key_size: 65,
    preferred_hash: HashAlgorithm::Sha256,
    accelerated: AcceleratedSupport::Unavailable,
};

static ALL: [&CurveDescriptor; 4] = [&P256, &P384, &P521, &SECP256K1];

impl Curve {
    /// Every supported curve
    pub const ALL: [Curve; 4] = [
        Curve::NistP256,
        Curve::NistP384,
        Curve::NistP521,
        Curve::Secp256k1,
    ];

    /// The curve's static descriptor
    pub fn descriptor(self) -> &'static CurveDescriptor {
        match self {
            Curve::NistP256 => &P256,
            Curve::NistP384 => &P384,
            Curve::NistP521 => &P521,
            Curve::Secp256k1 => &SECP256K1,
        }
    }

    /// Look a curve up by its OID content octets
    pub fn from_oid(oid: &[u8]) -> Result<Self> {
        ALL.iter()
            .find(|d| d.oid == oid)
            .map(|d| d.curve)
            .ok_or_else(|| Error::unsupported("curve oid", hex_string(oid)))
    }

    /// Look a curve up by its registry name
    pub fn from_name(name: &str) -> Result<Self> {
        ALL.iter()
            .find(|d| d.name == name)
            .map(|d| d.curve)
            .ok_or_else(|| Error::unsupported("curve name", name))
    }

    pub fn payload_size(self) -> usize {
        self.descriptor().payload_size
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
