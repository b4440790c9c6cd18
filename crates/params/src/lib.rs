//! Constant values and descriptors for pkcrypt operations
//!
//! Every algorithm family is selected by an identifier enum whose
//! discriminant is the OpenPGP registry octet. Each identifier resolves to a
//! `&'static` descriptor that fixes the sizes, hashes and domain-separation
//! labels used by the operations in the other crates.

pub mod pqc;
pub mod traditional;
pub mod utils;

pub use pqc::composite::{CompositeKemAlgorithm, CompositeKemDescriptor};
pub use pqc::mldsa::{MlDsaAlgorithm, MlDsaDescriptor};
pub use pqc::mlkem::{MlKemDescriptor, MLKEM1024, MLKEM768};
pub use traditional::ecdsa::{AcceleratedSupport, Curve, CurveDescriptor};
pub use traditional::montgomery::{EcdhXAlgorithm, MontgomeryDescriptor};
pub use utils::hash::HashAlgorithm;
pub use utils::symmetric::SymmetricAlgorithm;
