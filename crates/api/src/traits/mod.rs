//! Scheme traits implemented by the concrete primitives

pub mod kem;
pub mod signature;

pub use kem::Kem;
pub use signature::Signature;
