//! Descriptors for the classical elliptic-curve algorithms

pub mod ecdsa;
pub mod montgomery;
