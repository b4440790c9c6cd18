//! Hybrid cryptography schemes
//!
//! This crate provides the composite KEM that protects an OpenPGP session
//! key with both an ECC-KEM share and an ML-KEM share, so the key stays
//! safe as long as either component does.

pub mod kem;

pub use kem::{decrypt, encrypt, generate, validate_params};
