//! Public API traits and types for the pkcrypt library
//!
//! This crate provides the surface shared by every pkcrypt member crate:
//! the error taxonomy, the key/ciphertext/signature data model and the
//! [`Kem`] and [`Signature`] traits implemented by the concrete schemes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

pub use traits::{Kem, Signature};

// Re-export trait modules for direct access
pub use traits::{kem, signature};
