//! Hash and symmetric algorithm identifiers used by the key derivations

pub mod hash;
pub mod symmetric;
