//! Constants for post-quantum and composite algorithms

pub mod composite;
pub mod mldsa;
pub mod mlkem;
