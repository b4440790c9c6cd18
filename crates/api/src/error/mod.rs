//! Error handling for the public-key operations layer

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Self::RandomGeneration {
            context: "random source",
            message: e.to_string(),
        }
    }
}
