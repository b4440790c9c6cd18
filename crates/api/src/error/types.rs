//! Error type definitions for public-key operations

use thiserror::Error as ThisError;

/// Primary error type for public-key operations
///
/// Validation and verification entry points never surface an error for a
/// "no" answer; they return `false`. The variants here are reserved for
/// structural problems, integrity failures and misuse.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The algorithm identifier is not recognised by the component
    #[error("unsupported algorithm in {context}: {id}")]
    UnsupportedAlgorithm { context: &'static str, id: String },

    /// Authenticated key unwrap failed its integrity check
    #[error("key unwrap integrity check failed: {context}")]
    UnwrapIntegrity { context: &'static str },

    /// A backend cannot perform the requested operation
    ///
    /// Only produced by backend adapters; the dispatcher consumes it and
    /// moves on to the next candidate backend.
    #[error("{backend} backend does not support this operation: {reason}")]
    BackendUnsupported {
        backend: &'static str,
        reason: String,
    },

    /// A backend rejected the key or signature material itself
    #[error("key integrity failure in {context}: {message}")]
    KeyIntegrity {
        context: &'static str,
        message: String,
    },

    /// A lazily loaded primitive failed its first-use self test
    #[error("{primitive} is unavailable: self test failed")]
    BackendUnavailable { primitive: &'static str },

    /// The composite combiner only produces 256-bit keys
    #[error("unsupported output size: {requested_bits} bits")]
    UnsupportedOutputSize { requested_bits: usize },

    /// Invalid key error
    #[error("invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for public-key operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedAlgorithm { id, .. } => Self::UnsupportedAlgorithm { context, id },
            Self::UnwrapIntegrity { .. } => Self::UnwrapIntegrity { context },
            Self::KeyIntegrity { message, .. } => Self::KeyIntegrity { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            other @ (Self::BackendUnsupported { .. }
            | Self::BackendUnavailable { .. }
            | Self::UnsupportedOutputSize { .. }) => other,
        }
    }

    /// Shorthand for an [`Error::UnsupportedAlgorithm`] over any printable id
    pub fn unsupported(context: &'static str, id: impl core::fmt::Display) -> Self {
        Self::UnsupportedAlgorithm {
            context,
            id: id.to_string(),
        }
    }

    /// Check the length of an input slice
    pub fn check_length(context: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                context,
                expected,
                actual,
            })
        }
    }

    /// Whether the dispatcher may fall back to another backend
    pub fn is_backend_unsupported(&self) -> bool {
        matches!(self, Self::BackendUnsupported { .. })
    }
}
