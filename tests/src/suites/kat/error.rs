// tests/src/suites/kat/error.rs
//! Structured error types for the known-answer engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] pkcrypt_api::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown {kind}: {name}")]
    Unknown { kind: &'static str, name: String },

    #[error("{field} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("verification answered false")]
    Rejected,
}

pub type Result<T> = std::result::Result<T, EngineError>;
