//! Error handling traits

use super::types::{Error, Result};

/// Tag errors with the operation they surfaced from
pub trait ResultExt<T> {
    /// Replace the context of a propagated error, keeping its payload
    fn with_context(self, context: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
