//! Error conversions for the signature crate
//!
//! Foreign error types from the curve and backend crates are mapped onto
//! [`pkcrypt_api::Error`] here, at the crate boundary.

use pkcrypt_api::Error;

/// A secret scalar or public point the curve arithmetic rejected
#[cfg(feature = "traditional")]
pub(crate) fn invalid_key<E>(context: &'static str) -> impl FnOnce(E) -> Error {
    move |_| Error::InvalidKey {
        context,
        message: "not a valid curve element".into(),
    }
}

/// A signing failure from the software backend
///
/// `ecdsa::Error` is opaque, so only the operation is recorded.
#[cfg(feature = "traditional")]
pub(crate) fn signing_failed<E>(context: &'static str) -> impl FnOnce(E) -> Error {
    move |_| Error::KeyIntegrity {
        context,
        message: "signature generation failed".into(),
    }
}

/// A fixed-size parameter-set library rejected its input
#[cfg(feature = "post-quantum")]
pub(crate) fn rejected(context: &'static str) -> impl FnOnce(&'static str) -> Error {
    move |reason| Error::InvalidKey {
        context,
        message: reason.into(),
    }
}

#[cfg(feature = "accelerated")]
pub(crate) mod accelerated {
    use aws_lc_rs::error::{KeyRejected, Unspecified};
    use pkcrypt_api::Error;

    pub(crate) const BACKEND: &str = "aws-lc";

    /// Map a backend failure either to a fallback trigger or to a fatal key
    /// integrity error
    pub(crate) fn classify(
        failures_fatal: bool,
        context: &'static str,
        reason: impl Into<String>,
    ) -> Error {
        let reason = reason.into();
        if failures_fatal {
            Error::KeyIntegrity {
                context,
                message: reason,
            }
        } else {
            Error::BackendUnsupported {
                backend: BACKEND,
                reason,
            }
        }
    }

    pub(crate) fn key_rejected(
        failures_fatal: bool,
        context: &'static str,
    ) -> impl FnOnce(KeyRejected) -> Error {
        move |e| classify(failures_fatal, context, format!("key rejected: {e}"))
    }

    pub(crate) fn unspecified(
        failures_fatal: bool,
        context: &'static str,
    ) -> impl FnOnce(Unspecified) -> Error {
        move |_| classify(failures_fatal, context, "operation failed")
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Error {
        Error::BackendUnsupported {
            backend: BACKEND,
            reason: reason.into(),
        }
    }
}
