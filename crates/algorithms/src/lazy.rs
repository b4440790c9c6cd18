//! Once-initialised handles for optional primitives
//!
//! A post-quantum primitive is not trusted until it has passed a pairwise
//! consistency check. The check runs on first acquisition, at most once per
//! process, and its outcome is shared read-only afterwards. A failed check
//! disables the primitive for the lifetime of the process.

use once_cell::sync::OnceCell;
use pkcrypt_api::{Error, Result};

/// Process-wide handle to an optional primitive
///
/// ```
/// use pkcrypt_algorithms::LazyPrimitive;
///
/// static DEMO: LazyPrimitive = LazyPrimitive::new("demo", || true);
/// assert!(DEMO.acquire().is_ok());
/// ```
pub struct LazyPrimitive {
    name: &'static str,
    self_test: fn() -> bool,
    state: OnceCell<bool>,
}

impl LazyPrimitive {
    pub const fn new(name: &'static str, self_test: fn() -> bool) -> Self {
        Self {
            name,
            self_test,
            state: OnceCell::new(),
        }
    }

    /// Acquire the primitive, running its self test on first use
    pub fn acquire(&self) -> Result<()> {
        let healthy = *self.state.get_or_init(|| {
            let healthy = (self.self_test)();
            if healthy {
                tracing::debug!(primitive = self.name, "primitive initialised");
            } else {
                tracing::warn!(primitive = self.name, "primitive failed its self test, disabling");
            }
            healthy
        });

        if healthy {
            Ok(())
        } else {
            Err(Error::BackendUnavailable { primitive: self.name })
        }
    }

    /// Whether the self test has already run
    pub fn is_initialised(&self) -> bool {
        self.state.get().is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
