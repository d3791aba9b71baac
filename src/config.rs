// src/config.rs
//! # Hasher Configuration
//!
//! [`HasherConfig`] can be built in code (usually through
//! [`CredentialHasherBuilder`](crate::CredentialHasherBuilder)) or deserialized
//! from any serde format. Missing fields fall back to the defaults.
//!
//! ```
//! use credhash_rs::HasherConfig;
//!
//! let config = HasherConfig::default();
//! assert_eq!(config.iterations, 120_000);
//! config.validate()?;
//! # Ok::<(), credhash_rs::CredhashError>(())
//! ```

use crate::consts::{DEFAULT_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::{CredhashError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Iterations used for new hashes and as the rehash threshold.
    pub iterations: u32,
    /// Lowest iteration count accepted when creating a hash.
    pub min_iterations: u32,
    /// Highest iteration count accepted when creating or verifying a hash.
    pub max_iterations: u32,
    /// Upper bound on concurrent KDF runs in batch operations.
    /// `None` means one per available CPU.
    pub max_concurrency: Option<usize>,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            min_iterations: PBKDF2_MIN_ITER,
            max_iterations: PBKDF2_MAX_ITER,
            max_concurrency: None,
        }
    }
}

impl HasherConfig {
    /// Check `1 <= min_iterations <= iterations <= max_iterations` and a
    /// non-zero concurrency bound.
    pub fn validate(&self) -> Result<()> {
        if self.min_iterations < PBKDF2_MIN_ITER {
            return Err(CredhashError::Config(
                "min_iterations must be at least 1".into(),
            ));
        }
        if self.min_iterations > self.max_iterations {
            return Err(CredhashError::Config(format!(
                "min_iterations ({}) exceeds max_iterations ({})",
                self.min_iterations, self.max_iterations
            )));
        }
        if !(self.min_iterations..=self.max_iterations).contains(&self.iterations) {
            return Err(CredhashError::Config(format!(
                "iterations ({}) outside {}..={}",
                self.iterations, self.min_iterations, self.max_iterations
            )));
        }
        if self.max_concurrency == Some(0) {
            return Err(CredhashError::Config(
                "max_concurrency must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
