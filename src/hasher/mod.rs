// src/hasher/mod.rs
//! High-level credential hashing facade.
//!
//! Core API: `create_hash(secret)?`, `verify(secret, encoded)?`,
//! `is_current_version(encoded)?` on [`CredentialHasher`], plus crate-root
//! shortcuts that use the default configuration and [`SecureRng`].
//!
//! # Thread Safety
//!
//! A hasher is `Send + Sync` when its random source is. It holds no mutable
//! state: every call is independent and may run concurrently.

pub(crate) mod creation;
pub(crate) mod upgrade;
pub(crate) mod verification;

pub use upgrade::{HashInfo, Verification};

use crate::builders::CredentialHasherBuilder;
use crate::config::HasherConfig;
use crate::crypto::rng::SecureRng;
use crate::error::{CredhashError, Result};

/// Creates and verifies versioned credential hashes.
#[derive(Debug, Clone)]
pub struct CredentialHasher<R = SecureRng> {
    config: HasherConfig,
    rng: R,
}

impl CredentialHasher<SecureRng> {
    /// Hasher with the default configuration and the OS CSPRNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(HasherConfig::default(), SecureRng)
    }

    #[must_use]
    pub fn builder() -> CredentialHasherBuilder<SecureRng> {
        CredentialHasherBuilder::new()
    }
}

impl Default for CredentialHasher<SecureRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CredentialHasher<R> {
    /// Callers go through the builder, which validates `config` first.
    pub(crate) fn from_parts(config: HasherConfig, rng: R) -> Self {
        Self { config, rng }
    }

    #[inline]
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn rng(&self) -> &R {
        &self.rng
    }

    /// Creation honours the configured floor and ceiling.
    pub(crate) fn check_creation_iterations(&self, iterations: u32) -> Result<()> {
        if (self.config.min_iterations..=self.config.max_iterations).contains(&iterations) {
            Ok(())
        } else {
            Err(CredhashError::InvalidIterations(iterations))
        }
    }

    /// Stored hashes below the floor still verify (and are flagged for
    /// rehash); only zero and counts above the ceiling are refused.
    pub(crate) fn check_stored_iterations(&self, iterations: u32) -> Result<()> {
        if iterations == 0 || iterations > self.config.max_iterations {
            Err(CredhashError::InvalidIterations(iterations))
        } else {
            Ok(())
        }
    }
}

/// Hash `secret` with the current version and `iterations`, using the OS CSPRNG.
///
/// ```
/// use credhash_rs::{create_hash, verify};
///
/// let stored = create_hash("correct horse battery staple", 10)?;
/// assert_eq!(stored.len(), 204);
/// assert!(verify("correct horse battery staple", &stored)?);
/// assert!(!verify("wrong password", &stored)?);
/// # Ok::<(), credhash_rs::CredhashError>(())
/// ```
pub fn create_hash<S>(secret: &S, iterations: u32) -> Result<String>
where
    S: AsRef<[u8]> + ?Sized,
{
    CredentialHasher::new().create_hash_with_iterations(secret, iterations)
}

/// Verify `secret` against a stored hex hash with the default configuration.
pub fn verify<S>(secret: &S, encoded: &str) -> Result<bool>
where
    S: AsRef<[u8]> + ?Sized,
{
    CredentialHasher::new().verify(secret, encoded)
}

/// Whether `encoded` was produced with the current hash version.
pub fn is_current_version(encoded: &str) -> Result<bool> {
    CredentialHasher::new().is_current_version(encoded)
}
