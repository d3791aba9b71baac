// src/builders/hasher_builder.rs
//! Fluent construction of a [`CredentialHasher`].

use crate::config::HasherConfig;
use crate::crypto::rng::{RandomSource, SecureRng};
use crate::error::Result;
use crate::hasher::CredentialHasher;

/// Credential hasher builder
///
/// Strong defaults: current version, 120,000 iterations, OS CSPRNG.
///
/// ```
/// use credhash_rs::CredentialHasher;
///
/// let hasher = CredentialHasher::builder()
///     .with_iterations(200_000)
///     .with_max_concurrency(4)
///     .build()?;
/// assert_eq!(hasher.config().iterations, 200_000);
/// # Ok::<(), credhash_rs::CredhashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CredentialHasherBuilder<R = SecureRng> {
    config: HasherConfig,
    rng: R,
}

impl CredentialHasherBuilder<SecureRng> {
    /// Create builder with strong defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: HasherConfig::default(),
            rng: SecureRng,
        }
    }
}

impl Default for CredentialHasherBuilder<SecureRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> CredentialHasherBuilder<R> {
    /// Iterations for new hashes; also the rehash threshold
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_min_iterations(mut self, min_iterations: u32) -> Self {
        self.config.min_iterations = min_iterations;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Cap on concurrent KDF runs in batch operations
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = Some(max_concurrency);
        self
    }

    /// Replace the whole configuration (e.g. one loaded from a file)
    #[must_use]
    pub fn with_config(mut self, config: HasherConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the random source
    #[must_use]
    pub fn with_rng<R2: RandomSource>(self, rng: R2) -> CredentialHasherBuilder<R2> {
        CredentialHasherBuilder {
            config: self.config,
            rng,
        }
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Validate the configuration and build the hasher
    pub fn build(self) -> Result<CredentialHasher<R>> {
        self.config.validate()?;
        Ok(CredentialHasher::from_parts(self.config, self.rng))
    }
}
