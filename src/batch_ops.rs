// src/batch_ops.rs
//! Parallel batch hashing and verification on a bounded rayon pool.
//!
//! Each KDF run is tuned to take tens of milliseconds of CPU, so unbounded
//! fan-out would starve the host. [`BatchHasher`] owns a dedicated pool sized
//! by [`HasherConfig::max_concurrency`](crate::HasherConfig::max_concurrency).
//! Every item succeeds or fails on its own. Results come back in input order.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::crypto::rng::{RandomSource, SecureRng};
use crate::error::{CredhashError, Result};
use crate::hasher::CredentialHasher;

/// A hasher paired with a bounded worker pool.
pub struct BatchHasher<R = SecureRng> {
    hasher: CredentialHasher<R>,
    pool: ThreadPool,
}

impl<R> BatchHasher<R>
where
    R: RandomSource + Sync,
{
    /// Build the pool from the hasher's `max_concurrency` (CPU count if unset).
    pub fn new(hasher: CredentialHasher<R>) -> Result<Self> {
        let threads = hasher.config().max_concurrency.unwrap_or(0);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("credhash-kdf-{i}"))
            .build()
            .map_err(|e| CredhashError::Config(format!("failed to build KDF pool: {e}")))?;
        Ok(Self { hasher, pool })
    }

    #[inline]
    pub fn hasher(&self) -> &CredentialHasher<R> {
        &self.hasher
    }

    /// Number of KDF runs that may execute at once.
    #[inline]
    pub fn max_concurrency(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Hash every secret with the configured iterations.
    pub fn hash_batch<S>(&self, secrets: &[S]) -> Vec<Result<String>>
    where
        S: AsRef<[u8]> + Sync,
    {
        self.pool.install(|| {
            secrets
                .par_iter()
                .map(|secret| self.hasher.create_hash(secret))
                .collect()
        })
    }

    /// Verify every `(secret, encoded)` pair.
    pub fn verify_batch<S, E>(&self, pairs: &[(S, E)]) -> Vec<Result<bool>>
    where
        S: AsRef<[u8]> + Sync,
        E: AsRef<str> + Sync,
    {
        self.pool.install(|| {
            pairs
                .par_iter()
                .map(|(secret, encoded)| self.hasher.verify(secret, encoded.as_ref()))
                .collect()
        })
    }
}

/// Hash a batch on rayon's global pool with the default configuration.
pub fn hash_batch<S>(secrets: &[S], iterations: u32) -> Vec<Result<String>>
where
    S: AsRef<[u8]> + Sync,
{
    let hasher = CredentialHasher::new();
    secrets
        .par_iter()
        .map(|secret| hasher.create_hash_with_iterations(secret, iterations))
        .collect()
}

/// Verify a batch on rayon's global pool with the default configuration.
pub fn verify_batch<S, E>(pairs: &[(S, E)]) -> Vec<Result<bool>>
where
    S: AsRef<[u8]> + Sync,
    E: AsRef<str> + Sync,
{
    let hasher = CredentialHasher::new();
    pairs
        .par_iter()
        .map(|(secret, encoded)| hasher.verify(secret, encoded.as_ref()))
        .collect()
}
