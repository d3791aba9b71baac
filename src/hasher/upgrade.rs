// src/hasher/upgrade.rs
//! Rehash policy: detect outdated hashes and issue replacements on a
//! successful login. Stored values are never modified in place; the caller
//! decides whether to persist the upgraded hash.

use crate::crypto::rng::RandomSource;
use crate::error::Result;
use crate::hasher::CredentialHasher;
use crate::header::EncodedHash;
use crate::version::{HashAlgorithm, HashVersion};
use tracing::debug;

/// Outcome of [`CredentialHasher::verify_and_upgrade`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The secret does not match.
    Invalid,
    /// The secret matches and the stored hash is up to date.
    Valid,
    /// The secret matches; `upgraded` is a fresh hash with the current
    /// version and configured iterations that should replace the stored one.
    ValidNeedsRehash { upgraded: String },
}

impl Verification {
    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    pub fn upgraded(&self) -> Option<&str> {
        match self {
            Self::ValidNeedsRehash { upgraded } => Some(upgraded.as_str()),
            _ => None,
        }
    }
}

/// Public parameters recorded in a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashInfo {
    pub version: HashVersion,
    pub iterations: u32,
    pub algorithm: HashAlgorithm,
    pub salt_size: usize,
    pub output_size: usize,
}

impl<R> CredentialHasher<R> {
    /// Read the parameters of a stored hash without running the KDF.
    pub fn inspect(&self, encoded: &str) -> Result<HashInfo> {
        let stored = EncodedHash::from_hex(encoded)?;
        let spec = stored.spec();
        Ok(HashInfo {
            version: stored.version(),
            iterations: stored.iterations(),
            algorithm: spec.algorithm,
            salt_size: spec.salt_size,
            output_size: spec.output_size,
        })
    }

    /// Whether a stored hash should be replaced: older version, or fewer
    /// iterations than this hasher is configured for.
    pub fn needs_rehash(&self, encoded: &str) -> Result<bool> {
        let stored = EncodedHash::from_hex(encoded)?;
        Ok(self.is_outdated(&stored))
    }

    pub(crate) fn is_outdated(&self, stored: &EncodedHash) -> bool {
        !stored.version().is_current() || stored.iterations() < self.config().iterations
    }
}

impl<R: RandomSource> CredentialHasher<R> {
    /// Verify, and on success produce a replacement hash if the stored one is
    /// outdated.
    pub fn verify_and_upgrade<S>(&self, secret: &S, encoded: &str) -> Result<Verification>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let secret = secret.as_ref();
        let stored = EncodedHash::from_hex(encoded)?;

        if !self.verify_encoded(secret, &stored)? {
            return Ok(Verification::Invalid);
        }
        if !self.is_outdated(&stored) {
            return Ok(Verification::Valid);
        }

        let upgraded = self.create_hash(secret)?;
        debug!(
            from_version = stored.version().id(),
            from_iterations = stored.iterations(),
            to_version = HashVersion::CURRENT.id(),
            to_iterations = self.config().iterations,
            "issued upgraded credential hash"
        );
        Ok(Verification::ValidNeedsRehash { upgraded })
    }
}
