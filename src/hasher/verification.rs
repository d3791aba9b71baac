// src/hasher/verification.rs
//! Verification: parse, re-derive with the recorded parameters, compare in
//! constant time.

use crate::crypto::kdf::pbkdf2::derive_key;
use crate::error::Result;
use crate::hasher::CredentialHasher;
use crate::header::{read_version, EncodedHash};
use crate::utils::constant_time_eq;
use crate::version::HashVersion;
use secure_gate::RevealSecret;
use tracing::{debug, warn};

impl<R> CredentialHasher<R> {
    /// Verify `secret` against a hex-encoded hash.
    ///
    /// Returns `Ok(false)` on a wrong secret. Only structural problems are
    /// errors.
    ///
    /// # Errors
    ///
    /// - [`MalformedEncoding`](crate::CredhashError::MalformedEncoding): not hex,
    ///   or shorter than the header
    /// - [`UnknownVersion`](crate::CredhashError::UnknownVersion): version not
    ///   registered in this build
    /// - [`TruncatedHash`](crate::CredhashError::TruncatedHash): length does not
    ///   match the version
    /// - [`InvalidIterations`](crate::CredhashError::InvalidIterations): zero, or
    ///   above the configured ceiling
    pub fn verify<S>(&self, secret: &S, encoded: &str) -> Result<bool>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let stored = EncodedHash::from_hex(encoded)
            .inspect_err(|e| warn!(error = %e, "rejected encoded credential hash"))?;
        self.verify_encoded(secret.as_ref(), &stored)
    }

    /// Verify `secret` against an already parsed hash.
    pub fn verify_encoded(&self, secret: &[u8], stored: &EncodedHash) -> Result<bool> {
        self.check_stored_iterations(stored.iterations())
            .inspect_err(|_| {
                warn!(
                    iterations = stored.iterations(),
                    max = self.config().max_iterations,
                    "stored hash iteration count out of range"
                )
            })?;

        let spec = stored.spec();
        let candidate = derive_key(
            secret,
            stored.salt(),
            stored.iterations(),
            spec.algorithm,
            spec.output_size,
        )?;

        let matched = constant_time_eq(candidate.expose_secret(), stored.derived_key());
        debug!(
            version = spec.version,
            iterations = stored.iterations(),
            matched,
            "verified credential"
        );
        Ok(matched)
    }

    /// Whether `encoded` carries the current version id.
    ///
    /// An unregistered id is simply not current, so it yields `Ok(false)`.
    pub fn is_current_version(&self, encoded: &str) -> Result<bool> {
        Ok(read_version(encoded)? == HashVersion::CURRENT.id())
    }
}
