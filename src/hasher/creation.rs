// src/hasher/creation.rs
//! Hash creation: fresh salt, PBKDF2, serialize.

use crate::crypto::kdf::pbkdf2::derive_key;
use crate::crypto::rng::{random_bytes, RandomSource};
use crate::error::Result;
use crate::hasher::CredentialHasher;
use crate::header::EncodedHash;
use crate::version::HashVersion;
use secure_gate::RevealSecret;
use tracing::debug;

impl<R: RandomSource> CredentialHasher<R> {
    /// Hash `secret` with the current version and the configured iterations.
    ///
    /// Two calls with the same secret give different results: each draws an
    /// independent random salt.
    ///
    /// # Errors
    ///
    /// - [`RandomSourceUnavailable`](crate::CredhashError::RandomSourceUnavailable)
    ///   if no salt could be drawn; nothing is produced in that case
    /// - [`InvalidIterations`](crate::CredhashError::InvalidIterations) if the
    ///   configured count is outside the accepted range
    pub fn create_hash<S>(&self, secret: &S) -> Result<String>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.create_hash_with_iterations(secret, self.config().iterations)
    }

    /// Hash `secret` with an explicit iteration count.
    pub fn create_hash_with_iterations<S>(&self, secret: &S, iterations: u32) -> Result<String>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Ok(self.create_encoded(secret.as_ref(), iterations)?.to_hex())
    }

    /// Hash `secret` and return the parsed structure instead of hex text.
    pub fn create_encoded(&self, secret: &[u8], iterations: u32) -> Result<EncodedHash> {
        self.check_creation_iterations(iterations)?;

        let version = HashVersion::CURRENT;
        let spec = version.spec();

        let salt = random_bytes(self.rng(), spec.salt_size)?;
        let derived_key = derive_key(
            secret,
            salt.expose_secret(),
            iterations,
            spec.algorithm,
            spec.output_size,
        )?;

        debug!(version = spec.version, iterations, "created credential hash");
        EncodedHash::from_parts(version, iterations, salt, derived_key)
    }
}
