// src/crypto/rng.rs
//! Secure randomness for salts.
//!
//! [`RandomSource`] is the seam the hasher draws salt bytes through.
//! [`SecureRng`] is the production implementation: a thread-local `OsRng`.
//! Failures are surfaced, never papered over with a weaker source.

use crate::aliases::SaltBytes;
use crate::error::{CredhashError, Result};
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::{Dynamic, RevealSecretMut};
use std::cell::RefCell;

/// Source of cryptographically secure random bytes.
///
/// Implementations must be a CSPRNG: predictable salts defeat the scheme.
pub trait RandomSource {
    /// Fill `dest` entirely, or fail with
    /// [`CredhashError::RandomSourceUnavailable`].
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng;

impl SecureRng {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SecureRng {
    #[inline]
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        RNG.with(|rng_cell| rng_cell.borrow_mut().try_fill_bytes(dest))
            .map_err(|e| CredhashError::RandomSourceUnavailable(e.to_string()))
    }
}

/// Draw `len` random bytes into a wiped-on-drop buffer.
pub fn random_bytes<R>(rng: &R, len: usize) -> Result<SaltBytes>
where
    R: RandomSource + ?Sized,
{
    let mut salt: SaltBytes = Dynamic::new(vec![0u8; len]);
    rng.fill(salt.expose_secret_mut().as_mut_slice())?;
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    struct Broken;

    impl RandomSource for Broken {
        fn fill(&self, _dest: &mut [u8]) -> Result<()> {
            Err(CredhashError::RandomSourceUnavailable("entropy pool closed".into()))
        }
    }

    #[test]
    fn fills_requested_length() {
        let salt = random_bytes(&SecureRng::new(), 32).unwrap();
        assert_eq!(salt.expose_secret().len(), 32);
    }

    #[test]
    fn successive_draws_differ() {
        let a = random_bytes(&SecureRng, 32).unwrap();
        let b = random_bytes(&SecureRng, 32).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn failure_propagates() {
        let err = random_bytes(&Broken, 16).unwrap_err();
        assert!(matches!(err, CredhashError::RandomSourceUnavailable(_)));
    }
}
