// src/crypto/kdf/pbkdf2.rs
//! PBKDF2-HMAC key derivation, dispatched on [`HashAlgorithm`].

use crate::aliases::DerivedKey;
use crate::crypto::hmac::HmacSha512;
use crate::error::{CredhashError, Result};
use crate::version::HashAlgorithm;

use pbkdf2::pbkdf2;
use secure_gate::{Dynamic, RevealSecretMut};

/// Derive PBKDF2-HMAC directly into a caller-provided buffer.
///
/// The output length is `out_key.len()`.
#[inline]
pub fn derive_pbkdf2_key(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    algorithm: HashAlgorithm,
    out_key: &mut [u8],
) -> Result<()> {
    if iterations == 0 {
        return Err(CredhashError::InvalidIterations(0));
    }

    match algorithm {
        HashAlgorithm::Sha512 => pbkdf2::<HmacSha512>(secret, salt, iterations, out_key),
    }
    .map_err(|e| CredhashError::Kdf(format!("PBKDF2 failed: {e}")))
}

/// Derive a fresh `output_len`-byte key into a wiped-on-drop buffer.
pub fn derive_key(
    secret: &[u8],
    salt: &[u8],
    iterations: u32,
    algorithm: HashAlgorithm,
    output_len: usize,
) -> Result<DerivedKey> {
    let mut key: DerivedKey = Dynamic::new(vec![0u8; output_len]);
    derive_pbkdf2_key(
        secret,
        salt,
        iterations,
        algorithm,
        key.expose_secret_mut().as_mut_slice(),
    )?;
    Ok(key)
}
