// src/header.rs
//! # Encoded Hash Format
//!
//! The persisted artifact is one contiguous byte sequence, carried as hex text:
//!
//! | Offset        | Size          | Field                          |
//! |---------------|---------------|--------------------------------|
//! | 0             | 2             | version (u16, little-endian)   |
//! | 2             | 4             | iterations (u32, little-endian)|
//! | 6             | `salt_size`   | salt                           |
//! | 6 + salt_size | `output_size` | derived key                    |
//!
//! There is no length field: the total is fixed by the version.
//! Hex is written lowercase and accepted in either case.

use crate::aliases::{DerivedKey, SaltBytes};
use crate::consts::{HEADER_LEN, ITERATIONS_FIELD_LEN, VERSION_FIELD_LEN};
use crate::error::{CredhashError, Result};
use crate::version::{HashVersion, HashVersionSpec};
use secure_gate::{Dynamic, RevealSecret};
use std::fmt;
use zeroize::Zeroizing;

/// A parsed credential hash.
///
/// Salt and derived key are held in wiped-on-drop buffers and never printed
/// by `Debug`.
pub struct EncodedHash {
    version: HashVersion,
    iterations: u32,
    salt: SaltBytes,
    derived_key: DerivedKey,
}

impl EncodedHash {
    /// Assemble a hash from its parts, copying salt and key.
    ///
    /// # Errors
    ///
    /// [`CredhashError::MalformedEncoding`] if `salt` or `derived_key` does not
    /// have the length `version` requires.
    pub fn new(
        version: HashVersion,
        iterations: u32,
        salt: &[u8],
        derived_key: &[u8],
    ) -> Result<Self> {
        Self::from_parts(
            version,
            iterations,
            Dynamic::new(salt.to_vec()),
            Dynamic::new(derived_key.to_vec()),
        )
    }

    pub(crate) fn from_parts(
        version: HashVersion,
        iterations: u32,
        salt: SaltBytes,
        derived_key: DerivedKey,
    ) -> Result<Self> {
        let spec = version.spec();
        check_len("salt", version, spec.salt_size, salt.expose_secret().len())?;
        check_len(
            "derived key",
            version,
            spec.output_size,
            derived_key.expose_secret().len(),
        )?;
        Ok(Self {
            version,
            iterations,
            salt,
            derived_key,
        })
    }

    #[inline]
    pub fn version(&self) -> HashVersion {
        self.version
    }

    #[inline]
    pub fn spec(&self) -> HashVersionSpec {
        self.version.spec()
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[inline]
    pub fn salt(&self) -> &[u8] {
        self.salt.expose_secret()
    }

    #[inline]
    pub fn derived_key(&self) -> &[u8] {
        self.derived_key.expose_secret()
    }

    /// Serialize to the binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.spec().encoded_len());
        out.extend_from_slice(&self.version.id().to_le_bytes());
        out.extend_from_slice(&self.iterations.to_le_bytes());
        out.extend_from_slice(self.salt());
        out.extend_from_slice(self.derived_key());
        out
    }

    /// Serialize to lowercase hex text.
    pub fn to_hex(&self) -> String {
        let bytes = Zeroizing::new(self.to_bytes());
        hex::encode(bytes.as_slice())
    }

    /// Parse the binary layout.
    ///
    /// # Errors
    ///
    /// - [`CredhashError::MalformedEncoding`] if shorter than the 6-byte header
    /// - [`CredhashError::UnknownVersion`] if the version is not registered
    /// - [`CredhashError::TruncatedHash`] if the length does not match the version
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(CredhashError::MalformedEncoding(format!(
                "{} bytes is shorter than the {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }

        let version = HashVersion::from_id(read_version_bytes(bytes)?)?;
        let spec = version.spec();
        if bytes.len() != spec.encoded_len() {
            return Err(CredhashError::TruncatedHash {
                expected: spec.encoded_len(),
                actual: bytes.len(),
            });
        }

        let mut iterations_field = [0u8; ITERATIONS_FIELD_LEN];
        iterations_field.copy_from_slice(&bytes[VERSION_FIELD_LEN..HEADER_LEN]);
        let iterations = u32::from_le_bytes(iterations_field);
        let salt_end = HEADER_LEN + spec.salt_size;

        Self::from_parts(
            version,
            iterations,
            Dynamic::new(bytes[HEADER_LEN..salt_end].to_vec()),
            Dynamic::new(bytes[salt_end..].to_vec()),
        )
    }

    /// Parse hex text (either case).
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = decode_hex(text)?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Debug for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedHash")
            .field("version", &self.version)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

fn check_len(field: &str, version: HashVersion, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CredhashError::MalformedEncoding(format!(
            "{version} {field} must be {expected} bytes, got {actual}"
        )))
    }
}

/// Decode hex text into a wiped-on-drop buffer.
pub fn decode_hex(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(text.trim())
        .map(Zeroizing::new)
        .map_err(|e| CredhashError::MalformedEncoding(format!("invalid hex: {e}")))
}

/// Read the version id from the first two bytes of an encoded hash.
pub fn read_version_bytes(bytes: &[u8]) -> Result<u16> {
    match bytes.get(..VERSION_FIELD_LEN) {
        Some(&[lo, hi]) => Ok(u16::from_le_bytes([lo, hi])),
        _ => Err(CredhashError::MalformedEncoding(format!(
            "{} bytes cannot hold the version field",
            bytes.len()
        ))),
    }
}

/// Read only the version id of a hex-encoded hash.
///
/// The id is not checked against the registry, so this also works on hashes
/// written by a newer build.
///
/// # Example
///
/// ```
/// use credhash_rs::read_version;
///
/// assert_eq!(read_version("0100c0d40100")?, 1);
/// assert_eq!(read_version("0200")?, 2);
/// # Ok::<(), credhash_rs::CredhashError>(())
/// ```
pub fn read_version(text: &str) -> Result<u16> {
    let bytes = decode_hex(text)?;
    read_version_bytes(&bytes)
}
