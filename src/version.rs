// src/version.rs
//! # Hash Version Registry
//!
//! Every supported hash format is a variant of the closed [`HashVersion`] enum.
//! Versions are compiled in, never mutated, and selected by explicit match.
//!
//! | id | KDF                | salt | key | encoded |
//! |----|--------------------|------|-----|---------|
//! | 1  | PBKDF2-HMAC-SHA512 | 32   | 64  | 102 B   |
//!
//! New hashes always use [`HashVersion::CURRENT`]. A new format is added as a
//! new variant with the next id and becomes `CURRENT`; older variants stay only
//! so legacy hashes keep verifying. A published variant's parameters must never
//! change: existing stored hashes would silently stop verifying.

use crate::consts::HEADER_LEN;
use crate::error::{CredhashError, Result};
use std::fmt;

/// Digest underlying the PBKDF2 HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha512,
}

impl HashAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of one published hash format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashVersionSpec {
    pub version: u16,
    pub salt_size: usize,
    pub output_size: usize,
    pub algorithm: HashAlgorithm,
}

impl HashVersionSpec {
    /// Total byte length of an encoded hash of this version.
    #[inline]
    pub const fn encoded_len(&self) -> usize {
        HEADER_LEN + self.salt_size + self.output_size
    }

    /// Length of the hex text form.
    #[inline]
    pub const fn hex_len(&self) -> usize {
        self.encoded_len() * 2
    }
}

/// Closed set of registered hash versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashVersion {
    /// PBKDF2-HMAC-SHA512, 256-bit salt, 512-bit key.
    V1,
}

impl HashVersion {
    /// Version used for every new hash.
    pub const CURRENT: Self = Self::V1;

    /// All registered versions, oldest first.
    pub const ALL: [Self; 1] = [Self::V1];

    #[inline]
    pub const fn id(self) -> u16 {
        match self {
            Self::V1 => 1,
        }
    }

    pub const fn spec(self) -> HashVersionSpec {
        match self {
            Self::V1 => HashVersionSpec {
                version: 1,
                salt_size: 32,
                output_size: 64,
                algorithm: HashAlgorithm::Sha512,
            },
        }
    }

    /// Look up a version id read from an encoded hash.
    ///
    /// # Errors
    ///
    /// [`CredhashError::UnknownVersion`] if `id` is not registered.
    pub fn from_id(id: u16) -> Result<Self> {
        match id {
            1 => Ok(Self::V1),
            other => Err(CredhashError::UnknownVersion(other)),
        }
    }

    #[inline]
    pub const fn is_current(self) -> bool {
        self.id() == Self::CURRENT.id()
    }
}

impl fmt::Display for HashVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.id())
    }
}

/// Resolve a version id to its parameters.
pub fn resolve_version(id: u16) -> Result<HashVersionSpec> {
    HashVersion::from_id(id).map(HashVersion::spec)
}

/// Parameters used for all new hash creation.
#[inline]
pub const fn current_version() -> HashVersionSpec {
    HashVersion::CURRENT.spec()
}
