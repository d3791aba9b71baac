// src/error.rs
//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T>`](Result) so callers can match on each
//! structural failure separately.
//!
//! A wrong password is **not** an error: verification returns `Ok(false)`.

use thiserror::Error;

/// The error type for all credential hashing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredhashError {
    /// The encoded hash names a version that is not registered in this build.
    ///
    /// Never substituted with a default version: a corrupted or
    /// forward-incompatible value must be surfaced to the caller.
    #[error("Unknown hash version: {0}")]
    UnknownVersion(u16),

    /// The encoded text is not valid hexadecimal, or is too short to hold
    /// the fixed header.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The decoded length does not match the size the named version requires.
    #[error("Truncated hash: expected {expected} bytes, got {actual}")]
    TruncatedHash { expected: usize, actual: usize },

    /// The secure random source could not supply salt bytes.
    ///
    /// Fatal for hash creation: a weak or missing salt is never acceptable.
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// Iteration count outside the accepted range (zero, below the configured
    /// floor at creation time, or above the configured ceiling).
    #[error("Invalid iteration count: {0}")]
    InvalidIterations(u32),

    /// The PBKDF2 primitive rejected its parameters.
    #[error("KDF error: {0}")]
    Kdf(String),

    /// Invalid hasher configuration.
    #[error("Config error: {0}")]
    Config(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CredhashError>;
