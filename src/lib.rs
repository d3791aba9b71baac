// src/lib.rs
//! Versioned, self-describing PBKDF2 credential hashes.
//!
//! An encoded hash bundles version, iteration count, salt and derived key in
//! one hex string. Verification reads the parameters back out of the value,
//! so old hashes keep working after the default changes and can be upgraded
//! transparently on the next successful login.
//!
//! ```
//! use credhash_rs::CredentialHasher;
//!
//! let hasher = CredentialHasher::builder().with_iterations(10).build()?;
//! let stored = hasher.create_hash("hunter2")?;
//!
//! assert!(hasher.verify("hunter2", &stored)?);
//! assert!(!hasher.verify("hunter3", &stored)?);
//! assert!(hasher.is_current_version(&stored)?);
//! # Ok::<(), credhash_rs::CredhashError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod hasher;
pub mod header;
pub mod utils;
pub mod version;

// High-level API
pub use builders::CredentialHasherBuilder;
pub use config::HasherConfig;
pub use consts::DEFAULT_ITERATIONS;
pub use error::{CredhashError, Result};
pub use hasher::{create_hash, is_current_version, verify};
pub use hasher::{CredentialHasher, HashInfo, Verification};

// Format & registry
pub use header::{read_version, EncodedHash};
pub use version::{current_version, resolve_version, HashAlgorithm, HashVersion, HashVersionSpec};

// Collaborators: the KDF and the random source
pub use crypto::kdf::pbkdf2::derive_pbkdf2_key;
pub use crypto::rng::{RandomSource, SecureRng};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{hash_batch, verify_batch, BatchHasher};
