// src/crypto/kdf/mod.rs
//! # Key Derivation Functions (KDF)
//!
//! PBKDF2-HMAC is the only KDF: every registered hash version uses it with a
//! different digest and output length.
//!
//! For most use cases, go through [`CredentialHasher`](crate::CredentialHasher),
//! which picks the parameters recorded in the encoded hash automatically.

pub mod pbkdf2;
