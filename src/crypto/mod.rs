// src/crypto/mod.rs
//! Low-level crypto primitives: HMAC aliases, PBKDF2 and the secure RNG.
//!
//! See crate root for re-exports (e.g., `derive_pbkdf2_key`, `SecureRng`).

pub mod hmac;
pub mod kdf;
pub mod rng;
