// src/aliases.rs
//! # Secure-Gate Type Aliases
//!
//! Buffers that carry key material are wrapped in [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! types so they are wiped on drop and never printed by accident.
//!
//! Sizes depend on the hash version, so the dynamic (heap) wrapper is used
//! rather than fixed-size arrays.
//!
//! All secure types require explicit `.expose_secret()` or `.expose_secret_mut()`
//! to reach the underlying bytes.

use secure_gate::Dynamic;

/// Random salt drawn for one hash creation.
pub type SaltBytes = Dynamic<Vec<u8>>;

/// PBKDF2 output, either freshly derived or read back from an encoded hash.
pub type DerivedKey = Dynamic<Vec<u8>>;
