// src/consts.rs
//! Global constants for the credential hash format.
//!
//! Includes header layout, PBKDF2 iteration bounds and recommended defaults.

/// Default PBKDF2 iteration count for new hashes.
///
/// A floor that resists offline guessing at interactive latency. Raise it for
/// high-security contexts; lowering it needs an explicit reason.
pub const DEFAULT_ITERATIONS: u32 = 120_000;

/// Minimum allowed PBKDF2 iterations.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iterations (5 million).
///
/// Also bounds the work a crafted stored hash can force during verification.
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Width of the version field (u16, little-endian).
pub const VERSION_FIELD_LEN: usize = 2;

/// Width of the iteration-count field (u32, little-endian).
pub const ITERATIONS_FIELD_LEN: usize = 4;

/// Fixed header preceding salt and derived key.
pub const HEADER_LEN: usize = VERSION_FIELD_LEN + ITERATIONS_FIELD_LEN;
