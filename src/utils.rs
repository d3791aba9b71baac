// src/utils.rs
//! Utility functions used across the library.

use subtle::ConstantTimeEq;

/// Constant-time equality for byte slices.
///
/// Execution time does not depend on where (or whether) the buffers differ.
/// Slices of different length compare unequal.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
