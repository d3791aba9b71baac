// src/crypto/hmac.rs
//! HMAC-SHA primitives (re-exports from `hmac` + `sha2`).
//!
//! These are the PRFs PBKDF2 runs on, one per [`HashAlgorithm`](crate::HashAlgorithm).

use hmac::Hmac;
use sha2::Sha512;

pub type HmacSha512 = Hmac<Sha512>;
