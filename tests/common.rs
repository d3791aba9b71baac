//! tests/common.rs
//! Common constants and helpers shared across test files

use credhash_rs::{CredentialHasher, CredhashError, RandomSource};

/// Fast iteration count for tests - performance testing is in benches/
pub const TEST_ITERATIONS: u32 = 5;

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple";

#[allow(dead_code)] // Used across multiple test files
pub const WRONG_PASSWORD: &str = "wrong password";

/// Hasher tuned for fast tests (default RNG, `TEST_ITERATIONS`).
#[allow(dead_code)] // Used across multiple test files
pub fn fast_hasher() -> CredentialHasher {
    CredentialHasher::builder()
        .with_iterations(TEST_ITERATIONS)
        .build()
        .unwrap()
}

/// Deterministic "random" source: repeats `pattern` to fill any request.
/// TEST ONLY: lets known-answer vectors be reproduced bit-exactly.
#[allow(dead_code)] // Used across multiple test files
pub struct FixedSaltRng(pub Vec<u8>);

impl RandomSource for FixedSaltRng {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CredhashError> {
        for (byte, value) in dest.iter_mut().zip(self.0.iter().cycle()) {
            *byte = *value;
        }
        Ok(())
    }
}

/// Random source that always fails, as an exhausted entropy device would.
#[allow(dead_code)] // Used across multiple test files
pub struct FailingRng;

impl RandomSource for FailingRng {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), CredhashError> {
        Err(CredhashError::RandomSourceUnavailable(
            "getrandom: device not ready".into(),
        ))
    }
}
