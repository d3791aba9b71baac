//! tests/upgrade_tests.rs
//! Rehash policy: needs_rehash, verify_and_upgrade, inspect

mod common;

use common::{fast_hasher, TEST_ITERATIONS, TEST_PASSWORD, WRONG_PASSWORD};
use credhash_rs::{
    CredentialHasher, CredhashError, EncodedHash, HashAlgorithm, HashVersion, Verification,
};

/// A genuine hash of `secret` at a chosen iteration count, built from the
/// public KDF rather than the hasher.
fn stored_hash(secret: &str, iterations: u32) -> String {
    let spec = HashVersion::V1.spec();
    let salt = vec![0x5a; spec.salt_size];
    let mut key = vec![0u8; spec.output_size];
    credhash_rs::derive_pbkdf2_key(
        secret.as_bytes(),
        &salt,
        iterations,
        spec.algorithm,
        &mut key,
    )
    .unwrap();
    EncodedHash::new(HashVersion::V1, iterations, &salt, &key)
        .unwrap()
        .to_hex()
}

/// Hasher whose policy is stronger than `TEST_ITERATIONS`.
fn stronger_hasher() -> CredentialHasher {
    CredentialHasher::builder()
        .with_iterations(TEST_ITERATIONS * 2)
        .build()
        .unwrap()
}

#[test]
fn weak_hash_still_verifies() {
    let hasher = stronger_hasher();
    let weak = stored_hash(TEST_PASSWORD, 2);

    assert!(hasher.verify(TEST_PASSWORD, &weak).unwrap());
    assert!(!hasher.verify(WRONG_PASSWORD, &weak).unwrap());
}

#[test]
fn current_hash_needs_no_rehash() {
    let hasher = fast_hasher();
    let stored = hasher.create_hash(TEST_PASSWORD).unwrap();
    assert!(!hasher.needs_rehash(&stored).unwrap());

    // More iterations than configured is not a reason to rehash.
    let heavier = stored_hash(TEST_PASSWORD, TEST_ITERATIONS + 1);
    assert!(!hasher.needs_rehash(&heavier).unwrap());
}

#[test]
fn low_iteration_count_needs_rehash() {
    let weak = fast_hasher().create_hash_with_iterations(TEST_PASSWORD, 2).unwrap();
    let stronger = stronger_hasher();

    assert!(stronger.is_current_version(&weak).unwrap());
    assert!(stronger.needs_rehash(&weak).unwrap());
}

#[test]
fn upgrade_issues_fresh_hash_at_configured_iterations() {
    let hasher = stronger_hasher();
    let weak = stored_hash(TEST_PASSWORD, 2);

    let outcome = hasher.verify_and_upgrade(TEST_PASSWORD, &weak).unwrap();
    assert!(outcome.is_valid());

    let upgraded = outcome.upgraded().expect("weak hash should be upgraded");
    assert_ne!(upgraded, weak);
    assert!(hasher.is_current_version(upgraded).unwrap());
    assert!(hasher.verify(TEST_PASSWORD, upgraded).unwrap());
    assert!(!hasher.needs_rehash(upgraded).unwrap());

    let info = hasher.inspect(upgraded).unwrap();
    assert_eq!(info.iterations, TEST_ITERATIONS * 2);
}

#[test]
fn upgrade_leaves_current_hash_alone() {
    let hasher = fast_hasher();
    let stored = hasher.create_hash(TEST_PASSWORD).unwrap();

    assert_eq!(
        hasher.verify_and_upgrade(TEST_PASSWORD, &stored),
        Ok(Verification::Valid)
    );
}

#[test]
fn upgrade_never_issues_hash_for_wrong_secret() {
    let hasher = stronger_hasher();
    let weak = stored_hash(TEST_PASSWORD, 2);

    let outcome = hasher.verify_and_upgrade(WRONG_PASSWORD, &weak).unwrap();
    assert_eq!(outcome, Verification::Invalid);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.upgraded(), None);
}

#[test]
fn upgrade_propagates_structural_errors() {
    let hasher = fast_hasher();
    assert_eq!(
        hasher.verify_and_upgrade(TEST_PASSWORD, "0700000000000000"),
        Err(CredhashError::UnknownVersion(7))
    );
}

#[test]
fn inspect_reports_recorded_parameters() {
    let hasher = fast_hasher();

    let current = hasher.inspect(&hasher.create_hash(TEST_PASSWORD).unwrap()).unwrap();
    assert_eq!(current.version, HashVersion::CURRENT);
    assert_eq!(current.iterations, TEST_ITERATIONS);
    assert_eq!(current.algorithm, HashAlgorithm::Sha512);
    assert_eq!((current.salt_size, current.output_size), (32, 64));

    let weak = hasher.inspect(&stored_hash(TEST_PASSWORD, 7)).unwrap();
    assert_eq!(weak.version, HashVersion::V1);
    assert_eq!(weak.iterations, 7);
}
