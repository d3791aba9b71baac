//! tests/header_tests.rs
//! Encoded hash layout and quick version reads

mod common;

use common::{fast_hasher, TEST_ITERATIONS, TEST_PASSWORD};
use credhash_rs::{read_version, resolve_version, CredhashError, EncodedHash, HashVersion};

#[test]
fn read_version_real_world_prefixes() {
    let cases = &[
        ("0100", 1u16),
        ("0200", 2u16),
        ("0100c0d40100", 1u16),
        ("0100E8030000", 1u16),
        ("FF00", 255u16),
        ("0001", 256u16),
    ];

    for &(text, expected) in cases {
        assert_eq!(read_version(text).unwrap(), expected, "prefix {text}");
    }
}

#[test]
fn read_version_needs_two_bytes() {
    assert!(matches!(
        read_version("01"),
        Err(CredhashError::MalformedEncoding(_))
    ));
    assert!(matches!(
        read_version(""),
        Err(CredhashError::MalformedEncoding(_))
    ));
}

#[test]
fn created_hash_layout() {
    let stored = fast_hasher().create_hash(TEST_PASSWORD).unwrap();
    let bytes = hex::decode(&stored).unwrap();

    assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 1);
    assert_eq!(
        u32::from_le_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]),
        TEST_ITERATIONS
    );
    assert_eq!(bytes.len(), resolve_version(1).unwrap().encoded_len());
}

#[test]
fn manual_construction_matches_created_layout() {
    let stored = fast_hasher().create_hash(TEST_PASSWORD).unwrap();
    let parsed = EncodedHash::from_hex(&stored).unwrap();

    let rebuilt = EncodedHash::new(
        parsed.version(),
        parsed.iterations(),
        parsed.salt(),
        parsed.derived_key(),
    )
    .unwrap();
    assert_eq!(rebuilt.to_hex(), stored);
    assert_eq!(rebuilt.to_bytes(), hex::decode(&stored).unwrap());
}

#[test]
fn header_only_is_truncated_not_malformed() {
    // Full header naming a valid version, nothing after it
    assert_eq!(
        EncodedHash::from_hex("010005000000").unwrap_err(),
        CredhashError::TruncatedHash {
            expected: HashVersion::V1.spec().encoded_len(),
            actual: 6
        }
    );
}

#[test]
fn whitespace_around_stored_value_is_ignored() {
    let hasher = fast_hasher();
    let stored = hasher.create_hash(TEST_PASSWORD).unwrap();
    assert!(hasher
        .verify(TEST_PASSWORD, &format!("  {stored}\n"))
        .unwrap());
}
