//! Integration tests using the official RFC 3394 test vectors.
//!
//! Wrap outputs are compared bit-exactly against the vectors from
//! RFC 3394 sections 4.1, 4.4, and 4.6 (key length equal to KEK length),
//! alongside the tamper-detection and length-validation properties.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

use aeskeywrap::{
    unwrap_key, unwrap_key_from_string, wrap_key, wrap_key_to_string, Encoding, Kek, KeywrapError,
    WrappedKey,
};

struct TestVector {
    bits: usize,
    key: &'static str,
    kek: &'static str,
    wrapped_key: &'static str,
}

const TEST_VECTORS: &[TestVector] = &[
    // https://datatracker.ietf.org/doc/html/rfc3394#section-4.1
    TestVector {
        bits: 128,
        key: "00112233445566778899AABBCCDDEEFF",
        kek: "000102030405060708090A0B0C0D0E0F",
        wrapped_key: "1FA68B0A8112B447AEF34BD8FB5A7B829D3E862371D2CFE5",
    },
    // https://datatracker.ietf.org/doc/html/rfc3394#section-4.4
    TestVector {
        bits: 192,
        key: "00112233445566778899AABBCCDDEEFF0001020304050607",
        kek: "000102030405060708090A0B0C0D0E0F1011121314151617",
        wrapped_key: "031D33264E15D33268F24EC260743EDCE1C6C7DDEE725A936BA814915C6762D2",
    },
    // https://datatracker.ietf.org/doc/html/rfc3394#section-4.6
    TestVector {
        bits: 256,
        key: "00112233445566778899AABBCCDDEEFF000102030405060708090A0B0C0D0E0F",
        kek: "000102030405060708090A0B0C0D0E0F101112131415161718191A1B1C1D1E1F",
        wrapped_key: "28C9F404C4B810F4CBCCB35CFB87F8263F5786E2D80ED326CBC7F0E71A99F43BFB988B9B7A02DD21",
    },
];

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("valid hex")
}

// =============================================================================
// Known-vector conformance
// =============================================================================

#[test]
fn test_wrap_matches_rfc3394_vectors() {
    for vector in TEST_VECTORS {
        let wrapped_key = wrap_key(&decode(vector.key), &decode(vector.kek))
            .unwrap_or_else(|e| panic!("{} bit wrap failed: {e}", vector.bits));

        assert_eq!(
            wrapped_key,
            decode(vector.wrapped_key),
            "{} bit wrap mismatch",
            vector.bits
        );
    }
}

#[test]
fn test_unwrap_recovers_rfc3394_vectors() {
    for vector in TEST_VECTORS {
        let recovered = unwrap_key(&decode(vector.wrapped_key), &decode(vector.kek))
            .unwrap_or_else(|e| panic!("{} bit unwrap failed: {e}", vector.bits));

        assert_eq!(
            recovered.as_slice(),
            decode(vector.key).as_slice(),
            "{} bit unwrap mismatch",
            vector.bits
        );
    }
}

#[test]
fn test_round_trip_on_non_vector_keys() {
    for length in [16, 24, 32] {
        let key: Vec<u8> = (0..length).map(|i| (i as u8).wrapping_mul(37)).collect();
        let kek: Vec<u8> = (0..length).map(|i| (i as u8).wrapping_mul(59) ^ 0x5A).collect();

        let wrapped_key = wrap_key(&key, &kek).expect("wrap should succeed");
        assert_eq!(wrapped_key.len(), length + 8);

        let recovered = unwrap_key(&wrapped_key, &kek).expect("unwrap should succeed");
        assert_eq!(recovered.as_slice(), key.as_slice());
    }
}

// =============================================================================
// Tamper and wrong-KEK sensitivity
// =============================================================================

#[test]
fn test_every_single_bit_flip_fails_authentication() {
    for vector in TEST_VECTORS {
        let kek = decode(vector.kek);
        let wrapped_key = decode(vector.wrapped_key);

        for bit in 0..wrapped_key.len() * 8 {
            let mut tampered = wrapped_key.clone();
            tampered[bit / 8] ^= 1 << (bit % 8);

            let result = unwrap_key(&tampered, &kek);
            assert!(
                matches!(result, Err(KeywrapError::AuthenticationFailed)),
                "{} bit vector accepted a flip of bit {bit}",
                vector.bits
            );
        }
    }
}

#[test]
fn test_wrong_kek_fails_authentication() {
    for vector in TEST_VECTORS {
        let wrapped_key = decode(vector.wrapped_key);
        let mut kek = decode(vector.kek);
        kek[0] ^= 1;

        let result = unwrap_key(&wrapped_key, &kek);
        assert!(
            matches!(result, Err(KeywrapError::AuthenticationFailed)),
            "{} bit vector unwrapped under a wrong KEK",
            vector.bits
        );
    }
}

// =============================================================================
// Length validation
// =============================================================================

#[test]
fn test_wrap_rejects_20_byte_kek() {
    let result = wrap_key(&[0u8; 32], &[0u8; 20]);
    assert!(matches!(result, Err(KeywrapError::InvalidLength)));
}

#[test]
fn test_wrap_rejects_key_shorter_than_kek() {
    // RFC 3394 also wraps 128-bit keys under larger KEKs; this crate keeps
    // the stricter equal-length contract.
    let result = wrap_key(&[0u8; 16], &[0u8; 24]);
    assert!(matches!(result, Err(KeywrapError::InvalidLength)));
}

#[test]
fn test_unwrap_rejects_mismatched_wrapped_key_length() {
    // 32-byte wrapped key would suit a 24-byte KEK, not a 16-byte one.
    let result = unwrap_key(&[0u8; 32], &[0u8; 16]);
    assert!(matches!(result, Err(KeywrapError::InvalidLength)));

    let result = unwrap_key(&[0u8; 30], &[0u8; 24]);
    assert!(matches!(result, Err(KeywrapError::InvalidLength)));
}

// =============================================================================
// String facade and typed layer
// =============================================================================

#[test]
fn test_wrap_key_to_hex_string_matches_vector() {
    let vector = &TEST_VECTORS[1];

    let encoded = wrap_key_to_string(&decode(vector.key), &decode(vector.kek), Encoding::Hex)
        .expect("wrap should succeed");
    assert_eq!(encoded, vector.wrapped_key.to_lowercase());
}

#[test]
fn test_unwrap_key_from_uppercase_hex_string() {
    let vector = &TEST_VECTORS[1];

    let recovered = unwrap_key_from_string(vector.wrapped_key, &decode(vector.kek), Encoding::Hex)
        .expect("unwrap should succeed");
    assert_eq!(recovered.as_slice(), decode(vector.key).as_slice());
}

#[test]
fn test_string_facade_base64_round_trip() {
    let vector = &TEST_VECTORS[2];
    let key = decode(vector.key);
    let kek = decode(vector.kek);

    let encoded =
        wrap_key_to_string(&key, &kek, Encoding::Base64).expect("wrap should succeed");
    let recovered = unwrap_key_from_string(&encoded, &kek, Encoding::Base64)
        .expect("unwrap should succeed");
    assert_eq!(recovered.as_slice(), key.as_slice());
}

#[test]
fn test_typed_layer_matches_raw_functions() {
    for vector in TEST_VECTORS {
        let kek = Kek::try_from(decode(vector.kek)).expect("valid KEK");

        let wrapped = kek.try_wrap(&decode(vector.key)).expect("wrap should succeed");
        assert_eq!(wrapped.as_bytes(), decode(vector.wrapped_key).as_slice());

        let recovered = kek.try_unwrap(&wrapped).expect("unwrap should succeed");
        assert_eq!(recovered.as_slice(), decode(vector.key).as_slice());
    }
}

#[test]
fn test_wrapped_key_decodes_from_vector_hex() {
    let vector = &TEST_VECTORS[0];

    let wrapped = WrappedKey::decode(vector.wrapped_key, Encoding::Hex).expect("valid hex");
    let kek = Kek::try_from(decode(vector.kek)).expect("valid KEK");

    let recovered = kek.try_unwrap(&wrapped).expect("unwrap should succeed");
    assert_eq!(recovered.as_slice(), decode(vector.key).as_slice());
}
