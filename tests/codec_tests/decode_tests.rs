//! Decoder Tests
//!
//! Tests verify:
//! - Truncation checks on header and key table
//! - Bounds checks on data-region references
//! - Unknown tags are rejected
//! - Name handling (NUL termination, full 16-byte names)
//! - Merge semantics of decode_into

use bsm::codec::{decode, decode_into, encode, MIN_ENCODED_SIZE};
use bsm::{BsmError, Store};

/// Build one 21-byte table entry by hand
fn entry(name: &[u8], tag: u8, payload: [u8; 4]) -> Vec<u8> {
    let mut bytes = vec![0u8; 16];
    bytes[..name.len()].copy_from_slice(name);
    bytes.push(tag);
    bytes.extend_from_slice(&payload);
    bytes
}

fn data_ref(offset: u16, length: u16) -> [u8; 4] {
    let o = offset.to_le_bytes();
    let l = length.to_le_bytes();
    [o[0], o[1], l[0], l[1]]
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_decode_empty_input() {
    match decode(&[]) {
        Err(BsmError::Truncated { needed, actual }) => {
            assert_eq!(needed, MIN_ENCODED_SIZE);
            assert_eq!(actual, 0);
        }
        other => panic!("Expected Truncated, got {:?}", other),
    }
}

#[test]
fn test_decode_below_minimum() {
    for len in 1..MIN_ENCODED_SIZE {
        let bytes = vec![0u8; len];
        assert!(
            matches!(decode(&bytes), Err(BsmError::Truncated { .. })),
            "length {} should be truncated",
            len
        );
    }
}

#[test]
fn test_decode_encoded_empty_store_is_truncated() {
    let bytes = encode(&Store::new()).unwrap();
    assert!(matches!(decode(&bytes), Err(BsmError::Truncated { .. })));
}

#[test]
fn test_decode_table_shorter_than_header_claims() {
    let mut bytes = vec![3u8];
    bytes.extend(entry(b"one", 0, [1, 0, 0, 0]));
    bytes.extend(entry(b"two", 0, [2, 0, 0, 0]));

    match decode(&bytes) {
        Err(BsmError::Truncated { needed, actual }) => {
            assert_eq!(needed, 64);
            assert_eq!(actual, 43);
        }
        other => panic!("Expected Truncated, got {:?}", other),
    }
}

#[test]
fn test_decode_zero_keys_with_padding() {
    let bytes = vec![0u8; MIN_ENCODED_SIZE];
    let store = decode(&bytes).unwrap();
    assert!(store.is_empty());
}

// =============================================================================
// Inline Value Tests
// =============================================================================

#[test]
fn test_decode_int_and_float() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"i", 0, (-5i32).to_le_bytes()));
    bytes.extend(entry(b"f", 1, 1.5f32.to_bits().to_le_bytes()));

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_int("i"), -5);
    assert_eq!(store.get_float("f"), 1.5);
}

#[test]
fn test_decode_float_bit_pattern() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"negzero", 1, (-0.0f32).to_bits().to_le_bytes()));

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_float("negzero").to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_decode_full_width_name() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"exactly16bytes!!", 0, [9, 0, 0, 0]));

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_int("exactly16bytes!!"), 9);
}

#[test]
fn test_decode_duplicate_names_last_wins() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"dup", 0, [1, 0, 0, 0]));
    bytes.extend(entry(b"dup", 0, [2, 0, 0, 0]));

    let store = decode(&bytes).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get_int("dup"), 2);
}

// =============================================================================
// Data Region Tests
// =============================================================================

#[test]
fn test_decode_string_and_raw() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"s", 2, data_ref(0, 5)));
    bytes.extend(entry(b"r", 3, data_ref(5, 2)));
    bytes.extend_from_slice(b"hello");
    bytes.extend_from_slice(&[0xFF, 0x00]);

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_string("s"), "hello");
    assert_eq!(store.get_raw("r"), &[0xFF, 0x00]);
}

#[test]
fn test_decode_reference_ending_at_buffer_end() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"tail", 3, data_ref(1, 3)));
    bytes.extend_from_slice(&[0, 1, 2, 3]);

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_raw("tail"), &[1, 2, 3]);
}

#[test]
fn test_decode_reference_past_end() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"raw", 3, data_ref(0, 10)));
    bytes.extend_from_slice(&[1, 2, 3, 4, 5]);

    match decode(&bytes) {
        Err(BsmError::OutOfBounds {
            name,
            offset,
            length,
            available,
        }) => {
            assert_eq!(name, "raw");
            assert_eq!(offset, 0);
            assert_eq!(length, 10);
            assert_eq!(available, 5);
        }
        other => panic!("Expected OutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_decode_checks_against_data_region_end() {
    // offset + length (6) is well under the buffer length (26), but the
    // slice starts after the table and runs 2 bytes past the end.
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"s", 2, data_ref(2, 4)));
    bytes.extend_from_slice(b"abcd");

    assert_eq!(bytes.len(), 26);
    assert!(matches!(decode(&bytes), Err(BsmError::OutOfBounds { .. })));
}

#[test]
fn test_decode_max_reference_does_not_panic() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"s", 2, data_ref(u16::MAX, u16::MAX)));
    bytes.extend_from_slice(b"tiny");

    assert!(matches!(decode(&bytes), Err(BsmError::OutOfBounds { .. })));
}

#[test]
fn test_decode_error_after_valid_entries() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"good", 0, [1, 0, 0, 0]));
    bytes.extend(entry(b"bad", 3, data_ref(0, 100)));

    assert!(matches!(decode(&bytes), Err(BsmError::OutOfBounds { .. })));
}

#[test]
fn test_decode_invalid_utf8_string_is_replaced() {
    let mut bytes = vec![1u8];
    bytes.extend(entry(b"s", 2, data_ref(0, 2)));
    bytes.extend_from_slice(&[b'a', 0xFF]);

    let store = decode(&bytes).unwrap();

    assert_eq!(store.get_string("s"), "a\u{FFFD}");
}

// =============================================================================
// Tag Tests
// =============================================================================

#[test]
fn test_decode_unknown_tag() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"fine", 0, [1, 0, 0, 0]));
    bytes.extend(entry(b"weird", 4, [0, 0, 0, 0]));

    match decode(&bytes) {
        Err(BsmError::UnknownType { name, tag }) => {
            assert_eq!(name, "weird");
            assert_eq!(tag, 4);
        }
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

// =============================================================================
// decode_into Tests
// =============================================================================

#[test]
fn test_decode_into_merges() {
    let mut source = Store::new();
    source.set_int("shared", 2);
    source.set_string("new", "value");
    let bytes = encode(&source).unwrap();

    let mut target = Store::new();
    target.set_int("shared", 1);
    target.set_int("kept", 7);

    decode_into(&mut target, &bytes).unwrap();

    assert_eq!(target.len(), 3);
    assert_eq!(target.get_int("shared"), 2);
    assert_eq!(target.get_int("kept"), 7);
    assert_eq!(target.get_string("new"), "value");
}

#[test]
fn test_decode_into_failure_leaves_store_untouched() {
    let mut bytes = vec![2u8];
    bytes.extend(entry(b"good", 0, [1, 0, 0, 0]));
    bytes.extend(entry(b"bad", 3, data_ref(0, 100)));

    let mut target = Store::new();
    target.set_int("kept", 7);
    let before = target.clone();

    assert!(decode_into(&mut target, &bytes).is_err());
    assert_eq!(target, before);
}
