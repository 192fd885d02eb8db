//! Edge cases: truncation, malformed lengths, hostile nesting, and the
//! error offsets reported for each.

use amqf_decoder::{
    DecodeError, DecoderConfig, FieldDecoder, decode_by_type, decode_tagged_value, field_table,
};
use amqf_encoder::to_tagged_bytes;
use amqf_tests::{hex_bytes, mixed_table, nested_arrays};
use amqf_types::FieldValue;

// ── Truncation ────────────────────────────────────────────────────────────────

#[test]
fn every_proper_prefix_is_truncated() {
    let full = to_tagged_bytes(&FieldValue::Table(mixed_table())).unwrap();
    assert!(decode_tagged_value(&full).is_ok());

    for len in 0..full.len() {
        match decode_tagged_value(&full[..len]) {
            Err(DecodeError::TruncatedBuffer { offset, .. }) => {
                assert!(offset <= len, "prefix {len}: offset {offset} past end");
            }
            other => panic!("prefix {len}: expected TruncatedBuffer, got {other:?}"),
        }
    }
}

#[test]
fn table_length_larger_than_buffer() {
    // The declared body is 6 bytes but only 4 follow the prefix.
    let err = decode_tagged_value(&hex_bytes("46 00 00 00 06 01 61 74 01")).unwrap_err();
    assert_eq!(
        err,
        DecodeError::TruncatedBuffer {
            offset: 5,
            needed: 6,
            available: 4,
        }
    );
}

#[test]
fn huge_declared_length_does_not_allocate() {
    let err = decode_tagged_value(&hex_bytes("46 7F FF FF FF 00")).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedBuffer {
            needed: 0x7FFF_FFFF,
            ..
        }
    ));

    let err = decode_tagged_value(&hex_bytes("53 FF FF FF FF 61")).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedBuffer { offset: 5, .. }));
}

#[test]
fn empty_input() {
    assert!(matches!(
        decode_tagged_value(&[]),
        Err(DecodeError::TruncatedBuffer { offset: 0, .. })
    ));
    assert!(matches!(
        decode_by_type(&[], "bit"),
        Err(DecodeError::TruncatedBuffer { offset: 0, .. })
    ));
}

// ── Malformed lengths ─────────────────────────────────────────────────────────

#[test]
fn negative_array_length() {
    let err = decode_tagged_value(&hex_bytes("41 80 00 00 00")).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedLength {
            offset: 1,
            declared: i64::from(i32::MIN),
            reason: "negative length",
        }
    );
}

#[test]
fn element_crossing_array_end() {
    // Array declares 3 body bytes; its first element is a 5-byte long int.
    let err = decode_tagged_value(&hex_bytes("41 00 00 00 03 49 00 00 00 01")).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedLength {
            offset: 5,
            declared: 3,
            ..
        }
    ));
}

#[test]
fn nested_table_crossing_outer_end() {
    // Outer table declares 7 bytes; the inner table after key "k" alone
    // takes 9. The error points at the inner table's tag.
    let bytes = hex_bytes("46 00 00 00 07 01 6B 46 00 00 00 04 01 61 74 01");
    let err = decode_tagged_value(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedLength {
            offset: 7,
            declared: 7,
            ..
        }
    ));
}

// ── Tags and names ────────────────────────────────────────────────────────────

#[test]
fn unknown_tags_are_rejected() {
    for tag in [0x01u8, b'b', b'B', b'd', b'l', b'u', b'x', b'V', 0xFF] {
        assert_eq!(
            decode_tagged_value(&[tag, 0x00, 0x00]),
            Err(DecodeError::UnknownTypeTag { tag, offset: 0 }),
            "tag {tag:#04x}"
        );
    }
}

#[test]
fn unknown_tag_inside_table_reports_absolute_offset() {
    let bytes = hex_bytes("46 00 00 00 08 01 61 74 01 01 62 99 00");
    assert_eq!(
        decode_tagged_value(&bytes),
        Err(DecodeError::UnknownTypeTag {
            tag: 0x99,
            offset: 11,
        })
    );
}

#[test]
fn typed_decode_rejects_field_only_names() {
    for name in ["octet", "float", "decimal", "array", "void", "Table", ""] {
        assert_eq!(
            decode_by_type(&[0x00; 8], name),
            Err(DecodeError::UnknownTypeName {
                name: name.to_owned()
            }),
            "name {name:?}"
        );
    }
}

// ── Nesting ───────────────────────────────────────────────────────────────────

#[test]
fn default_depth_accepts_sixty_four_levels() {
    let bytes = nested_arrays(64);
    let (consumed, _) = decode_tagged_value(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());
}

#[test]
fn default_depth_rejects_sixty_five_levels() {
    let bytes = nested_arrays(65);
    assert_eq!(
        decode_tagged_value(&bytes),
        Err(DecodeError::DepthExceeded { limit: 64 })
    );
}

#[test]
fn deep_nesting_with_raised_limit() {
    let decoder = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(1_000));
    let bytes = nested_arrays(300);
    assert_eq!(decoder.decode_tagged_value(&bytes).unwrap().0, bytes.len());
}

#[test]
fn depth_applies_to_typed_tables() {
    let decoder = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(1));
    // {"a": {}} as an untagged table.
    let bytes = hex_bytes("00 00 00 07 01 61 46 00 00 00 00");
    assert_eq!(
        decoder.decode_by_type(&bytes, "table"),
        Err(DecodeError::DepthExceeded { limit: 1 })
    );
    assert!(field_table(&bytes).is_ok());
}

#[test]
fn wide_table_decodes_in_linear_time() {
    // 80 000 distinct 3-byte keys, each mapped to void: about 400 KB.
    let entries = 80_000u32;
    let mut body = Vec::new();
    for i in 0..entries {
        body.push(3);
        body.extend_from_slice(&i.to_be_bytes()[1..]);
        body.push(0x00);
    }
    let mut bytes = vec![b'F'];
    bytes.extend_from_slice(&u32::try_from(body.len()).unwrap().to_be_bytes());
    bytes.extend_from_slice(&body);

    let started = std::time::Instant::now();
    let (consumed, value) = decode_tagged_value(&bytes).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(consumed, bytes.len());
    let table = value.as_table().unwrap();
    assert_eq!(table.len(), 80_000);
    assert_eq!(table.get([0x01u8, 0x38, 0x7F]), Some(&FieldValue::Void));
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "decoding took {elapsed:?}"
    );
}

// ── Values ────────────────────────────────────────────────────────────────────

#[test]
fn timestamp_beyond_calendar() {
    assert_eq!(
        decode_tagged_value(&hex_bytes("54 FF FF FF FF FF FF FF FF")),
        Err(DecodeError::TimestampOutOfRange { seconds: u64::MAX })
    );
}

#[test]
fn boolean_accepts_any_nonzero_byte() {
    assert_eq!(
        decode_tagged_value(&hex_bytes("74 7F")).unwrap(),
        (2, FieldValue::Boolean(true))
    );
}

#[test]
fn strings_are_not_utf8_checked() {
    let (_, value) = decode_tagged_value(&hex_bytes("53 00 00 00 02 C3 28")).unwrap();
    assert_eq!(value.as_bytes(), Some([0xC3u8, 0x28].as_slice()));
}

#[test]
fn duplicate_keys_keep_first_position_and_last_value() {
    // {"a": 1, "b": 2, "a": 3} as short ints.
    let bytes = hex_bytes("46 00 00 00 0F 01 61 55 00 01 01 62 55 00 02 01 61 55 00 03");
    let (consumed, value) = decode_tagged_value(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(value.to_string(), "{a: 3, b: 2}");
}
