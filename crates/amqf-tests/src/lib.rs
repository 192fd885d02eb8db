//! Shared fixtures for the AMQF integration tests, benchmarks and the
//! golden fixture generator.
//!
//! The value builders here are the single source of truth for what each
//! golden payload contains: `generate_golden` encodes them, and the
//! conformance suite decodes the committed bytes and compares.

#![allow(clippy::missing_panics_doc)]

use std::path::{Path, PathBuf};

use amqf_encoder::TableBuilder;
use amqf_types::{Decimal, FieldTable, FieldValue, Timestamp};

/// `tests/golden/` inside this crate.
#[must_use]
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Read `tests/golden/<fixture>/payload.amqf`.
#[must_use]
pub fn golden_payload(fixture: &str) -> Vec<u8> {
    let path = golden_dir().join(fixture).join("payload.amqf");
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Parse hex with optional whitespace, for readable test vectors.
#[must_use]
pub fn hex_bytes(text: &str) -> Vec<u8> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).unwrap_or_else(|e| panic!("bad hex {text:?}: {e}"))
}

// ── Golden values ─────────────────────────────────────────────────────────────

/// A typical message `headers` table, as a headers-exchange binding uses.
#[must_use]
pub fn headers_table() -> FieldTable {
    TableBuilder::new()
        .string("x-match", "all")
        .long_int("x-priority", 5)
        .boolean("retry", true)
        .build()
}

/// `{l: [{z: 7}]}`: table → array → table.
#[must_use]
pub fn nested_composites() -> FieldValue {
    let inner = TableBuilder::new()
        .field("z", FieldValue::ShortInt(7))
        .build();
    let outer = TableBuilder::new()
        .field("l", FieldValue::Array(vec![FieldValue::Table(inner)]))
        .build();
    FieldValue::Table(outer)
}

/// One of every scalar tag, written back to back.
#[must_use]
pub fn scalar_run() -> Vec<FieldValue> {
    vec![
        FieldValue::Void,
        FieldValue::Boolean(true),
        FieldValue::LongInt(42),
        FieldValue::Decimal(Decimal::new(2, 12345)),
        FieldValue::Timestamp(
            Timestamp::from_unix_seconds(1_301_493_909).expect("timestamp in range"),
        ),
        FieldValue::ShortString(b"hi".to_vec()),
        FieldValue::LongLongInt(-1),
        FieldValue::Float(1.5),
        FieldValue::ShortInt(-2),
    ]
}

// ── Generated inputs ──────────────────────────────────────────────────────────

/// `depth` empty arrays nested inside each other, tag included.
#[must_use]
pub fn nested_arrays(depth: usize) -> Vec<u8> {
    let mut bytes = vec![b'A', 0, 0, 0, 0];
    for _ in 1..depth {
        let len = i32::try_from(bytes.len()).expect("nesting fits in i32");
        let mut wrapped = Vec::with_capacity(bytes.len() + 5);
        wrapped.push(b'A');
        wrapped.extend_from_slice(&len.to_be_bytes());
        wrapped.extend_from_slice(&bytes);
        bytes = wrapped;
    }
    bytes
}

/// A flat table with `entries` long-int entries keyed `k0`, `k1`, ...
#[must_use]
pub fn wide_table(entries: usize) -> FieldTable {
    (0..entries)
        .map(|i| {
            let value = FieldValue::LongInt(i32::try_from(i).unwrap_or(i32::MAX));
            (format!("k{i}"), value)
        })
        .collect()
}

/// A table nesting a headers table, an array of strings and a decimal,
/// roughly the shape of a rich message property set.
#[must_use]
pub fn mixed_table() -> FieldTable {
    TableBuilder::new()
        .table(
            "headers",
            TableBuilder::new()
                .string("content-type", "application/json")
                .long_long_int("x-delay", 30_000),
        )
        .field(
            "tags",
            FieldValue::Array(vec![
                FieldValue::LongString(b"alpha".to_vec()),
                FieldValue::LongString(b"beta".to_vec()),
                FieldValue::Void,
            ]),
        )
        .decimal("price", Decimal::new(2, 1999))
        .build()
}
