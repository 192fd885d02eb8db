#![no_main]

use amqf_types::{Decimal, FieldTable, FieldValue, Timestamp};
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Boolean(bool),
    ShortInt(i16),
    LongInt(i32),
    LongLongInt(i64),
    Float(u32),
    Decimal { scale: u8, mantissa: i32 },
    ShortString(Vec<u8>),
    LongString(Vec<u8>),
    Timestamp(u32),
    Array(Vec<FuzzValue>),
    Table(Vec<(Vec<u8>, FuzzValue)>),
    Void,
}

fn build(value: FuzzValue) -> FieldValue {
    match value {
        FuzzValue::Boolean(v) => FieldValue::Boolean(v),
        FuzzValue::ShortInt(v) => FieldValue::ShortInt(v),
        FuzzValue::LongInt(v) => FieldValue::LongInt(v),
        FuzzValue::LongLongInt(v) => FieldValue::LongLongInt(v),
        FuzzValue::Float(bits) => FieldValue::Float(f32::from_bits(bits)),
        FuzzValue::Decimal { scale, mantissa } => FieldValue::Decimal(Decimal::new(scale, mantissa)),
        FuzzValue::ShortString(mut bytes) => {
            bytes.truncate(255);
            FieldValue::ShortString(bytes)
        }
        FuzzValue::LongString(bytes) => FieldValue::LongString(bytes),
        FuzzValue::Timestamp(seconds) => Timestamp::from_unix_seconds(u64::from(seconds))
            .map_or(FieldValue::Void, FieldValue::Timestamp),
        FuzzValue::Array(items) => FieldValue::Array(items.into_iter().map(build).collect()),
        FuzzValue::Table(entries) => {
            let mut table = FieldTable::new();
            for (mut key, value) in entries {
                key.truncate(255);
                table.insert(key, build(value));
            }
            FieldValue::Table(table)
        }
        FuzzValue::Void => FieldValue::Void,
    }
}

// Fuzz target: encoder -> decoder roundtrip.
//
// Anything the encoder accepts must decode back to an equal value,
// provided it stays within the default nesting limit.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzValue::arbitrary(&mut u) else {
        return;
    };
    let value = build(input);

    let Ok(bytes) = amqf_encoder::to_tagged_bytes(&value) else {
        return;
    };

    match amqf_decoder::decode_tagged_value(&bytes) {
        Ok((consumed, decoded)) => {
            assert_eq!(consumed, bytes.len());
            assert_eq!(decoded, value);
        }
        Err(amqf_decoder::DecodeError::DepthExceeded { .. }) => {}
        Err(e) => panic!("decoder failed on valid encoder output: {e}"),
    }
});
