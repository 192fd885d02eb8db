use amqf_types::{FieldTable, FieldValue};
use serde_json::{Map, Number, Value, json};

/// Convert a decoded value into JSON for `--json` output.
///
/// ```text
/// ┌──────────────────────┬─────────────────────────────────────────────┐
/// │ FieldValue           │ JSON                                        │
/// ├──────────────────────┼─────────────────────────────────────────────┤
/// │ Boolean              │ true / false                                │
/// │ integers             │ number                                      │
/// │ Float                │ number (null for NaN / infinity)            │
/// │ Decimal              │ exact string, e.g. "123.45"                 │
/// │ Short/LongString     │ string if UTF-8, else {"hex": "..."}        │
/// │ Timestamp            │ RFC 3339 string                             │
/// │ Array                │ array                                       │
/// │ Table                │ object in entry order; keys as text if      │
/// │                      │ UTF-8, else "0x" + hex                      │
/// │ Void                 │ null                                        │
/// └──────────────────────┴─────────────────────────────────────────────┘
/// ```
pub fn to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Boolean(b) => Value::Bool(*b),
        FieldValue::Octet(v) => json!(v),
        FieldValue::ShortInt(v) => json!(v),
        FieldValue::LongInt(v) => json!(v),
        FieldValue::LongLongInt(v) => json!(v),
        FieldValue::Float(v) => Number::from_f64(f64::from(*v)).map_or(Value::Null, Value::Number),
        FieldValue::Decimal(d) => Value::String(d.to_string()),
        FieldValue::ShortString(bytes) | FieldValue::LongString(bytes) => bytes_to_json(bytes),
        FieldValue::Timestamp(ts) => Value::String(ts.to_string()),
        FieldValue::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        FieldValue::Table(table) => table_to_json(table),
        FieldValue::Void => Value::Null,
    }
}

fn bytes_to_json(bytes: &[u8]) -> Value {
    match std::str::from_utf8(bytes) {
        Ok(text) => Value::String(text.to_owned()),
        Err(_) => json!({ "hex": hex::encode(bytes) }),
    }
}

/// Distinct byte keys must stay distinct JSON keys, so invalid UTF-8 is
/// spelled out in hex rather than replaced.
fn key_to_json(key: &[u8]) -> String {
    match std::str::from_utf8(key) {
        Ok(text) => text.to_owned(),
        Err(_) => format!("0x{}", hex::encode(key)),
    }
}

fn table_to_json(table: &FieldTable) -> Value {
    let mut map = Map::with_capacity(table.len());
    for (key, value) in table.iter() {
        map.insert(key_to_json(key), to_json(value));
    }
    Value::Object(map)
}
