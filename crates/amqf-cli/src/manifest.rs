//! JSON manifest read by `amqf encode`.
//!
//! ```json
//! {
//!   "values": [
//!     { "value": { "type": "boolean", "value": true } },
//!     { "as": "shortstr", "value": { "type": "short_string", "value": "amq.topic" } },
//!     {
//!       "value": {
//!         "type": "table",
//!         "value": [
//!           { "key": "x-priority", "value": { "type": "long_int", "value": 5 } },
//!           { "key": "when", "value": { "type": "timestamp", "value": 1301493909 } },
//!           { "key": "price", "value": { "type": "decimal", "value": { "scale": 2, "mantissa": 999 } } },
//!           { "key": "gone", "value": { "type": "void" } }
//!         ]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Each entry is written as a tagged value unless it names a protocol type
//! with `"as"`, in which case it is written untagged. Table entries are a
//! list so their order survives.
//!
//! ```text
//! ┌────────────────┬──────────────────────────────────────────┐
//! │ type           │ value                                    │
//! ├────────────────┼──────────────────────────────────────────┤
//! │ boolean        │ true / false                             │
//! │ octet          │ -128 ..= 127 (typed entries only)        │
//! │ short_int      │ i16                                      │
//! │ long_int       │ i32                                      │
//! │ long_long_int  │ i64                                      │
//! │ float          │ f32                                      │
//! │ decimal        │ { "scale": u8, "mantissa": i32 }         │
//! │ short_string   │ string                                   │
//! │ long_string    │ string                                   │
//! │ timestamp      │ u64 seconds since the epoch              │
//! │ array          │ list of values                           │
//! │ table          │ list of { "key", "value" } entries       │
//! │ void           │ (omitted)                                │
//! └────────────────┴──────────────────────────────────────────┘
//! ```

use amqf_types::{Decimal, FieldTable, FieldValue, Timestamp, TypeName};
use anyhow::{Context, Result, anyhow};

#[derive(Debug, serde::Deserialize)]
pub struct Manifest {
    pub values: Vec<ManifestItem>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ManifestItem {
    /// Protocol type to write this value as, without a tag.
    #[serde(default, rename = "as")]
    pub encode_as: Option<String>,
    pub value: ManifestValue,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ManifestValue {
    Boolean(bool),
    Octet(i8),
    ShortInt(i16),
    LongInt(i32),
    LongLongInt(i64),
    Float(f32),
    Decimal { scale: u8, mantissa: i32 },
    ShortString(String),
    LongString(String),
    Timestamp(u64),
    Array(Vec<ManifestValue>),
    Table(Vec<ManifestEntry>),
    Void,
}

#[derive(Debug, serde::Deserialize)]
pub struct ManifestEntry {
    pub key: String,
    pub value: ManifestValue,
}

impl ManifestItem {
    /// The protocol type named by `"as"`, if any.
    pub fn type_name(&self) -> Result<Option<TypeName>> {
        self.encode_as
            .as_deref()
            .map(TypeName::from_name)
            .transpose()
            .context("bad \"as\" type name")
    }
}

impl ManifestValue {
    pub fn into_field_value(self) -> Result<FieldValue> {
        let value = match self {
            Self::Boolean(b) => FieldValue::Boolean(b),
            Self::Octet(v) => FieldValue::Octet(v),
            Self::ShortInt(v) => FieldValue::ShortInt(v),
            Self::LongInt(v) => FieldValue::LongInt(v),
            Self::LongLongInt(v) => FieldValue::LongLongInt(v),
            Self::Float(v) => FieldValue::Float(v),
            Self::Decimal { scale, mantissa } => FieldValue::Decimal(Decimal::new(scale, mantissa)),
            Self::ShortString(s) => FieldValue::ShortString(s.into_bytes()),
            Self::LongString(s) => FieldValue::LongString(s.into_bytes()),
            Self::Timestamp(seconds) => FieldValue::Timestamp(
                Timestamp::from_unix_seconds(seconds)
                    .ok_or_else(|| anyhow!("timestamp {seconds} is out of range"))?,
            ),
            Self::Array(items) => FieldValue::Array(
                items
                    .into_iter()
                    .map(Self::into_field_value)
                    .collect::<Result<_>>()?,
            ),
            Self::Table(entries) => {
                let mut table = FieldTable::with_capacity(entries.len());
                for entry in entries {
                    let value = entry
                        .value
                        .into_field_value()
                        .with_context(|| format!("in table key {:?}", entry.key))?;
                    table.insert(entry.key, value);
                }
                FieldValue::Table(table)
            }
            Self::Void => FieldValue::Void,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_manifest() {
        let text = r#"{
            "values": [
                { "value": { "type": "table", "value": [
                    { "key": "n", "value": { "type": "long_int", "value": 7 } },
                    { "key": "d", "value": { "type": "decimal", "value": { "scale": 1, "mantissa": 15 } } },
                    { "key": "v", "value": { "type": "void" } }
                ] } },
                { "as": "short", "value": { "type": "short_int", "value": -2 } }
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(text).unwrap();
        assert_eq!(manifest.values.len(), 2);

        let typed = &manifest.values[1];
        assert_eq!(typed.type_name().unwrap(), Some(TypeName::Short));

        let mut items = manifest.values.into_iter();
        let table = items.next().unwrap().value.into_field_value().unwrap();
        assert_eq!(table.to_string(), "{n: 7, d: 1.5, v: void}");
    }

    #[test]
    fn unknown_as_name_is_an_error() {
        let item = ManifestItem {
            encode_as: Some("double".to_owned()),
            value: ManifestValue::Void,
        };
        assert!(item.type_name().is_err());
    }
}
