use std::fmt;

use crate::decimal::Decimal;
use crate::table::FieldTable;
use crate::tag::TypeTag;
use crate::timestamp::Timestamp;

/// An ordered field array. Element order is significant and preserved.
pub type FieldArray = Vec<FieldValue>;

/// A single decoded field value.
///
/// This is the closed set of shapes the field decoder can produce. Callers
/// match on it exhaustively instead of inspecting types at runtime.
///
/// ```text
/// ┌──────────────┬──────┬────────────────────────────────┐
/// │ Variant      │ Tag  │ Rust payload                   │
/// ├──────────────┼──────┼────────────────────────────────┤
/// │ Boolean      │ 't'  │ bool                           │
/// │ Octet        │  -   │ i8 (typed decoding only)       │
/// │ ShortInt     │ 'U'  │ i16                            │
/// │ LongInt      │ 'I'  │ i32                            │
/// │ LongLongInt  │ 'L'  │ i64                            │
/// │ Float        │ 'f'  │ f32                            │
/// │ Decimal      │ 'D'  │ Decimal                        │
/// │ ShortString  │ 's'  │ Vec<u8>                        │
/// │ LongString   │ 'S'  │ Vec<u8>                        │
/// │ Timestamp    │ 'T'  │ Timestamp                      │
/// │ Array        │ 'A'  │ Vec<FieldValue>                │
/// │ Table        │ 'F'  │ FieldTable                     │
/// │ Void         │ 0x00 │ (none)                         │
/// └──────────────┴──────┴────────────────────────────────┘
/// ```
///
/// Short and long strings stay distinct variants so a decoded value can be
/// written back with the same tag it arrived with. Both hold raw bytes;
/// the wire makes no promise that they are UTF-8.
///
/// Equality compares floats by their bit pattern, so a NaN equals the same
/// NaN and decoding one buffer twice always gives equal values. `0.0` and
/// `-0.0` are different values on the wire and compare unequal.
#[derive(Clone, Debug)]
pub enum FieldValue {
  Boolean(bool),
  /// Signed byte. Only reachable through typed decoding: the tag table has
  /// no entry for it.
  Octet(i8),
  ShortInt(i16),
  LongInt(i32),
  LongLongInt(i64),
  Float(f32),
  Decimal(Decimal),
  ShortString(Vec<u8>),
  LongString(Vec<u8>),
  Timestamp(Timestamp),
  Array(FieldArray),
  Table(FieldTable),
  /// The absent value carried by a `0x00` tag.
  Void,
}

impl FieldValue {
  /// The tag this value is written with, or `None` for [`FieldValue::Octet`].
  #[must_use]
  pub fn tag(&self) -> Option<TypeTag> {
    let tag = match self {
      Self::Boolean(_) => TypeTag::Boolean,
      Self::Octet(_) => return None,
      Self::ShortInt(_) => TypeTag::ShortInt,
      Self::LongInt(_) => TypeTag::LongInt,
      Self::LongLongInt(_) => TypeTag::LongLongInt,
      Self::Float(_) => TypeTag::Float,
      Self::Decimal(_) => TypeTag::Decimal,
      Self::ShortString(_) => TypeTag::ShortString,
      Self::LongString(_) => TypeTag::LongString,
      Self::Timestamp(_) => TypeTag::Timestamp,
      Self::Array(_) => TypeTag::Array,
      Self::Table(_) => TypeTag::Table,
      Self::Void => TypeTag::Void,
    };
    Some(tag)
  }

  /// Short lowercase label for diagnostics.
  #[must_use]
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Boolean(_) => "boolean",
      Self::Octet(_) => "octet",
      Self::ShortInt(_) => "short-int",
      Self::LongInt(_) => "long-int",
      Self::LongLongInt(_) => "long-long-int",
      Self::Float(_) => "float",
      Self::Decimal(_) => "decimal",
      Self::ShortString(_) => "short-string",
      Self::LongString(_) => "long-string",
      Self::Timestamp(_) => "timestamp",
      Self::Array(_) => "array",
      Self::Table(_) => "table",
      Self::Void => "void",
    }
  }

  #[must_use]
  pub fn is_void(&self) -> bool {
    matches!(self, Self::Void)
  }

  #[must_use]
  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Boolean(b) => Some(*b),
      _ => None,
    }
  }

  /// Any of the integer variants, widened to `i64`.
  #[must_use]
  pub fn as_i64(&self) -> Option<i64> {
    match self {
      Self::Octet(v) => Some(i64::from(*v)),
      Self::ShortInt(v) => Some(i64::from(*v)),
      Self::LongInt(v) => Some(i64::from(*v)),
      Self::LongLongInt(v) => Some(*v),
      _ => None,
    }
  }

  /// Raw bytes of either string variant.
  #[must_use]
  pub fn as_bytes(&self) -> Option<&[u8]> {
    match self {
      Self::ShortString(b) | Self::LongString(b) => Some(b),
      _ => None,
    }
  }

  #[must_use]
  pub fn as_array(&self) -> Option<&[FieldValue]> {
    match self {
      Self::Array(items) => Some(items),
      _ => None,
    }
  }

  #[must_use]
  pub fn as_table(&self) -> Option<&FieldTable> {
    match self {
      Self::Table(table) => Some(table),
      _ => None,
    }
  }
}

impl PartialEq for FieldValue {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Boolean(a), Self::Boolean(b)) => a == b,
      (Self::Octet(a), Self::Octet(b)) => a == b,
      (Self::ShortInt(a), Self::ShortInt(b)) => a == b,
      (Self::LongInt(a), Self::LongInt(b)) => a == b,
      (Self::LongLongInt(a), Self::LongLongInt(b)) => a == b,
      (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
      (Self::Decimal(a), Self::Decimal(b)) => a == b,
      (Self::ShortString(a), Self::ShortString(b)) | (Self::LongString(a), Self::LongString(b)) => {
        a == b
      }
      (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
      (Self::Array(a), Self::Array(b)) => a == b,
      (Self::Table(a), Self::Table(b)) => a == b,
      (Self::Void, Self::Void) => true,
      _ => false,
    }
  }
}

impl From<bool> for FieldValue {
  fn from(value: bool) -> Self {
    Self::Boolean(value)
  }
}

impl From<i8> for FieldValue {
  fn from(value: i8) -> Self {
    Self::Octet(value)
  }
}

impl From<i16> for FieldValue {
  fn from(value: i16) -> Self {
    Self::ShortInt(value)
  }
}

impl From<i32> for FieldValue {
  fn from(value: i32) -> Self {
    Self::LongInt(value)
  }
}

impl From<i64> for FieldValue {
  fn from(value: i64) -> Self {
    Self::LongLongInt(value)
  }
}

impl From<f32> for FieldValue {
  fn from(value: f32) -> Self {
    Self::Float(value)
  }
}

impl From<Decimal> for FieldValue {
  fn from(value: Decimal) -> Self {
    Self::Decimal(value)
  }
}

impl From<Timestamp> for FieldValue {
  fn from(value: Timestamp) -> Self {
    Self::Timestamp(value)
  }
}

impl From<FieldTable> for FieldValue {
  fn from(value: FieldTable) -> Self {
    Self::Table(value)
  }
}

impl From<FieldArray> for FieldValue {
  fn from(value: FieldArray) -> Self {
    Self::Array(value)
  }
}

/// Quote raw bytes as a lossy, escaped string literal.
fn write_quoted(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
  write!(f, "\"{}\"", String::from_utf8_lossy(bytes).escape_debug())
}

impl fmt::Display for FieldValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Boolean(b) => write!(f, "{b}"),
      Self::Octet(v) => write!(f, "{v}"),
      Self::ShortInt(v) => write!(f, "{v}"),
      Self::LongInt(v) => write!(f, "{v}"),
      Self::LongLongInt(v) => write!(f, "{v}"),
      // Debug keeps the trailing ".0" so floats never read as integers.
      Self::Float(v) => write!(f, "{v:?}"),
      Self::Decimal(d) => write!(f, "{d}"),
      Self::ShortString(b) | Self::LongString(b) => write_quoted(f, b),
      Self::Timestamp(ts) => write!(f, "{ts}"),
      Self::Array(items) => {
        f.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            f.write_str(", ")?;
          }
          write!(f, "{item}")?;
        }
        f.write_str("]")
      }
      Self::Table(table) => write!(f, "{table}"),
      Self::Void => f.write_str("void"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn octet_has_no_tag() {
    assert_eq!(FieldValue::Octet(1).tag(), None);
    assert_eq!(FieldValue::Void.tag(), Some(TypeTag::Void));
    assert_eq!(
      FieldValue::Array(vec![]).tag(),
      Some(TypeTag::Array)
    );
  }

  #[test]
  fn floats_compare_by_bits() {
    let nan = FieldValue::Float(f32::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(
      FieldValue::Array(vec![FieldValue::Float(f32::NAN)]),
      FieldValue::Array(vec![FieldValue::Float(f32::NAN)])
    );
    assert_ne!(FieldValue::Float(0.0), FieldValue::Float(-0.0));
    assert_ne!(FieldValue::Float(1.0), FieldValue::LongInt(1));
  }

  #[test]
  fn integer_widening() {
    assert_eq!(FieldValue::Octet(-1).as_i64(), Some(-1));
    assert_eq!(FieldValue::ShortInt(300).as_i64(), Some(300));
    assert_eq!(FieldValue::LongLongInt(i64::MIN).as_i64(), Some(i64::MIN));
    assert_eq!(FieldValue::Boolean(true).as_i64(), None);
  }

  #[test]
  fn string_accessors() {
    let short = FieldValue::ShortString(b"abc".to_vec());
    let long = FieldValue::LongString(b"abc".to_vec());
    assert_eq!(short.as_bytes(), Some(b"abc".as_slice()));
    assert_eq!(long.as_bytes(), short.as_bytes());
    assert_ne!(short, long, "short and long strings stay distinct");
  }

  #[test]
  fn display_scalars() {
    assert_eq!(FieldValue::Boolean(true).to_string(), "true");
    assert_eq!(FieldValue::Float(1.0).to_string(), "1.0");
    assert_eq!(FieldValue::Decimal(Decimal::new(2, 105)).to_string(), "1.05");
    assert_eq!(FieldValue::ShortString(b"hi \"x\"".to_vec()).to_string(), "\"hi \\\"x\\\"\"");
    assert_eq!(FieldValue::Void.to_string(), "void");
  }

  #[test]
  fn display_nested() {
    let mut inner = FieldTable::new();
    inner.insert("k", FieldValue::LongInt(1));
    let value = FieldValue::Array(vec![
      FieldValue::Table(inner),
      FieldValue::Array(vec![]),
      FieldValue::Void,
    ]);
    assert_eq!(value.to_string(), "[{k: 1}, [], void]");
  }
}
