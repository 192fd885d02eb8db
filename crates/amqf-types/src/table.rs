use std::collections::HashMap;
use std::fmt;

use crate::value::FieldValue;

/// A decoded field table: short byte-string keys mapped to values.
///
/// Entries are kept in the order their keys first appeared on the wire so
/// rendering and re-encoding are deterministic. The wire format does not
/// forbid repeated keys; when one shows up, the later value replaces the
/// earlier one in place (last write wins, first position kept).
///
/// Keys are opaque bytes. Nothing here assumes they are UTF-8; the
/// `Display` impl renders them lossily.
///
/// Equality ignores entry order: two tables are equal when they hold the
/// same keys with equal values.
///
/// Lookups go through a key → position index, so decoding a table with
/// `n` distinct keys stays linear in `n`.
#[derive(Clone, Debug, Default)]
pub struct FieldTable {
  entries: Vec<(Vec<u8>, FieldValue)>,
  index: HashMap<Vec<u8>, usize>,
}

impl FieldTable {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      entries: Vec::with_capacity(capacity),
      index: HashMap::with_capacity(capacity),
    }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Insert or replace the value under `key`.
  ///
  /// Returns the previous value if the key was already present. A replaced
  /// entry keeps its original position.
  pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: FieldValue) -> Option<FieldValue> {
    let key = key.into();
    if let Some(&position) = self.index.get(&key) {
      return Some(std::mem::replace(&mut self.entries[position].1, value));
    }
    self.index.insert(key.clone(), self.entries.len());
    self.entries.push((key, value));
    None
  }

  #[must_use]
  pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&FieldValue> {
    self
      .index
      .get(key.as_ref())
      .map(|&position| &self.entries[position].1)
  }

  #[must_use]
  pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
    self.index.contains_key(key.as_ref())
  }

  /// Remove `key`, returning its value. Later entries shift up.
  pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<FieldValue> {
    let position = self.index.remove(key.as_ref())?;
    let (_, value) = self.entries.remove(position);
    for slot in self.index.values_mut() {
      if *slot > position {
        *slot -= 1;
      }
    }
    Some(value)
  }

  /// Iterate entries in first-seen order.
  pub fn iter(&self) -> impl Iterator<Item = (&[u8], &FieldValue)> {
    self.entries.iter().map(|(k, v)| (k.as_slice(), v))
  }

  pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
    self.entries.iter().map(|(k, _)| k.as_slice())
  }
}

impl PartialEq for FieldTable {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len()
      && self
        .iter()
        .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
  }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, FieldValue)> for FieldTable {
  fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
    let mut table = Self::new();
    for (key, value) in iter {
      table.insert(key, value);
    }
    table
  }
}

impl IntoIterator for FieldTable {
  type Item = (Vec<u8>, FieldValue);
  type IntoIter = std::vec::IntoIter<(Vec<u8>, FieldValue)>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl fmt::Display for FieldTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}: {value}", String::from_utf8_lossy(key))?;
    }
    f.write_str("}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_and_get() {
    let mut table = FieldTable::new();
    assert!(table.insert("a", FieldValue::Boolean(true)).is_none());
    assert_eq!(table.get("a"), Some(&FieldValue::Boolean(true)));
    assert_eq!(table.get(b"a"), Some(&FieldValue::Boolean(true)));
    assert!(table.get("b").is_none());
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn duplicate_key_last_write_wins_in_place() {
    let mut table = FieldTable::new();
    table.insert("x", FieldValue::LongInt(1));
    table.insert("y", FieldValue::LongInt(2));
    let previous = table.insert("x", FieldValue::LongInt(3));

    assert_eq!(previous, Some(FieldValue::LongInt(1)));
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("x"), Some(&FieldValue::LongInt(3)));
    let keys: Vec<&[u8]> = table.keys().collect();
    assert_eq!(keys, vec![b"x".as_slice(), b"y".as_slice()]);
  }

  #[test]
  fn equality_ignores_order() {
    let a: FieldTable = [("p", FieldValue::Void), ("q", FieldValue::ShortInt(7))]
      .into_iter()
      .collect();
    let b: FieldTable = [("q", FieldValue::ShortInt(7)), ("p", FieldValue::Void)]
      .into_iter()
      .collect();
    assert_eq!(a, b);

    let c: FieldTable = [("q", FieldValue::ShortInt(8)), ("p", FieldValue::Void)]
      .into_iter()
      .collect();
    assert_ne!(a, c);
  }

  #[test]
  fn non_utf8_keys_are_kept_verbatim() {
    let mut table = FieldTable::new();
    table.insert(vec![0xFFu8, 0xFE], FieldValue::Boolean(false));
    assert!(table.contains_key([0xFFu8, 0xFE]));
    assert_eq!(table.to_string(), "{\u{FFFD}\u{FFFD}: false}");
  }

  #[test]
  fn remove_shifts_entries() {
    let mut table: FieldTable = [
      ("a", FieldValue::LongInt(1)),
      ("b", FieldValue::LongInt(2)),
      ("c", FieldValue::LongInt(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(table.remove("b"), Some(FieldValue::LongInt(2)));
    assert!(table.remove("b").is_none());
    let keys: Vec<&[u8]> = table.keys().collect();
    assert_eq!(keys, vec![b"a".as_slice(), b"c".as_slice()]);
  }

  #[test]
  fn lookups_follow_entries_after_remove() {
    let mut table: FieldTable = (0..50)
      .map(|i| (format!("k{i}"), FieldValue::LongInt(i)))
      .collect();
    assert_eq!(table.remove("k10"), Some(FieldValue::LongInt(10)));
    assert_eq!(table.len(), 49);
    for i in (0..50).filter(|&i| i != 10) {
      assert_eq!(table.get(format!("k{i}")), Some(&FieldValue::LongInt(i)), "k{i}");
    }
    table.insert("k10", FieldValue::Void);
    assert_eq!(table.keys().last(), Some(b"k10".as_slice()));
    table.insert("k49", FieldValue::Boolean(true));
    assert_eq!(table.get("k49"), Some(&FieldValue::Boolean(true)));
    assert_eq!(table.len(), 50);
  }

  #[test]
  fn many_distinct_keys() {
    let table: FieldTable = (0..100_000)
      .map(|i| (format!("{i:06}"), FieldValue::LongInt(i)))
      .collect();
    assert_eq!(table.len(), 100_000);
    assert_eq!(table.get("099999"), Some(&FieldValue::LongInt(99_999)));
    assert_eq!(table.keys().next(), Some(b"000000".as_slice()));
  }

  #[test]
  fn display() {
    let table: FieldTable = [("a", FieldValue::Boolean(true)), ("n", FieldValue::LongInt(-4))]
      .into_iter()
      .collect();
    assert_eq!(table.to_string(), "{a: true, n: -4}");
    assert_eq!(FieldTable::new().to_string(), "{}");
  }
}
