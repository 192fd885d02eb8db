use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Protocol-level type names used by method signatures.
///
/// Method frames know the type of every argument up front, so their
/// payloads carry no tag byte. These names are how the protocol layer asks
/// for a specific decoder.
///
/// ```text
/// ┌─────────────┬────────────────┬──────────────────────┐
/// │ Name        │ Variant        │ Decodes as           │
/// ├─────────────┼────────────────┼──────────────────────┤
/// │ "bit"       │ Bit            │ boolean              │
/// │ "long"      │ Long           │ i32                  │
/// │ "longlong"  │ LongLong       │ i64                  │
/// │ "longstr"   │ LongStr        │ long string          │
/// │ "octet"     │ Octet          │ i8                   │
/// │ "short"     │ Short          │ i16                  │
/// │ "shortstr"  │ ShortStr       │ short string         │
/// │ "table"     │ Table          │ field table          │
/// │ "timestamp" │ Timestamp      │ timestamp            │
/// └─────────────┴────────────────┴──────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeName {
  Bit,
  Long,
  LongLong,
  LongStr,
  Octet,
  Short,
  ShortStr,
  Table,
  Timestamp,
}

impl TypeName {
  /// Every name, sorted alphabetically by its wire spelling.
  pub const ALL: [Self; 9] = [
    Self::Bit,
    Self::Long,
    Self::LongLong,
    Self::LongStr,
    Self::Octet,
    Self::Short,
    Self::ShortStr,
    Self::Table,
    Self::Timestamp,
  ];

  /// The canonical lowercase spelling.
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Bit => "bit",
      Self::Long => "long",
      Self::LongLong => "longlong",
      Self::LongStr => "longstr",
      Self::Octet => "octet",
      Self::Short => "short",
      Self::ShortStr => "shortstr",
      Self::Table => "table",
      Self::Timestamp => "timestamp",
    }
  }

  /// Look up a name by its canonical spelling. Matching is exact and
  /// case-sensitive.
  ///
  /// # Errors
  ///
  /// [`TypeError::UnknownTypeName`] for anything not in [`TypeName::ALL`].
  pub fn from_name(name: &str) -> Result<Self, TypeError> {
    Self::ALL
      .into_iter()
      .find(|candidate| candidate.as_str() == name)
      .ok_or_else(|| TypeError::UnknownTypeName {
        name: name.to_owned(),
      })
  }
}

impl FromStr for TypeName {
  type Err = TypeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_name(s)
  }
}

impl fmt::Display for TypeName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_names_roundtrip() {
    for name in TypeName::ALL {
      assert_eq!(TypeName::from_name(name.as_str()).unwrap(), name);
      assert_eq!(name.to_string().parse::<TypeName>().unwrap(), name);
    }
  }

  #[test]
  fn names_are_case_sensitive() {
    assert!(TypeName::from_name("Table").is_err());
    assert!(TypeName::from_name("LONG").is_err());
  }

  #[test]
  fn unknown_name_carries_input() {
    assert_eq!(
      TypeName::from_name("double"),
      Err(TypeError::UnknownTypeName {
        name: "double".to_owned()
      })
    );
  }
}
