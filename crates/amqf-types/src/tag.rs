use crate::error::TypeError;

// ── Macro for wire-byte enum boilerplate ──────────────────────────────
//
// A fixed set of named variants, each mapped to one wire byte, plus the
// conversion pair (to_wire_byte / from_wire_byte) and an ALL table in
// wire order. Keeping the mapping in a single list means the forward and
// reverse matches can never disagree.

macro_rules! wire_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// Every variant, in the order they are declared.
      pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

      /// Encode this variant as a single wire byte.
      #[must_use]
      pub fn to_wire_byte(self) -> u8 {
        match self {
          $( Self::$variant => $wire ),+
        }
      }

      /// Decode a wire byte into this enum.
      ///
      /// # Errors
      ///
      /// Returns `Err(TypeError::UnknownTypeTag)` if the byte
      /// doesn't match any known variant.
      pub fn from_wire_byte(value: u8) -> Result<Self, TypeError> {
        match value {
          $( $wire => Ok(Self::$variant), )+
          other => Err(TypeError::UnknownTypeTag { tag: other }),
        }
      }
    }
  };
}

// ── TypeTag ───────────────────────────────────────────────────────────

wire_enum! {
  /// One-byte type tags that prefix every value inside a field table or
  /// field array.
  ///
  /// The set is closed: anything else on the wire is rejected rather than
  /// skipped, because an unknown tag gives no way to find the end of its
  /// payload.
  ///
  /// ```text
  /// ┌──────┬───────────────┬──────────────────────────────┐
  /// │ Wire │ Variant       │ Payload                      │
  /// ├──────┼───────────────┼──────────────────────────────┤
  /// │ 'A'  │ Array         │ i32 length + tagged values   │
  /// │ 'D'  │ Decimal       │ u8 scale + i32 mantissa      │
  /// │ 'f'  │ Float         │ f32                          │
  /// │ 'F'  │ Table         │ i32 length + key/value pairs │
  /// │ 'I'  │ LongInt       │ i32                          │
  /// │ 'L'  │ LongLongInt   │ i64                          │
  /// │ 't'  │ Boolean       │ u8                           │
  /// │ 'T'  │ Timestamp     │ u64 seconds                  │
  /// │ 's'  │ ShortString   │ u8 length + bytes            │
  /// │ 'S'  │ LongString    │ u32 length + bytes           │
  /// │ 'U'  │ ShortInt      │ i16                          │
  /// │ 0x00 │ Void          │ (none)                       │
  /// └──────┴───────────────┴──────────────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
  pub enum TypeTag {
    Array = b'A',
    Decimal = b'D',
    Float = b'f',
    Table = b'F',
    LongInt = b'I',
    LongLongInt = b'L',
    Boolean = b't',
    Timestamp = b'T',
    ShortString = b's',
    LongString = b'S',
    ShortInt = b'U',
    Void = 0x00,
  }
}

impl TypeTag {
  /// Returns `true` for the two tags whose payload holds further tagged
  /// values.
  #[must_use]
  pub fn is_composite(self) -> bool {
    matches!(self, Self::Array | Self::Table)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_known_tags_roundtrip() {
    for &tag in TypeTag::ALL {
      let wire = tag.to_wire_byte();
      assert_eq!(
        TypeTag::from_wire_byte(wire).unwrap(),
        tag,
        "from_wire_byte mismatch for {wire:#04X}"
      );
    }
    assert_eq!(TypeTag::ALL.len(), 12);
  }

  #[test]
  fn tags_are_case_sensitive() {
    assert_eq!(TypeTag::from_wire_byte(b'f').unwrap(), TypeTag::Float);
    assert_eq!(TypeTag::from_wire_byte(b'F').unwrap(), TypeTag::Table);
    assert_eq!(TypeTag::from_wire_byte(b's').unwrap(), TypeTag::ShortString);
    assert_eq!(TypeTag::from_wire_byte(b'S').unwrap(), TypeTag::LongString);
  }

  #[test]
  fn null_byte_is_void() {
    assert_eq!(TypeTag::from_wire_byte(0x00).unwrap(), TypeTag::Void);
  }

  #[test]
  fn unknown_tag_rejected() {
    assert_eq!(
      TypeTag::from_wire_byte(0x99),
      Err(TypeError::UnknownTypeTag { tag: 0x99 })
    );
    // 'b' (short-short-int in some dialects) is not part of this table.
    assert!(TypeTag::from_wire_byte(b'b').is_err());
  }

  #[test]
  fn composite_tags() {
    assert!(TypeTag::Array.is_composite());
    assert!(TypeTag::Table.is_composite());
    assert!(!TypeTag::LongString.is_composite());
  }
}
