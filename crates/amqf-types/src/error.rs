/// Errors raised while mapping raw identifiers onto the closed type sets
/// of this crate.
///
/// These are lookups, not parse failures: a `TypeError` never carries a
/// byte offset because it has no buffer. The decoder attaches position
/// information when it lifts one of these into its own error type.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ TypeError                                            │
/// │   ├── UnknownTypeTag   ← tag byte outside TypeTag    │
/// │   └── UnknownTypeName  ← name outside TypeName       │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  /// A value's leading tag byte is not one of the field-table tags.
  #[error("unknown field type tag {tag:#04X}")]
  UnknownTypeTag { tag: u8 },

  /// A protocol type name is not one the registry knows about.
  #[error("unknown field type name {name:?}")]
  UnknownTypeName { name: String },
}
