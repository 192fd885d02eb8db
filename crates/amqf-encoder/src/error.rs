use amqf_types::TypeName;
use amqf_wire::WireError;

/// Errors that can occur while encoding field values.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── ShortStringTooLong  ← short string or table key over 255 bytes
///   ├── CompositeTooLarge   ← table/array body over i32::MAX bytes
///   ├── TypeMismatch        ← typed write given the wrong variant
///   ├── UntaggedValue       ← value with no tag written as tagged
///   └── Wire(WireError)     ← other length overflows from amqf-wire
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("short string is {length} bytes, limit is 255")]
    ShortStringTooLong { length: usize },

    #[error("composite body is {length} bytes, limit is {}", i32::MAX)]
    CompositeTooLarge { length: usize },

    /// [`encode_by_type`](crate::encode_by_type) was handed a value that
    /// does not belong to the requested type.
    #[error("cannot encode a {found} value as {expected}")]
    TypeMismatch {
        expected: TypeName,
        found: &'static str,
    },

    /// Octets only exist in typed positions; no tag byte represents them.
    #[error("{kind} values have no type tag")]
    UntaggedValue { kind: &'static str },

    #[error(transparent)]
    Wire(#[from] WireError),
}
