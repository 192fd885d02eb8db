use amqf_types::TypeError;
use amqf_wire::WireError;

/// Errors that can occur while decoding field values.
///
/// Decoding stops at the first error; there are no partial results. Every
/// `offset` is absolute within the buffer handed to the outermost decode
/// call, so a failure deep inside a nested table still points at the exact
/// byte that caused it.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── UnknownTypeTag        ← tag byte outside the closed tag set
///   ├── UnknownTypeName       ← typed decode asked for an unsupported name
///   ├── TruncatedBuffer       ← a read ran past the end of the buffer
///   ├── MalformedLength       ← negative composite length, or an element
///   │                           crossing its composite's declared end
///   ├── DepthExceeded         ← composites nested deeper than allowed
///   └── TimestampOutOfRange   ← seconds beyond the representable calendar
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The byte at `offset` is not a known type tag.
    #[error("unknown type tag {tag:#04X} at offset {offset}")]
    UnknownTypeTag { tag: u8, offset: usize },

    /// The typed decoder has no entry for `name`.
    ///
    /// `octet` lands here too: it exists in the registry for protocol
    /// method decoders but is not a field-level type.
    #[error("unknown type name {name:?}")]
    UnknownTypeName { name: String },

    /// A read at `offset` needed `needed` bytes but only `available`
    /// remained.
    #[error("truncated buffer at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A composite's declared byte length is unusable.
    ///
    /// `offset` points at the composite's length prefix for a negative
    /// length, or at the element that crossed the boundary otherwise.
    #[error("malformed length {declared} at offset {offset}: {reason}")]
    MalformedLength {
        offset: usize,
        declared: i64,
        reason: &'static str,
    },

    /// Composites were nested more than `limit` levels deep.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A timestamp's seconds cannot be mapped to a calendar date.
    #[error("timestamp {seconds} is out of the representable range")]
    TimestampOutOfRange { seconds: u64 },
}

impl DecodeError {
    /// Move every offset this error carries `by` bytes further into the
    /// buffer.
    ///
    /// Sub-decoders report offsets relative to the slice they were given.
    /// Each caller that handed out a sub-slice shifts the error back into
    /// its own coordinates on the way up.
    #[must_use]
    pub fn shifted(self, by: usize) -> Self {
        match self {
            Self::UnknownTypeTag { tag, offset } => Self::UnknownTypeTag {
                tag,
                offset: offset + by,
            },
            Self::TruncatedBuffer {
                offset,
                needed,
                available,
            } => Self::TruncatedBuffer {
                offset: offset + by,
                needed,
                available,
            },
            Self::MalformedLength {
                offset,
                declared,
                reason,
            } => Self::MalformedLength {
                offset: offset + by,
                declared,
                reason,
            },
            other => other,
        }
    }

    /// Lift a [`TypeError`] raised by a lookup at `offset`.
    pub(crate) fn from_type_error(err: TypeError, offset: usize) -> Self {
        match err {
            TypeError::UnknownTypeTag { tag } => Self::UnknownTypeTag { tag, offset },
            TypeError::UnknownTypeName { name } => Self::UnknownTypeName { name },
        }
    }
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::UnexpectedEof {
                offset,
                needed,
                available,
            } => Self::TruncatedBuffer {
                offset,
                needed,
                available,
            },
            // Only writers raise this; a reader never checks prefixes.
            WireError::LengthOverflow { length, .. } => Self::MalformedLength {
                offset: 0,
                declared: i64::try_from(length).unwrap_or(i64::MAX),
                reason: "length does not fit its prefix",
            },
        }
    }
}
