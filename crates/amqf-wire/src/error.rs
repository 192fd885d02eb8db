/// Low-level byte errors raised by [`WireReader`](crate::WireReader) and
/// [`WireWriter`](crate::WireWriter).
///
/// Offsets are relative to the start of the slice the reader was built
/// over. Callers that hand sub-slices to nested readers are responsible for
/// shifting them back into their own coordinate space.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than remain in the buffer.
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A length does not fit in the prefix it has to be written with.
    ///
    /// Short strings carry a 1-byte prefix (max 255), long strings a
    /// 4-byte unsigned prefix and composites a 4-byte signed prefix.
    #[error("length {length} exceeds the {max} maximum of its prefix")]
    LengthOverflow { length: usize, max: usize },
}
