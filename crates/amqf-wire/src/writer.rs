use crate::error::WireError;

/// Largest body a composite (field table / field array) may declare.
///
/// The length prefix is a signed 32-bit integer on the wire.
pub const MAX_COMPOSITE_LEN: usize = i32::MAX as usize;

/// Largest payload a long string may carry (unsigned 32-bit prefix).
pub const MAX_LONG_STRING_LEN: usize = u32::MAX as usize;

/// Largest payload a short string or table key may carry.
pub const MAX_SHORT_STRING_LEN: usize = u8::MAX as usize;

/// Placeholder for a 4-byte length prefix whose value is only known once
/// the body after it has been written.
///
/// Returned by [`WireWriter::begin_length_prefixed`] and consumed by
/// [`WireWriter::end_length_prefixed`].
#[derive(Debug)]
#[must_use = "a reserved length prefix must be closed with end_length_prefixed"]
pub struct LengthMark {
    at: usize,
}

/// Big-endian byte sink for the reference encoder.
///
/// `WireWriter` accumulates bytes into an owned `Vec<u8>`. Fixed-width
/// writes are infallible; length-prefixed writes check that the payload
/// fits its prefix and fail with [`WireError::LengthOverflow`] otherwise.
///
/// ```text
///   short string:  len (u8)      │ bytes [len]
///   long string:   len (u32 BE)  │ bytes [len]
///   composite:     len (i32 BE)  │ body  [len]   ← back-patched
/// ```
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create a writer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create a writer with a pre-allocated buffer capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the bytes written so far.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_i8(&mut self, value: i8) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn put_f32(&mut self, value: f32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append raw bytes with no prefix.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a 1-byte length prefix followed by `bytes`.
    ///
    /// # Errors
    ///
    /// [`WireError::LengthOverflow`] if `bytes` is longer than 255.
    pub fn put_short_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        let len = u8::try_from(bytes.len()).map_err(|_| WireError::LengthOverflow {
            length: bytes.len(),
            max: MAX_SHORT_STRING_LEN,
        })?;
        self.put_u8(len);
        self.put_bytes(bytes);
        Ok(())
    }

    /// Append a 4-byte unsigned length prefix followed by `bytes`.
    ///
    /// # Errors
    ///
    /// [`WireError::LengthOverflow`] if `bytes` is longer than `u32::MAX`.
    pub fn put_long_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        let len = u32::try_from(bytes.len()).map_err(|_| WireError::LengthOverflow {
            length: bytes.len(),
            max: MAX_LONG_STRING_LEN,
        })?;
        self.put_u32(len);
        self.put_bytes(bytes);
        Ok(())
    }

    /// Reserve a 4-byte signed length prefix to be filled in later.
    pub fn begin_length_prefixed(&mut self) -> LengthMark {
        let at = self.buf.len();
        self.buf.extend_from_slice(&[0u8; 4]);
        LengthMark { at }
    }

    /// Back-patch the prefix reserved by `mark` with the number of bytes
    /// written since.
    ///
    /// # Errors
    ///
    /// [`WireError::LengthOverflow`] if the body exceeds `i32::MAX` bytes.
    pub fn end_length_prefixed(&mut self, mark: LengthMark) -> Result<(), WireError> {
        let body_len = self.buf.len() - mark.at - 4;
        let len = i32::try_from(body_len).map_err(|_| WireError::LengthOverflow {
            length: body_len,
            max: MAX_COMPOSITE_LEN,
        })?;
        self.buf[mark.at..mark.at + 4].copy_from_slice(&len.to_be_bytes());
        Ok(())
    }

    /// Drop everything after the first `len` bytes. Does nothing if fewer
    /// than `len` bytes have been written.
    ///
    /// The encoder uses this to roll back a value that failed halfway, so
    /// a caller's buffer never keeps a dangling tag or length prefix.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Consume the writer and return the accumulated bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
