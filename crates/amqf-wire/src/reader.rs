use crate::error::WireError;

/// Bounds-checked big-endian cursor over a borrowed byte slice.
///
/// Every `read_*` call either returns the requested value and advances the
/// cursor, or fails with [`WireError::UnexpectedEof`] and leaves the cursor
/// where it was. Nothing ever indexes past the end of the slice.
///
/// ```text
///   buf:  [ consumed ............ | remaining ............ ]
///                                 ^ pos
/// ```
///
/// All multi-byte integers on the AMQP wire are big-endian (network order),
/// so there are no little-endian variants here.
#[derive(Clone, Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader positioned at offset 0 of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread tail of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Consume `len` raw bytes and return them as a borrowed slice.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let available = self.buf.len() - self.pos;
        if len > available {
            return Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed: len,
                available,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Advance the cursor by `len` bytes without looking at them.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `len` bytes remain.
    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.read_bytes(len).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read one unsigned byte.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] on an exhausted buffer.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        self.read_array::<1>().map(|[b]| b)
    }

    /// Read one signed byte.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] on an exhausted buffer.
    pub fn read_i8(&mut self) -> Result<i8, WireError> {
        self.read_array::<1>().map(i8::from_be_bytes)
    }

    /// Read a big-endian `i16`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        self.read_array::<2>().map(i16::from_be_bytes)
    }

    /// Read a big-endian `u32`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.read_array::<4>().map(u32::from_be_bytes)
    }

    /// Read a big-endian `i32`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        self.read_array::<4>().map(i32::from_be_bytes)
    }

    /// Read a big-endian `u64`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64, WireError> {
        self.read_array::<8>().map(u64::from_be_bytes)
    }

    /// Read a big-endian `i64`.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 8 bytes remain.
    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        self.read_array::<8>().map(i64::from_be_bytes)
    }

    /// Read a big-endian IEEE-754 single-precision float.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        self.read_array::<4>().map(f32::from_be_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let buf = [
            0x00, 0x2A, // i16 = 42
            0xFF, 0xFF, 0xFF, 0xFE, // i32 = -2
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, // u64 = 256
        ];
        let mut reader = WireReader::new(&buf);
        assert_eq!(reader.read_i16().unwrap(), 42);
        assert_eq!(reader.read_i32().unwrap(), -2);
        assert_eq!(reader.read_u64().unwrap(), 256);
        assert!(reader.is_empty());
        assert_eq!(reader.position(), buf.len());
    }

    #[test]
    fn reads_signed_byte() {
        let mut reader = WireReader::new(&[0x80, 0x7F]);
        assert_eq!(reader.read_i8().unwrap(), -128);
        assert_eq!(reader.read_i8().unwrap(), 127);
    }

    #[test]
    fn reads_float() {
        let buf = 1.5f32.to_be_bytes();
        let mut reader = WireReader::new(&buf);
        assert!((reader.read_f32().unwrap() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn read_bytes_borrows_from_input() {
        let buf = b"hello world";
        let mut reader = WireReader::new(buf);
        assert_eq!(reader.read_bytes(5).unwrap(), b"hello");
        reader.skip(1).unwrap();
        assert_eq!(reader.remaining(), b"world");
    }

    #[test]
    fn empty_input_reports_eof_at_zero() {
        let mut reader = WireReader::new(&[]);
        assert_eq!(
            reader.read_u8(),
            Err(WireError::UnexpectedEof {
                offset: 0,
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn short_read_leaves_cursor_untouched() {
        let mut reader = WireReader::new(&[0x01, 0x02, 0x03]);
        reader.read_u8().unwrap();
        let err = reader.read_i32().unwrap_err();
        assert_eq!(
            err,
            WireError::UnexpectedEof {
                offset: 1,
                needed: 4,
                available: 2
            }
        );
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), &[0x02, 0x03]);
    }

    #[test]
    fn huge_length_does_not_overflow() {
        let mut reader = WireReader::new(&[0u8; 4]);
        assert!(matches!(
            reader.read_bytes(usize::MAX),
            Err(WireError::UnexpectedEof { .. })
        ));
    }
}
