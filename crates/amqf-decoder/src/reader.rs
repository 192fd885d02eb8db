use amqf_types::FieldValue;

use crate::decoder::FieldDecoder;
use crate::error::DecodeError;

/// Iterator over consecutive tagged values packed back to back in one
/// buffer.
///
/// Yields `(offset, value)` for each value, where `offset` is where its
/// tag byte sits. Stops cleanly at the end of the buffer. The first error
/// is yielded once, with offsets relative to the whole buffer, and ends
/// the iteration.
///
/// ```rust
/// use amqf_decoder::ValueReader;
/// use amqf_types::FieldValue;
///
/// let buf = [0x74, 0x01, 0x00];
/// let values: Vec<_> = ValueReader::new(&buf).collect::<Result<_, _>>().unwrap();
/// assert_eq!(values, vec![(0, FieldValue::Boolean(true)), (2, FieldValue::Void)]);
/// ```
#[derive(Clone, Debug)]
pub struct ValueReader<'a> {
    decoder: FieldDecoder,
    buf: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> ValueReader<'a> {
    /// Read `buf` with the default configuration.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_decoder(FieldDecoder::new(), buf)
    }

    #[must_use]
    pub fn with_decoder(decoder: FieldDecoder, buf: &'a [u8]) -> Self {
        Self {
            decoder,
            buf,
            pos: 0,
            failed: false,
        }
    }

    /// Offset of the next value to be read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for ValueReader<'_> {
    type Item = Result<(usize, FieldValue), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buf.len() {
            return None;
        }
        let offset = self.pos;
        match self.decoder.decode_tagged_value(&self.buf[offset..]) {
            Ok((consumed, value)) => {
                self.pos += consumed;
                Some(Ok((offset, value)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err.shifted(offset)))
            }
        }
    }
}

impl std::iter::FusedIterator for ValueReader<'_> {}
