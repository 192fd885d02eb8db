//! One decoder per primitive wire type.
//!
//! Each function reads from offset 0 of the slice it is given and returns
//! `(bytes consumed, value)`. None of them look at a tag byte; the
//! dispatcher strips that first. Offsets in errors are relative to the
//! slice passed in.
//!
//! ```text
//! ┌────────────────┬──────────────────────────────────┬──────────┐
//! │ Decoder        │ Wire                             │ Consumes │
//! ├────────────────┼──────────────────────────────────┼──────────┤
//! │ boolean        │ u8, nonzero = true               │ 1        │
//! │ decimal        │ u8 scale, i32 mantissa           │ 5        │
//! │ floating_point │ f32                              │ 4        │
//! │ long_int       │ i32                              │ 4        │
//! │ long_long_int  │ i64                              │ 8        │
//! │ octet          │ i8                               │ 1        │
//! │ short_int      │ i16                              │ 2        │
//! │ short_string   │ u8 length + bytes                │ 1 + len  │
//! │ long_string    │ u32 length + bytes               │ 4 + len  │
//! │ timestamp      │ u64 seconds                      │ 8        │
//! └────────────────┴──────────────────────────────────┴──────────┘
//! ```

use amqf_types::{Decimal, Timestamp};
use amqf_wire::WireReader;

use crate::error::DecodeError;

/// `(bytes consumed, value)`, the return shape of every decoder.
pub type Decoded<T> = (usize, T);

pub fn boolean(buf: &[u8]) -> Result<Decoded<bool>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let byte = reader.read_u8()?;
    Ok((reader.position(), byte != 0))
}

/// Scale byte, then a signed mantissa. The value is kept exact.
pub fn decimal(buf: &[u8]) -> Result<Decoded<Decimal>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let scale = reader.read_u8()?;
    let mantissa = reader.read_i32()?;
    Ok((reader.position(), Decimal::new(scale, mantissa)))
}

pub fn floating_point(buf: &[u8]) -> Result<Decoded<f32>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let value = reader.read_f32()?;
    Ok((reader.position(), value))
}

pub fn long_int(buf: &[u8]) -> Result<Decoded<i32>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let value = reader.read_i32()?;
    Ok((reader.position(), value))
}

pub fn long_long_int(buf: &[u8]) -> Result<Decoded<i64>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let value = reader.read_i64()?;
    Ok((reader.position(), value))
}

pub fn octet(buf: &[u8]) -> Result<Decoded<i8>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let value = reader.read_i8()?;
    Ok((reader.position(), value))
}

pub fn short_int(buf: &[u8]) -> Result<Decoded<i16>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let value = reader.read_i16()?;
    Ok((reader.position(), value))
}

/// 1-byte length prefix followed by that many raw bytes.
///
/// The bytes are returned as-is; no UTF-8 validation happens here.
pub fn short_string(buf: &[u8]) -> Result<Decoded<Vec<u8>>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let len = reader.read_u8()?;
    let bytes = reader.read_bytes(usize::from(len))?;
    Ok((reader.position(), bytes.to_vec()))
}

/// 4-byte unsigned length prefix followed by that many raw bytes.
pub fn long_string(buf: &[u8]) -> Result<Decoded<Vec<u8>>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let len = reader.read_u32()?;
    // A length that does not even fit in usize cannot fit in the buffer.
    let len = usize::try_from(len).map_err(|_| DecodeError::TruncatedBuffer {
        offset: reader.position(),
        needed: usize::MAX,
        available: reader.remaining().len(),
    })?;
    let bytes = reader.read_bytes(len)?;
    Ok((reader.position(), bytes.to_vec()))
}

/// Unsigned POSIX seconds, resolved to a UTC calendar value.
///
/// # Errors
///
/// [`DecodeError::TimestampOutOfRange`] when the seconds lie beyond the
/// calendar range `chrono` can represent.
pub fn timestamp(buf: &[u8]) -> Result<Decoded<Timestamp>, DecodeError> {
    let mut reader = WireReader::new(buf);
    let seconds = reader.read_u64()?;
    let value = Timestamp::from_unix_seconds(seconds).ok_or_else(|| {
        tracing::debug!(seconds, "timestamp out of range");
        DecodeError::TimestampOutOfRange { seconds }
    })?;
    Ok((reader.position(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_any_nonzero_is_true() {
        assert_eq!(boolean(&[0x00]).unwrap(), (1, false));
        assert_eq!(boolean(&[0x01]).unwrap(), (1, true));
        assert_eq!(boolean(&[0xFF, 0x00]).unwrap(), (1, true));
    }

    #[test]
    fn integers_are_big_endian_and_signed() {
        assert_eq!(short_int(&[0xFF, 0xFE]).unwrap(), (2, -2));
        assert_eq!(long_int(&[0x00, 0x00, 0x00, 0x2A]).unwrap(), (4, 42));
        assert_eq!(
            long_long_int(&[0x80, 0, 0, 0, 0, 0, 0, 0]).unwrap(),
            (8, i64::MIN)
        );
        assert_eq!(octet(&[0x80]).unwrap(), (1, -128));
    }

    #[test]
    fn float_bits() {
        let (consumed, value) = floating_point(&1.5f32.to_be_bytes()).unwrap();
        assert_eq!(consumed, 4);
        assert!((value - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn decimal_is_exact() {
        let (consumed, value) = decimal(&[0x02, 0x00, 0x00, 0x30, 0x39]).unwrap();
        assert_eq!(consumed, 5);
        assert_eq!(value, Decimal::new(2, 12345));
        assert_eq!(value.to_string(), "123.45");
    }

    #[test]
    fn short_string_bytes_are_opaque() {
        let (consumed, value) = short_string(&[0x02, 0xC3, 0x28, 0xAA]).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(value, vec![0xC3, 0x28]);
    }

    #[test]
    fn long_string_reads_u32_prefix() {
        let (consumed, value) = long_string(&[0, 0, 0, 3, b'a', b'b', b'c']).unwrap();
        assert_eq!(consumed, 7);
        assert_eq!(value, b"abc");
    }

    #[test]
    fn string_payload_past_end_is_truncated() {
        assert_eq!(
            short_string(&[0x05, b'a']),
            Err(DecodeError::TruncatedBuffer {
                offset: 1,
                needed: 5,
                available: 1,
            })
        );
        assert!(matches!(
            long_string(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Err(DecodeError::TruncatedBuffer { offset: 4, .. })
        ));
    }

    #[test]
    fn short_reads_are_truncated() {
        assert!(matches!(
            long_int(&[0x00, 0x01]),
            Err(DecodeError::TruncatedBuffer {
                offset: 0,
                needed: 4,
                available: 2,
            })
        ));
        assert!(matches!(
            decimal(&[0x02, 0x00]),
            Err(DecodeError::TruncatedBuffer { offset: 1, .. })
        ));
        assert!(matches!(boolean(&[]), Err(DecodeError::TruncatedBuffer { .. })));
    }

    #[test]
    fn timestamp_to_calendar() {
        let (consumed, ts) = timestamp(&1_301_493_909u64.to_be_bytes()).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(ts.to_string(), "2011-03-30T14:05:09Z");
    }

    #[test]
    fn timestamp_out_of_range() {
        assert_eq!(
            timestamp(&u64::MAX.to_be_bytes()),
            Err(DecodeError::TimestampOutOfRange { seconds: u64::MAX })
        );
    }
}
