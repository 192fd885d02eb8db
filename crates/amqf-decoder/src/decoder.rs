use amqf_types::{FieldArray, FieldTable, FieldValue};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::scalar::Decoded;

/// Field value decoder, the entry point for everything in this crate.
///
/// A `FieldDecoder` only carries its [`DecoderConfig`]. It holds no
/// buffers and no state between calls, so it is `Copy` and can be shared
/// freely across threads. Decoding the same buffer twice always yields
/// equal values.
///
/// ```text
///   decode_tagged_value ──► tag byte ──► scalar decoder
///                                   └──► field_array / field_table
///                                              │
///                                              └──► decode_tagged_value
///                                                   (one level deeper)
///
///   decode_by_type ───────► registry ──► scalar / field_table (no tag)
/// ```
///
/// The free functions at the bottom of this module use the default
/// configuration.
///
/// # Example
///
/// ```rust
/// use amqf_decoder::FieldDecoder;
/// use amqf_types::FieldValue;
///
/// let decoder = FieldDecoder::new();
/// let (consumed, value) = decoder.decode_tagged_value(&[0x49, 0, 0, 0, 42]).unwrap();
/// assert_eq!(consumed, 5);
/// assert_eq!(value, FieldValue::LongInt(42));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldDecoder {
    config: DecoderConfig,
}

impl FieldDecoder {
    /// A decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one tagged value from the start of `buf`.
    ///
    /// Returns the total bytes consumed, tag included. Bytes after the
    /// value are ignored.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TruncatedBuffer`] if `buf` is empty or the payload
    ///   runs past its end.
    /// - [`DecodeError::UnknownTypeTag`] if the first byte is not a tag.
    /// - Any error from the selected payload decoder.
    pub fn decode_tagged_value(&self, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
        self.tagged_value_at(buf, 0)
    }

    /// Decode a field array (length prefix plus tagged elements) from the
    /// start of `buf`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TruncatedBuffer`] if the prefix or the declared body
    ///   does not fit in `buf`.
    /// - [`DecodeError::MalformedLength`] for a negative length or an
    ///   element that crosses the declared end.
    /// - [`DecodeError::DepthExceeded`] if nesting goes past the limit.
    pub fn field_array(&self, buf: &[u8]) -> Result<Decoded<FieldArray>, DecodeError> {
        self.field_array_at(buf, 0)
    }

    /// Decode a field table (length prefix plus key/value entries) from
    /// the start of `buf`.
    ///
    /// # Errors
    ///
    /// Same as [`field_array`](Self::field_array).
    pub fn field_table(&self, buf: &[u8]) -> Result<Decoded<FieldTable>, DecodeError> {
        self.field_table_at(buf, 0)
    }
}

// ── Default-configuration entry points ───────────────────────────────

/// [`FieldDecoder::decode_tagged_value`] with the default configuration.
///
/// # Errors
///
/// See [`FieldDecoder::decode_tagged_value`].
pub fn decode_tagged_value(buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    FieldDecoder::new().decode_tagged_value(buf)
}

/// [`FieldDecoder::decode_by_type`] with the default configuration.
///
/// # Errors
///
/// See [`FieldDecoder::decode_by_type`].
pub fn decode_by_type(buf: &[u8], type_name: &str) -> Result<Decoded<FieldValue>, DecodeError> {
    FieldDecoder::new().decode_by_type(buf, type_name)
}

/// [`FieldDecoder::field_array`] with the default configuration.
///
/// # Errors
///
/// See [`FieldDecoder::field_array`].
pub fn field_array(buf: &[u8]) -> Result<Decoded<FieldArray>, DecodeError> {
    FieldDecoder::new().field_array(buf)
}

/// [`FieldDecoder::field_table`] with the default configuration.
///
/// # Errors
///
/// See [`FieldDecoder::field_table`].
pub fn field_table(buf: &[u8]) -> Result<Decoded<FieldTable>, DecodeError> {
    FieldDecoder::new().field_table(buf)
}
