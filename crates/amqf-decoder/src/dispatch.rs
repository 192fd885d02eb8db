use amqf_types::{FieldValue, TypeTag};
use amqf_wire::WireReader;

use crate::decoder::FieldDecoder;
use crate::error::DecodeError;
use crate::scalar::{self, Decoded};

impl FieldDecoder {
    /// Read the tag byte, decode its payload and wrap it as a
    /// [`FieldValue`].
    ///
    /// `depth` is the number of composites enclosing this value. Payload
    /// errors come back relative to the payload slice and are shifted past
    /// the tag byte here.
    pub(crate) fn tagged_value_at(
        &self,
        buf: &[u8],
        depth: usize,
    ) -> Result<Decoded<FieldValue>, DecodeError> {
        let mut reader = WireReader::new(buf);
        let byte = reader.read_u8()?;
        let tag = TypeTag::from_wire_byte(byte).map_err(|err| {
            tracing::debug!(tag = byte, "rejecting unknown type tag");
            DecodeError::from_type_error(err, 0)
        })?;
        let payload = reader.remaining();

        let (consumed, value) = match tag {
            TypeTag::Array => self
                .field_array_at(payload, depth)
                .map(|(n, v)| (n, FieldValue::Array(v))),
            TypeTag::Decimal => scalar::decimal(payload).map(|(n, v)| (n, FieldValue::Decimal(v))),
            TypeTag::Float => {
                scalar::floating_point(payload).map(|(n, v)| (n, FieldValue::Float(v)))
            }
            TypeTag::Table => self
                .field_table_at(payload, depth)
                .map(|(n, v)| (n, FieldValue::Table(v))),
            TypeTag::LongInt => scalar::long_int(payload).map(|(n, v)| (n, FieldValue::LongInt(v))),
            TypeTag::LongLongInt => {
                scalar::long_long_int(payload).map(|(n, v)| (n, FieldValue::LongLongInt(v)))
            }
            TypeTag::Boolean => scalar::boolean(payload).map(|(n, v)| (n, FieldValue::Boolean(v))),
            TypeTag::Timestamp => {
                scalar::timestamp(payload).map(|(n, v)| (n, FieldValue::Timestamp(v)))
            }
            TypeTag::ShortString => {
                scalar::short_string(payload).map(|(n, v)| (n, FieldValue::ShortString(v)))
            }
            TypeTag::LongString => {
                scalar::long_string(payload).map(|(n, v)| (n, FieldValue::LongString(v)))
            }
            TypeTag::ShortInt => {
                scalar::short_int(payload).map(|(n, v)| (n, FieldValue::ShortInt(v)))
            }
            TypeTag::Void => Ok((0, FieldValue::Void)),
        }
        .map_err(|err| err.shifted(1))?;

        Ok((1 + consumed, value))
    }
}
