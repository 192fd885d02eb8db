use amqf_types::{Decimal, FieldTable, FieldValue, Timestamp, TypeName};
use amqf_wire::{WireError, WireWriter};

use crate::error::EncodeError;

// ── Scalar writers ────────────────────────────────────────────────────
//
// Payload only, no tag. Each mirrors one decoder in amqf-decoder's
// `scalar` module.

pub fn write_boolean(out: &mut WireWriter, value: bool) {
    out.put_u8(u8::from(value));
}

pub fn write_decimal(out: &mut WireWriter, value: Decimal) {
    out.put_u8(value.scale());
    out.put_i32(value.mantissa());
}

pub fn write_float(out: &mut WireWriter, value: f32) {
    out.put_f32(value);
}

pub fn write_long_int(out: &mut WireWriter, value: i32) {
    out.put_i32(value);
}

pub fn write_long_long_int(out: &mut WireWriter, value: i64) {
    out.put_i64(value);
}

pub fn write_octet(out: &mut WireWriter, value: i8) {
    out.put_i8(value);
}

pub fn write_short_int(out: &mut WireWriter, value: i16) {
    out.put_i16(value);
}

pub fn write_timestamp(out: &mut WireWriter, value: Timestamp) {
    out.put_u64(value.unix_seconds());
}

/// Write a 1-byte length prefix and `bytes`. Also used for table keys.
///
/// # Errors
///
/// [`EncodeError::ShortStringTooLong`] if `bytes` is over 255 bytes.
pub fn write_short_string(out: &mut WireWriter, bytes: &[u8]) -> Result<(), EncodeError> {
    out.put_short_bytes(bytes).map_err(|err| match err {
        WireError::LengthOverflow { length, .. } => EncodeError::ShortStringTooLong { length },
        other => EncodeError::Wire(other),
    })
}

/// Write a 4-byte length prefix and `bytes`.
///
/// # Errors
///
/// [`EncodeError::Wire`] if `bytes` is over `u32::MAX` bytes.
pub fn write_long_string(out: &mut WireWriter, bytes: &[u8]) -> Result<(), EncodeError> {
    out.put_long_bytes(bytes)?;
    Ok(())
}

// ── Composites ────────────────────────────────────────────────────────

/// Run `body` between a reserved length prefix and its back-patch.
///
/// On failure the prefix and any partial body are removed again, leaving
/// `out` as it was before the call.
fn length_prefixed(
    out: &mut WireWriter,
    body: impl FnOnce(&mut WireWriter) -> Result<(), EncodeError>,
) -> Result<(), EncodeError> {
    let start = out.len();
    let mark = out.begin_length_prefixed();
    let written = body(out).and_then(|()| {
        out.end_length_prefixed(mark).map_err(|err| match err {
            WireError::LengthOverflow { length, .. } => EncodeError::CompositeTooLarge { length },
            other => EncodeError::Wire(other),
        })
    });
    if written.is_err() {
        out.truncate(start);
    }
    written
}

/// Write a field table: length prefix, then `key, tagged value` pairs in
/// the table's iteration order.
///
/// # Errors
///
/// - [`EncodeError::ShortStringTooLong`] for a key over 255 bytes.
/// - [`EncodeError::CompositeTooLarge`] if the body overflows the prefix.
/// - Any error from encoding a value.
pub fn encode_field_table(table: &FieldTable, out: &mut WireWriter) -> Result<(), EncodeError> {
    length_prefixed(out, |out| {
        for (key, value) in table.iter() {
            write_short_string(out, key)?;
            encode_tagged_value(value, out)?;
        }
        Ok(())
    })
}

/// Write a field array: length prefix, then each tagged element in order.
///
/// # Errors
///
/// Same as [`encode_field_table`], minus the key limit.
pub fn encode_field_array(items: &[FieldValue], out: &mut WireWriter) -> Result<(), EncodeError> {
    length_prefixed(out, |out| {
        for item in items {
            encode_tagged_value(item, out)?;
        }
        Ok(())
    })
}

// ── Tagged and typed values ───────────────────────────────────────────

/// Write the payload of any value, without a tag.
fn write_payload(value: &FieldValue, out: &mut WireWriter) -> Result<(), EncodeError> {
    match value {
        FieldValue::Boolean(v) => write_boolean(out, *v),
        FieldValue::Octet(v) => write_octet(out, *v),
        FieldValue::ShortInt(v) => write_short_int(out, *v),
        FieldValue::LongInt(v) => write_long_int(out, *v),
        FieldValue::LongLongInt(v) => write_long_long_int(out, *v),
        FieldValue::Float(v) => write_float(out, *v),
        FieldValue::Decimal(v) => write_decimal(out, *v),
        FieldValue::ShortString(v) => write_short_string(out, v)?,
        FieldValue::LongString(v) => write_long_string(out, v)?,
        FieldValue::Timestamp(v) => write_timestamp(out, *v),
        FieldValue::Array(items) => encode_field_array(items, out)?,
        FieldValue::Table(table) => encode_field_table(table, out)?,
        FieldValue::Void => {}
    }
    Ok(())
}

/// Write `value` as a tag byte followed by its payload.
///
/// Nothing is left in `out` when this fails.
///
/// # Errors
///
/// - [`EncodeError::UntaggedValue`] for [`FieldValue::Octet`].
/// - Any length error from the payload.
pub fn encode_tagged_value(value: &FieldValue, out: &mut WireWriter) -> Result<(), EncodeError> {
    let tag = value
        .tag()
        .ok_or(EncodeError::UntaggedValue { kind: value.kind() })?;
    let start = out.len();
    out.put_u8(tag.to_wire_byte());
    let written = write_payload(value, out);
    if written.is_err() {
        out.truncate(start);
    }
    written
}

/// Write `value` with no tag, as the type `type_name` names.
///
/// The inverse of typed decoding. `octet` is accepted here because
/// protocol method encoders need it for fixed single-byte fields.
///
/// # Errors
///
/// - [`EncodeError::TypeMismatch`] if `value` is not the variant
///   `type_name` decodes to.
/// - Any length error from the payload.
pub fn encode_by_type(
    value: &FieldValue,
    type_name: TypeName,
    out: &mut WireWriter,
) -> Result<(), EncodeError> {
    let matches = matches!(
        (type_name, value),
        (TypeName::Bit, FieldValue::Boolean(_))
            | (TypeName::Long, FieldValue::LongInt(_))
            | (TypeName::LongLong, FieldValue::LongLongInt(_))
            | (TypeName::LongStr, FieldValue::LongString(_))
            | (TypeName::Octet, FieldValue::Octet(_))
            | (TypeName::Short, FieldValue::ShortInt(_))
            | (TypeName::ShortStr, FieldValue::ShortString(_))
            | (TypeName::Table, FieldValue::Table(_))
            | (TypeName::Timestamp, FieldValue::Timestamp(_))
    );
    if !matches {
        return Err(EncodeError::TypeMismatch {
            expected: type_name,
            found: value.kind(),
        });
    }
    write_payload(value, out)
}

/// Encode one tagged value into a fresh buffer.
///
/// # Errors
///
/// See [`encode_tagged_value`].
pub fn to_tagged_bytes(value: &FieldValue) -> Result<Vec<u8>, EncodeError> {
    let mut out = WireWriter::new();
    encode_tagged_value(value, &mut out)?;
    Ok(out.finish())
}

/// Encode one untagged value into a fresh buffer.
///
/// # Errors
///
/// See [`encode_by_type`].
pub fn to_typed_bytes(value: &FieldValue, type_name: TypeName) -> Result<Vec<u8>, EncodeError> {
    let mut out = WireWriter::new();
    encode_by_type(value, type_name, &mut out)?;
    Ok(out.finish())
}
