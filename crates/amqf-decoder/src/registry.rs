use amqf_types::{FieldValue, TypeName};

use crate::decoder::FieldDecoder;
use crate::error::DecodeError;
use crate::scalar::{self, Decoded};

/// Signature shared by every registry entry.
///
/// Entries take the decoder so table decoding honours its configured
/// depth limit.
pub type DecodeFn = fn(&FieldDecoder, &[u8]) -> Result<Decoded<FieldValue>, DecodeError>;

fn bit(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::boolean(buf).map(|(n, v)| (n, FieldValue::Boolean(v)))
}

fn long(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::long_int(buf).map(|(n, v)| (n, FieldValue::LongInt(v)))
}

fn longlong(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::long_long_int(buf).map(|(n, v)| (n, FieldValue::LongLongInt(v)))
}

fn longstr(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::long_string(buf).map(|(n, v)| (n, FieldValue::LongString(v)))
}

fn octet(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::octet(buf).map(|(n, v)| (n, FieldValue::Octet(v)))
}

fn short(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::short_int(buf).map(|(n, v)| (n, FieldValue::ShortInt(v)))
}

fn shortstr(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::short_string(buf).map(|(n, v)| (n, FieldValue::ShortString(v)))
}

fn table(decoder: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    decoder
        .field_table(buf)
        .map(|(n, v)| (n, FieldValue::Table(v)))
}

fn timestamp(_: &FieldDecoder, buf: &[u8]) -> Result<Decoded<FieldValue>, DecodeError> {
    scalar::timestamp(buf).map(|(n, v)| (n, FieldValue::Timestamp(v)))
}

/// The decoder registered for a protocol type name.
///
/// Every [`TypeName`] has an entry, `octet` included. Protocol method
/// decoders use this to read fixed fields whose types they already know.
#[must_use]
pub fn decoder_for(name: TypeName) -> DecodeFn {
    match name {
        TypeName::Bit => bit,
        TypeName::Long => long,
        TypeName::LongLong => longlong,
        TypeName::LongStr => longstr,
        TypeName::Octet => octet,
        TypeName::Short => short,
        TypeName::ShortStr => shortstr,
        TypeName::Table => table,
        TypeName::Timestamp => timestamp,
    }
}

/// Look up a decoder by its canonical spelling.
///
/// # Errors
///
/// [`DecodeError::UnknownTypeName`] if `name` is not registered.
pub fn lookup(name: &str) -> Result<DecodeFn, DecodeError> {
    let name = TypeName::from_name(name).map_err(|err| DecodeError::from_type_error(err, 0))?;
    Ok(decoder_for(name))
}

/// Every registered `(name, decoder)` pair, in alphabetical order.
pub fn entries() -> impl Iterator<Item = (TypeName, DecodeFn)> {
    TypeName::ALL.into_iter().map(|name| (name, decoder_for(name)))
}

impl FieldDecoder {
    /// Decode one value of a known type from the start of `buf`. There is
    /// no tag byte to strip.
    ///
    /// Accepts `bit`, `long`, `longlong`, `longstr`, `short`, `shortstr`,
    /// `table` and `timestamp`. `octet` is rejected here even though the
    /// registry has it: it is not a field-level type.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::UnknownTypeName`] for any other name.
    /// - Any error from the selected decoder.
    pub fn decode_by_type(
        &self,
        buf: &[u8],
        type_name: &str,
    ) -> Result<Decoded<FieldValue>, DecodeError> {
        match TypeName::from_name(type_name) {
            Ok(TypeName::Octet) | Err(_) => {
                tracing::debug!(type_name, "rejecting unsupported type name");
                Err(DecodeError::UnknownTypeName {
                    name: type_name.to_owned(),
                })
            }
            Ok(name) => decoder_for(name)(self, buf),
        }
    }
}
