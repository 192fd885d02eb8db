use amqf_types::{FieldArray, FieldTable, FieldValue};
use amqf_wire::WireReader;

use crate::decoder::FieldDecoder;
use crate::error::DecodeError;
use crate::scalar::Decoded;

/// Size of the signed length prefix in front of every composite body.
const LENGTH_PREFIX: usize = 4;

/// The validated frame of a composite: where its body ends.
struct Body {
    declared: i32,
    end: usize,
}

impl FieldDecoder {
    /// Check the nesting budget and read the length prefix.
    ///
    /// `depth` is the number of composites already open around this one,
    /// so this composite sits at level `depth + 1`.
    fn open_composite(
        &self,
        reader: &mut WireReader<'_>,
        depth: usize,
        kind: &'static str,
    ) -> Result<Body, DecodeError> {
        let level = depth + 1;
        let limit = self.config().max_depth;
        if level > limit {
            tracing::debug!(kind, level, limit, "composite nesting too deep");
            return Err(DecodeError::DepthExceeded { limit });
        }

        let declared = reader.read_i32()?;
        let Ok(len) = usize::try_from(declared) else {
            tracing::debug!(kind, declared, "negative composite length");
            return Err(DecodeError::MalformedLength {
                offset: 0,
                declared: i64::from(declared),
                reason: "negative length",
            });
        };

        let available = reader.remaining().len();
        if len > available {
            tracing::debug!(kind, declared, available, "composite body runs past buffer");
            return Err(DecodeError::TruncatedBuffer {
                offset: LENGTH_PREFIX,
                needed: len,
                available,
            });
        }

        tracing::trace!(kind, declared, level, "decoding composite");
        Ok(Body {
            declared,
            end: LENGTH_PREFIX + len,
        })
    }

    /// Decode one tagged element at the reader's position and advance past
    /// it, checking that it stays inside `body`.
    fn composite_element(
        &self,
        reader: &mut WireReader<'_>,
        body: &Body,
        depth: usize,
    ) -> Result<FieldValue, DecodeError> {
        let start = reader.position();
        let (consumed, value) = self
            .tagged_value_at(reader.remaining(), depth + 1)
            .map_err(|err| err.shifted(start))?;
        reader.skip(consumed)?;
        if reader.position() > body.end {
            return Err(overshoot(start, body));
        }
        Ok(value)
    }

    pub(crate) fn field_array_at(
        &self,
        buf: &[u8],
        depth: usize,
    ) -> Result<Decoded<FieldArray>, DecodeError> {
        let mut reader = WireReader::new(buf);
        let body = self.open_composite(&mut reader, depth, "array")?;

        let mut items = FieldArray::new();
        while reader.position() < body.end {
            items.push(self.composite_element(&mut reader, &body, depth)?);
        }
        Ok((body.end, items))
    }

    pub(crate) fn field_table_at(
        &self,
        buf: &[u8],
        depth: usize,
    ) -> Result<Decoded<FieldTable>, DecodeError> {
        let mut reader = WireReader::new(buf);
        let body = self.open_composite(&mut reader, depth, "table")?;

        let mut table = FieldTable::new();
        while reader.position() < body.end {
            let start = reader.position();
            let key_len = reader.read_u8()?;
            let key = reader.read_bytes(usize::from(key_len))?;
            if reader.position() > body.end {
                return Err(overshoot(start, &body));
            }
            let value = self.composite_element(&mut reader, &body, depth)?;
            if let Some(previous) = table.insert(key, value) {
                tracing::trace!(
                    key = %String::from_utf8_lossy(key),
                    replaced = previous.kind(),
                    "duplicate table key"
                );
            }
        }
        Ok((body.end, table))
    }
}

fn overshoot(start: usize, body: &Body) -> DecodeError {
    tracing::debug!(
        offset = start,
        declared = body.declared,
        "element crosses composite boundary"
    );
    DecodeError::MalformedLength {
        offset: start,
        declared: i64::from(body.declared),
        reason: "element crosses the declared end of its composite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::decoder::{decode_tagged_value, field_array, field_table};

    #[test]
    fn single_entry_table() {
        let buf = [0x46, 0x00, 0x00, 0x00, 0x04, 0x01, 0x61, 0x74, 0x01];
        let (consumed, value) = decode_tagged_value(&buf).unwrap();
        assert_eq!(consumed, 9);
        let table = value.as_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(&FieldValue::Boolean(true)));
    }

    #[test]
    fn overstated_table_length_is_truncated() {
        // Declares 6 body bytes but only 4 follow.
        let buf = [0x46, 0x00, 0x00, 0x00, 0x06, 0x01, 0x61, 0x74, 0x01];
        assert_eq!(
            decode_tagged_value(&buf),
            Err(DecodeError::TruncatedBuffer {
                offset: 5,
                needed: 6,
                available: 4,
            })
        );
    }

    #[test]
    fn boolean_array() {
        let buf = [0x00, 0x00, 0x00, 0x04, 0x74, 0x01, 0x74, 0x00];
        let (consumed, items) = field_array(&buf).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(
            items,
            vec![FieldValue::Boolean(true), FieldValue::Boolean(false)]
        );
    }

    #[test]
    fn empty_composites() {
        assert_eq!(field_array(&[0, 0, 0, 0]).unwrap(), (4, vec![]));
        assert_eq!(field_table(&[0, 0, 0, 0]).unwrap(), (4, FieldTable::new()));
    }

    #[test]
    fn body_shorter_than_buffer_stops_at_declared_end() {
        let buf = [0x00, 0x00, 0x00, 0x02, 0x74, 0x01, 0x74, 0x00];
        let (consumed, items) = field_array(&buf).unwrap();
        assert_eq!(consumed, 6);
        assert_eq!(items, vec![FieldValue::Boolean(true)]);
    }

    #[test]
    fn negative_length() {
        assert_eq!(
            field_table(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Err(DecodeError::MalformedLength {
                offset: 0,
                declared: -1,
                reason: "negative length",
            })
        );
    }

    #[test]
    fn element_overshooting_body() {
        // Body declares 2 bytes but holds a 5-byte long int.
        let buf = [0x00, 0x00, 0x00, 0x02, b'I', 0x00, 0x00, 0x00, 0x07];
        assert!(matches!(
            field_array(&buf),
            Err(DecodeError::MalformedLength {
                offset: 4,
                declared: 2,
                ..
            })
        ));
    }

    #[test]
    fn key_overshooting_body() {
        // Body declares 1 byte; the key alone needs 2.
        let buf = [0x00, 0x00, 0x00, 0x01, 0x01, b'k', b't', 0x01];
        assert!(matches!(
            field_table(&buf),
            Err(DecodeError::MalformedLength { offset: 4, .. })
        ));
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let buf = [
            0x00, 0x00, 0x00, 0x0C, //
            0x01, b'x', b't', 0x00, //
            0x01, b'y', b't', 0x01, //
            0x01, b'x', b't', 0x01,
        ];
        let (consumed, table) = field_table(&buf).unwrap();
        assert_eq!(consumed, 16);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x"), Some(&FieldValue::Boolean(true)));
        let keys: Vec<&[u8]> = table.keys().collect();
        assert_eq!(keys, vec![b"x".as_slice(), b"y".as_slice()]);
    }

    #[test]
    fn nested_error_offsets_are_absolute() {
        // Outer table { "a": array [ 0x99 ] }
        let buf = [
            b'F', 0x00, 0x00, 0x00, 0x08, //
            0x01, b'a', //
            b'A', 0x00, 0x00, 0x00, 0x01, 0x99,
        ];
        assert_eq!(
            decode_tagged_value(&buf),
            Err(DecodeError::UnknownTypeTag {
                tag: 0x99,
                offset: 12,
            })
        );
    }

    #[test]
    fn table_array_table_nesting() {
        // { "l": [ { "z": 7u16 } ] }
        let buf = [
            b'F', 0x00, 0x00, 0x00, 0x11, //
            0x01, b'l', //
            b'A', 0x00, 0x00, 0x00, 0x0A, //
            b'F', 0x00, 0x00, 0x00, 0x05, //
            0x01, b'z', b'U', 0x00, 0x07,
        ];
        let (consumed, value) = decode_tagged_value(&buf).unwrap();
        assert_eq!(consumed, buf.len());

        let inner = value.as_table().unwrap().get("l").unwrap().as_array().unwrap()[0]
            .as_table()
            .unwrap()
            .get("z")
            .cloned();
        assert_eq!(inner, Some(FieldValue::ShortInt(7)));
    }

    #[test]
    fn depth_limit_counts_composites() {
        // [[[]]]: three levels of arrays.
        let buf = [
            b'A', 0x00, 0x00, 0x00, 0x0A, //
            b'A', 0x00, 0x00, 0x00, 0x05, //
            b'A', 0x00, 0x00, 0x00, 0x00,
        ];
        let at_three = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(3));
        assert_eq!(at_three.decode_tagged_value(&buf).unwrap().0, 15);

        let at_two = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(2));
        assert_eq!(
            at_two.decode_tagged_value(&buf),
            Err(DecodeError::DepthExceeded { limit: 2 })
        );
    }

    #[test]
    fn repeated_decode_is_stable() {
        let buf = [0x46, 0x00, 0x00, 0x00, 0x04, 0x01, 0x61, 0x74, 0x01];
        assert_eq!(decode_tagged_value(&buf), decode_tagged_value(&buf));
    }
}
