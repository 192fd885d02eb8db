/// Implementation of `amqf inspect`.
///
/// Walks the input as a run of tagged values and prints one line per
/// top-level value: its offset, tag, byte span, kind and rendered value.
/// `--show-hex` adds a hex dump of each value's bytes.
///
/// # Output format
///
/// ```text
/// 0x0000  'F'  9 bytes  table      {a: true}
/// 0x0009  'I'  5 bytes  long-int   42
/// 0x000e  0x00 1 byte   void       void
/// ---
/// 3 values, 15 bytes
/// ```
///
/// Decoding stops at the first error. Values before it are still listed
/// and the error is reported with its absolute offset.
use std::fmt::Write as _;

use amqf_decoder::{DecoderConfig, FieldDecoder};
use anyhow::{Context, Result};

use crate::InspectArgs;
use crate::input::read_input;

/// Run the `amqf inspect` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or a value fails to
/// decode.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let decoder = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(args.max_depth));

    let mut offset = 0;
    let mut count = 0usize;
    while offset < bytes.len() {
        let (consumed, value) = decoder
            .decode_tagged_value(&bytes[offset..])
            .map_err(|err| err.shifted(offset))
            .with_context(|| format!("failed to decode value {count}"))?;

        let span = &bytes[offset..offset + consumed];
        let plural = if consumed == 1 { "byte " } else { "bytes" };
        println!(
            "{offset:#06x}  {:<4} {consumed} {plural}  {:<13} {value}",
            tag_label(span[0]),
            value.kind(),
        );
        if args.show_hex {
            print_hex_dump(span);
        }

        offset += consumed;
        count += 1;
    }

    println!("---");
    println!(
        "{count} value{}, {} bytes",
        if count == 1 { "" } else { "s" },
        bytes.len()
    );
    Ok(())
}

/// `'F'` for printable tags, `0x00` otherwise.
fn tag_label(tag: u8) -> String {
    if tag.is_ascii_graphic() {
        format!("'{}'", char::from(tag))
    } else {
        format!("{tag:#04x}")
    }
}

fn print_hex_dump(bytes: &[u8]) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = i * 16;
        let hex = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { char::from(b) } else { '.' })
            .collect();
        println!("        {offset:04x}  {hex:<48}  {ascii}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_labels() {
        assert_eq!(tag_label(b'F'), "'F'");
        assert_eq!(tag_label(0x00), "0x00");
    }
}
