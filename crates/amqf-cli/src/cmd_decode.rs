/// Implementation of `amqf decode`.
///
/// Without `--type`, walks the input as a run of tagged values and prints
/// each one on its own line. With `--type NAME`, decodes exactly one
/// untagged value of that protocol type from the start of the input.
///
/// # Output format
///
/// ```text
/// $ amqf decode "46 00 00 00 04 01 61 74 01 49 00 00 00 2A"
/// {a: true}
/// 42
///
/// $ amqf decode --json "46 00 00 00 04 01 61 74 01"
/// [
///   {
///     "a": true
///   }
/// ]
/// ```
use amqf_decoder::{DecoderConfig, FieldDecoder, ValueReader};
use amqf_types::FieldValue;
use anyhow::{Context, Result};

use crate::DecodeArgs;
use crate::input::read_input;
use crate::json::to_json;

/// Run the `amqf decode` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the type name is unknown,
/// or any value fails to decode.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let decoder = FieldDecoder::with_config(DecoderConfig::default().with_max_depth(args.max_depth));

    let values = match &args.type_name {
        Some(name) => vec![decode_typed(&decoder, &bytes, name)?],
        None => ValueReader::with_decoder(decoder, &bytes)
            .map(|item| item.map(|(_, value)| value))
            .collect::<Result<Vec<_>, _>>()
            .context("failed to decode input")?,
    };

    if args.json {
        let json = serde_json::Value::Array(values.iter().map(to_json).collect());
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for value in &values {
            println!("{value}");
        }
    }
    Ok(())
}

fn decode_typed(decoder: &FieldDecoder, bytes: &[u8], name: &str) -> Result<FieldValue> {
    let (consumed, value) = decoder
        .decode_by_type(bytes, name)
        .with_context(|| format!("failed to decode input as {name}"))?;
    if consumed < bytes.len() {
        tracing::warn!(
            consumed,
            trailing = bytes.len() - consumed,
            "ignoring bytes after typed value"
        );
    }
    Ok(value)
}
