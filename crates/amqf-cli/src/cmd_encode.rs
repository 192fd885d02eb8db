/// Implementation of `amqf encode`.
///
/// Reads a JSON manifest (see the `manifest` module), encodes each value
/// in order with the reference encoder and either prints the bytes as hex
/// or writes them raw to `--output`.
///
/// ```text
/// $ amqf encode values.json
/// 460000000401617401
///
/// $ amqf encode values.json -o capture.bin
/// wrote 9 bytes to capture.bin
/// ```
use std::fs;

use amqf_encoder::{encode_by_type, encode_tagged_value};
use amqf_wire::WireWriter;
use anyhow::{Context, Result};

use crate::EncodeArgs;
use crate::manifest::Manifest;

/// Run the `amqf encode` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, or a value
/// cannot be encoded (string too long, wrong variant for its `"as"` type).
pub fn run(args: &EncodeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let manifest: Manifest = serde_json::from_str(&text)
        .with_context(|| format!("invalid manifest {}", args.input.display()))?;

    let bytes = encode_manifest(manifest)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => println!("{}", hex::encode(&bytes)),
    }
    Ok(())
}

/// Encode every manifest value in order into one buffer.
fn encode_manifest(manifest: Manifest) -> Result<Vec<u8>> {
    let mut out = WireWriter::new();
    for (index, item) in manifest.values.into_iter().enumerate() {
        let type_name = item.type_name()?;
        let value = item
            .value
            .into_field_value()
            .with_context(|| format!("manifest value {index}"))?;
        let written = match type_name {
            Some(name) => encode_by_type(&value, name, &mut out),
            None => encode_tagged_value(&value, &mut out),
        };
        written.with_context(|| format!("cannot encode manifest value {index}"))?;
    }
    Ok(out.finish())
}
