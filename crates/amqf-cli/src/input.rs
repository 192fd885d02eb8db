use std::fs;

use anyhow::{Context, Result, bail};

use crate::InputArgs;

/// Load the input bytes from the hex argument or the `--file` path.
///
/// Hex may contain whitespace and an optional `0x` prefix, so both
/// `46000000` and `"46 00 00 00"` work.
pub fn read_input(args: &InputArgs) -> Result<Vec<u8>> {
    match (&args.hex, &args.file) {
        (Some(text), None) => parse_hex(text),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))
        }
        _ => bail!("pass either a hex string or --file, not both"),
    }
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).with_context(|| format!("invalid hex input {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_spaces() {
        assert_eq!(parse_hex("46 00 00\n00 04").unwrap(), [0x46, 0, 0, 0, 4]);
    }

    #[test]
    fn hex_with_prefix() {
        assert_eq!(parse_hex("0x7401").unwrap(), [0x74, 0x01]);
    }

    #[test]
    fn odd_length_is_rejected() {
        assert!(parse_hex("741").is_err());
    }
}
