//! Golden fixture generator for the AMQF conformance test suite.
//!
//! This binary writes every fixture under `tests/golden/`. Run it after a
//! deliberate wire-format change and commit the regenerated payloads.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p amqf-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory                  | Contents                                   |
//! |----------------------------|--------------------------------------------|
//! | headers_table              | Tagged table: x-match, x-priority, retry   |
//! | nested_composites          | Table → array → table                      |
//! | scalar_run                 | One of each scalar tag, back to back       |
//! | edge_cases/non_utf8_key    | Handcrafted: table keyed by byte 0xFF      |
//! | edge_cases/unknown_tag     | Handcrafted: boolean then tag 0x99         |
//!
//! Each non-handcrafted fixture also gets a `manifest.json` that
//! `amqf encode` turns into the same bytes.

#![allow(clippy::pedantic)]

use std::path::Path;

use amqf_encoder::{encode_tagged_value, to_tagged_bytes};
use amqf_tests::{golden_dir, headers_table, nested_composites, scalar_run};
use amqf_types::FieldValue;
use amqf_wire::WireWriter;

fn main() {
    let golden = golden_dir();

    generate_headers_table(&golden);
    generate_nested_composites(&golden);
    generate_scalar_run(&golden);
    generate_edge_cases(&golden);

    println!("All golden fixtures written to {}", golden.display());
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, data).expect("write_file");
    println!("  wrote {}", path.display());
}

fn write_manifest(dir: &Path, json: &str) {
    write_file(&dir.join("manifest.json"), json.as_bytes());
}

fn write_payload(dir: &Path, data: &[u8]) {
    write_file(&dir.join("payload.amqf"), data);
}

// ── Fixture generators ────────────────────────────────────────────────────────

fn generate_headers_table(golden: &Path) {
    let dir = golden.join("headers_table");
    write_manifest(
        &dir,
        r#"{
  "values": [
    {
      "value": {
        "type": "table",
        "value": [
          { "key": "x-match", "value": { "type": "long_string", "value": "all" } },
          { "key": "x-priority", "value": { "type": "long_int", "value": 5 } },
          { "key": "retry", "value": { "type": "boolean", "value": true } }
        ]
      }
    }
  ]
}
"#,
    );
    let payload =
        to_tagged_bytes(&FieldValue::Table(headers_table())).expect("encode headers_table");
    write_payload(&dir, &payload);
}

fn generate_nested_composites(golden: &Path) {
    let dir = golden.join("nested_composites");
    write_manifest(
        &dir,
        r#"{
  "values": [
    {
      "value": {
        "type": "table",
        "value": [
          {
            "key": "l",
            "value": {
              "type": "array",
              "value": [
                {
                  "type": "table",
                  "value": [
                    { "key": "z", "value": { "type": "short_int", "value": 7 } }
                  ]
                }
              ]
            }
          }
        ]
      }
    }
  ]
}
"#,
    );
    let payload = to_tagged_bytes(&nested_composites()).expect("encode nested_composites");
    write_payload(&dir, &payload);
}

fn generate_scalar_run(golden: &Path) {
    let dir = golden.join("scalar_run");
    write_manifest(
        &dir,
        r#"{
  "values": [
    { "value": { "type": "void" } },
    { "value": { "type": "boolean", "value": true } },
    { "value": { "type": "long_int", "value": 42 } },
    { "value": { "type": "decimal", "value": { "scale": 2, "mantissa": 12345 } } },
    { "value": { "type": "timestamp", "value": 1301493909 } },
    { "value": { "type": "short_string", "value": "hi" } },
    { "value": { "type": "long_long_int", "value": -1 } },
    { "value": { "type": "float", "value": 1.5 } },
    { "value": { "type": "short_int", "value": -2 } }
  ]
}
"#,
    );
    let mut out = WireWriter::new();
    for value in scalar_run() {
        encode_tagged_value(&value, &mut out).expect("encode scalar_run");
    }
    write_payload(&dir, &out.finish());
}

fn generate_edge_cases(golden: &Path) {
    let edge = golden.join("edge_cases");

    // {0xFF: false}. Keys are opaque bytes, so this is a valid table.
    write_payload(
        &edge.join("non_utf8_key"),
        &[b'F', 0x00, 0x00, 0x00, 0x04, 0x01, 0xFF, b't', 0x00],
    );

    // A valid boolean followed by a tag outside the closed set.
    write_payload(&edge.join("unknown_tag"), &[b't', 0x01, 0x99]);
}
