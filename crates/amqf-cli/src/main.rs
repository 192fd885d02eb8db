/// AMQF command-line tool: decode, inspect and encode AMQP 0-9-1 field
/// values.
///
/// # Command overview
///
/// ```text
/// amqf <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode tagged (or typed) field values and print them
///   inspect    List each top-level value with its offset, tag and span
///   encode     Encode a JSON manifest of values into wire bytes
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder diagnostics to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Input is either a hex string on the command line (whitespace allowed)
/// or a binary capture given with `--file`.
///
/// # Exit codes
///
/// | Code | Meaning                                   |
/// |------|-------------------------------------------|
/// | 0    | Success                                   |
/// | 1    | Error (bad input, decode failure, I/O)    |
///
/// Errors and logs go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd_decode;
mod cmd_encode;
mod cmd_inspect;
mod input;
mod json;
mod manifest;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The AMQF (AMQP field codec) command-line tool.
#[derive(Parser)]
#[command(name = "amqf", version, about = "AMQP 0-9-1 field value codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder diagnostics (rejections, composite boundaries) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode field values and print them.
    Decode(DecodeArgs),
    /// List each top-level value with its offset, tag and byte span.
    Inspect(InspectArgs),
    /// Encode a JSON manifest of values into wire bytes.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where the bytes to decode come from.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Hex-encoded bytes, e.g. `"46 00 00 00 04 01 61 74 01"`.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,

    /// Read raw bytes from this file instead.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `amqf decode`.
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────────────────────┐
/// │ Flag         │ Effect                                                │
/// ├──────────────┼───────────────────────────────────────────────────────┤
/// │ --type NAME  │ Decode one untagged value of this type (e.g. `table`) │
/// │ --json       │ Print values as JSON instead of text                  │
/// │ --max-depth  │ Deepest composite nesting accepted (default 64)       │
/// └──────────────┴───────────────────────────────────────────────────────┘
/// ```
///
/// Without `--type`, every tagged value in the input is decoded in turn.
#[derive(clap::Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Decode a single untagged value of this protocol type.
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: Option<String>,

    /// Print decoded values as JSON.
    #[arg(long)]
    pub json: bool,

    /// Deepest composite nesting level accepted.
    #[arg(long, default_value_t = amqf_decoder::config::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// Arguments for `amqf inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show a 16-byte-per-line hex dump of each value's bytes.
    #[arg(long)]
    pub show_hex: bool,

    /// Deepest composite nesting level accepted.
    #[arg(long, default_value_t = amqf_decoder::config::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

/// Arguments for `amqf encode`.
///
/// The manifest format is described in the `manifest` module.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest describing the values to encode.
    pub input: PathBuf,

    /// Write raw bytes to this file instead of printing hex to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("invalid log filter: {e}"))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(filter)
        .init();

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
