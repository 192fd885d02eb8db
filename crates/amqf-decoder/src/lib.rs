#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod reader;
pub mod registry;
pub mod scalar;

mod composite;
mod dispatch;

pub use config::DecoderConfig;
pub use decoder::{FieldDecoder, decode_by_type, decode_tagged_value, field_array, field_table};
pub use error::DecodeError;
pub use reader::ValueReader;
pub use registry::DecodeFn;
pub use scalar::Decoded;
