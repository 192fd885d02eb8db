#![warn(clippy::pedantic)]

pub mod builder;
pub mod encoder;
pub mod error;

pub use builder::TableBuilder;
pub use encoder::{
    encode_by_type, encode_field_array, encode_field_table, encode_tagged_value, to_tagged_bytes,
    to_typed_bytes,
};
pub use error::EncodeError;
