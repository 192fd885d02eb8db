#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::WireError;
pub use reader::WireReader;
pub use writer::{LengthMark, WireWriter};
