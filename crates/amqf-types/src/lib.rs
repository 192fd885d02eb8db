#![warn(clippy::pedantic)]

pub mod decimal;
pub mod error;
pub mod table;
pub mod tag;
pub mod timestamp;
pub mod type_name;
pub mod value;

pub use decimal::Decimal;
pub use error::TypeError;
pub use table::FieldTable;
pub use tag::TypeTag;
pub use timestamp::Timestamp;
pub use type_name::TypeName;
pub use value::{FieldArray, FieldValue};
