use amqf_types::{Decimal, FieldTable, FieldValue, Timestamp};

use crate::encoder::to_tagged_bytes;
use crate::error::EncodeError;

/// Chainable builder for field tables.
///
/// Entries keep the order they were added in. Adding a key twice replaces
/// the earlier value in place, the same way a decoded table treats
/// repeated keys.
///
/// # Example
///
/// ```rust
/// use amqf_encoder::TableBuilder;
///
/// let bytes = TableBuilder::new()
///     .boolean("a", true)
///     .encode_tagged()
///     .unwrap();
/// assert_eq!(bytes, [0x46, 0, 0, 0, 4, 1, b'a', b't', 1]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    table: FieldTable,
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry of any type.
    #[must_use]
    pub fn field(mut self, key: impl Into<Vec<u8>>, value: impl Into<FieldValue>) -> Self {
        self.table.insert(key, value.into());
        self
    }

    #[must_use]
    pub fn boolean(self, key: impl Into<Vec<u8>>, value: bool) -> Self {
        self.field(key, value)
    }

    #[must_use]
    pub fn long_int(self, key: impl Into<Vec<u8>>, value: i32) -> Self {
        self.field(key, value)
    }

    #[must_use]
    pub fn long_long_int(self, key: impl Into<Vec<u8>>, value: i64) -> Self {
        self.field(key, value)
    }

    #[must_use]
    pub fn decimal(self, key: impl Into<Vec<u8>>, value: Decimal) -> Self {
        self.field(key, value)
    }

    #[must_use]
    pub fn timestamp(self, key: impl Into<Vec<u8>>, value: Timestamp) -> Self {
        self.field(key, value)
    }

    /// Add a long string. Header values are conventionally long strings.
    #[must_use]
    pub fn string(self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        self.field(key, FieldValue::LongString(value.into()))
    }

    #[must_use]
    pub fn table(self, key: impl Into<Vec<u8>>, nested: TableBuilder) -> Self {
        self.field(key, nested.build())
    }

    #[must_use]
    pub fn void(self, key: impl Into<Vec<u8>>) -> Self {
        self.field(key, FieldValue::Void)
    }

    #[must_use]
    pub fn build(self) -> FieldTable {
        self.table
    }

    /// Encode the table with its `'F'` tag.
    ///
    /// # Errors
    ///
    /// Any [`EncodeError`] from encoding the entries.
    pub fn encode_tagged(self) -> Result<Vec<u8>, EncodeError> {
        to_tagged_bytes(&FieldValue::Table(self.table))
    }
}
