use async_trait::async_trait;

use crate::column::ColumnDescriptor;
use crate::error::{Error, Result};
use crate::record::SynthesizedRecord;

/// Read-only schema metadata boundary.
///
/// Implementations translate a table name into ordered column descriptors
/// and answer existence checks used for foreign-key guessing.
#[async_trait]
pub trait SchemaMetadataProvider: Send + Sync {
    /// Whether the table exists in the connected schema.
    async fn table_exists(&self, table: &str) -> Result<bool>;

    /// Column descriptors for the table, ordered by ordinal position.
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Describes a table, failing with [`Error::TableNotFound`] before any
    /// other work when the table is absent.
    async fn describe(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        if !self.table_exists(table).await? {
            return Err(Error::TableNotFound(table.to_string()));
        }
        self.list_columns(table).await
    }
}

/// Row-level storage boundary used for foreign-key sampling and inserts.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// The `id` of a uniformly random existing row, or `None` when the table
    /// is empty.
    async fn query_random_row_id(&self, table: &str) -> Result<Option<i64>>;

    /// Inserts one record and returns the store-assigned id.
    async fn insert_returning_id(&self, table: &str, record: &SynthesizedRecord) -> Result<i64>;
}
