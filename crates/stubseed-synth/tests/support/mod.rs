#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use stubseed_core::{
    ColumnDescriptor, Error, Result, RowStore, SchemaMetadataProvider, SynthesizedRecord,
};

/// In-memory stand-in for the schema and row-store boundaries.
pub struct MemoryDb {
    tables: HashMap<String, TableFixture>,
    inserts: Mutex<Vec<(String, SynthesizedRecord)>>,
    cursor: Mutex<usize>,
    fail_after: Option<usize>,
}

struct TableFixture {
    columns: Vec<ColumnDescriptor>,
    ids: Vec<i64>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            inserts: Mutex::new(Vec::new()),
            cursor: Mutex::new(0),
            fail_after: None,
        }
    }

    pub fn with_table(
        mut self,
        name: &str,
        columns: Vec<ColumnDescriptor>,
        ids: Vec<i64>,
    ) -> Self {
        self.tables
            .insert(name.to_string(), TableFixture { columns, ids });
        self
    }

    /// Makes `insert_returning_id` fail once `n` inserts have succeeded.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().expect("inserts lock").len()
    }

    pub fn inserts(&self) -> Vec<(String, SynthesizedRecord)> {
        self.inserts.lock().expect("inserts lock").clone()
    }
}

#[async_trait]
impl SchemaMetadataProvider for MemoryDb {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.tables.contains_key(table))
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables
            .get(table)
            .map(|fixture| fixture.columns.clone())
            .ok_or_else(|| Error::Db(format!("no fixture for table '{table}'")))
    }
}

#[async_trait]
impl RowStore for MemoryDb {
    async fn query_random_row_id(&self, table: &str) -> Result<Option<i64>> {
        let Some(fixture) = self.tables.get(table) else {
            return Err(Error::Db(format!("no fixture for table '{table}'")));
        };
        if fixture.ids.is_empty() {
            return Ok(None);
        }
        let mut cursor = self.cursor.lock().expect("cursor lock");
        let id = fixture.ids[*cursor % fixture.ids.len()];
        *cursor += 1;
        Ok(Some(id))
    }

    async fn insert_returning_id(&self, table: &str, record: &SynthesizedRecord) -> Result<i64> {
        let mut inserts = self.inserts.lock().expect("inserts lock");
        if let Some(limit) = self.fail_after {
            if inserts.len() >= limit {
                return Err(Error::Insert(format!(
                    "constraint violation on '{table}'"
                )));
            }
        }
        inserts.push((table.to_string(), record.clone()));
        Ok(inserts.len() as i64)
    }
}
