mod mapper;
mod queries;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use stubseed_core::{
    ColumnDescriptor, Error, FieldValue, Result, RowStore, SchemaMetadataProvider,
    SynthesizedRecord,
};

use queries::{map_sqlx, quote_ident};

/// Postgres implementation of the schema and row-store boundaries.
///
/// Works against the connection's current schema; all metadata access is
/// read-only.
#[derive(Debug, Clone)]
pub struct PostgresProvider {
    pool: PgPool,
}

impl PostgresProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaMetadataProvider for PostgresProvider {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        queries::table_exists(&self.pool, table).await
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let raw = queries::list_columns(&self.pool, table).await?;
        Ok(mapper::map_columns(raw))
    }
}

#[async_trait]
impl RowStore for PostgresProvider {
    async fn query_random_row_id(&self, table: &str) -> Result<Option<i64>> {
        queries::random_row_id(&self.pool, table).await
    }

    async fn insert_returning_id(&self, table: &str, record: &SynthesizedRecord) -> Result<i64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("insert into ");
        builder.push(quote_ident(table));

        if record.is_empty() {
            // Every column was skipped; let the store fill in defaults.
            builder.push(" default values");
        } else {
            builder.push(" (");
            {
                let mut fields = builder.separated(", ");
                for (name, _) in record.iter() {
                    fields.push(quote_ident(name));
                }
            }
            builder.push(") values (");
            {
                let mut values = builder.separated(", ");
                for (_, value) in record.iter() {
                    match value {
                        FieldValue::Bool(value) => values.push_bind(*value),
                        FieldValue::Int(value) => values.push_bind(*value),
                        FieldValue::Text(value) | FieldValue::Uuid(value) => {
                            values.push_bind(value.clone())
                        }
                        FieldValue::Timestamp(value) => values.push_bind(*value),
                    };
                }
            }
            builder.push(")");
        }
        builder.push(" returning id::bigint");

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match map_sqlx(err) {
                Error::Db(message) => Error::Insert(message),
                other => other,
            })
    }
}
