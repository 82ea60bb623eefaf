use sqlx::{PgPool, Row};

use stubseed_core::{Error, Result};

/// Raw column metadata as read from `information_schema`.
pub struct RawColumn {
    pub name: String,
    pub data_type: String,
    pub is_identity: bool,
    pub default: Option<String>,
}

pub async fn table_exists(pool: &PgPool, table: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        r#"
        select exists (
          select 1
          from information_schema.tables
          where table_schema = current_schema()
            and table_name = $1
        )
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await
    .map_err(map_sqlx)
}

pub async fn list_columns(pool: &PgPool, table: &str) -> Result<Vec<RawColumn>> {
    let rows = sqlx::query(
        r#"
        select
          column_name,
          data_type,
          is_identity,
          column_default
        from information_schema.columns
        where table_schema = current_schema()
          and table_name = $1
        order by ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        columns.push(RawColumn {
            name: row.try_get("column_name").map_err(map_sqlx)?,
            data_type: row.try_get("data_type").map_err(map_sqlx)?,
            is_identity: row
                .try_get::<String, _>("is_identity")
                .map_err(map_sqlx)?
                == "YES",
            default: row.try_get("column_default").map_err(map_sqlx)?,
        });
    }
    Ok(columns)
}

pub async fn random_row_id(pool: &PgPool, table: &str) -> Result<Option<i64>> {
    let sql = format!(
        "select id::bigint from {} order by random() limit 1",
        quote_ident(table)
    );
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx)
}

/// Quotes an identifier for interpolation into dynamic SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Maps sqlx failures onto the stubseed error taxonomy; connection-level
/// failures become [`Error::Connection`], everything else [`Error::Db`].
pub fn map_sqlx(err: sqlx::Error) -> Error {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => Error::Connection(err.to_string()),
        _ => Error::Db(err.to_string()),
    }
}
