//! Requires a reachable Postgres database; run with
//! `cargo test -p stubseed-introspect -- --ignored` and
//! `TEST_DATABASE_URL` (or `DATABASE_URL`) set.

use std::{env, time::Duration};

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use stubseed_core::{
    FieldValue, IntWidth, RowStore, SchemaMetadataProvider, SqlType, SynthesizedRecord,
};
use stubseed_introspect::PostgresProvider;

const SETUP_SQL: &[&str] = &[
    "drop table if exists stubseed_widgets",
    "drop table if exists stubseed_blanks",
    "create table stubseed_widgets (
        id bigserial primary key,
        label character varying(50),
        active boolean,
        created_at timestamp with time zone,
        payload jsonb
    )",
    "create table stubseed_blanks (id bigserial primary key)",
];

const TEARDOWN_SQL: &[&str] = &[
    "drop table if exists stubseed_widgets",
    "drop table if exists stubseed_blanks",
];

fn database_url() -> Result<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .context("set TEST_DATABASE_URL or DATABASE_URL for integration tests")
}

async fn connect() -> Result<PgPool> {
    let db_url = database_url()?;
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&db_url)
        .await
        .context("connecting to Postgres")
}

async fn run_statements(pool: &PgPool, statements: &[&str]) -> Result<()> {
    for sql in statements {
        sqlx::query(sql)
            .execute(pool)
            .await
            .with_context(|| format!("executing '{sql}'"))?;
    }
    Ok(())
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn describes_samples_and_inserts_against_live_postgres() -> Result<()> {
    let pool = connect().await?;
    run_statements(&pool, SETUP_SQL).await?;

    let provider = PostgresProvider::new(pool.clone());

    let columns = provider.describe("stubseed_widgets").await?;
    let names: Vec<&str> = columns.iter().map(|col| col.name.as_str()).collect();
    assert_eq!(names, vec!["id", "label", "active", "created_at", "payload"]);

    let id_col = &columns[0];
    assert!(id_col.is_auto_increment);
    assert_eq!(id_col.sql_type, SqlType::Integer(IntWidth::Big));
    assert_eq!(columns[1].sql_type, SqlType::Text);
    assert_eq!(columns[2].sql_type, SqlType::Boolean);
    assert_eq!(columns[3].sql_type, SqlType::DateTime);
    assert_eq!(columns[4].sql_type, SqlType::Unknown);

    assert_eq!(provider.query_random_row_id("stubseed_widgets").await?, None);

    let mut record = SynthesizedRecord::new();
    record.push("label", FieldValue::Text("widget one".to_string()));
    record.push("active", FieldValue::Bool(true));
    record.push("created_at", FieldValue::Timestamp(Utc::now()));

    let first = provider
        .insert_returning_id("stubseed_widgets", &record)
        .await?;
    let second = provider
        .insert_returning_id("stubseed_widgets", &record)
        .await?;
    assert_ne!(first, second);

    let sampled = provider
        .query_random_row_id("stubseed_widgets")
        .await?
        .context("expected a sampled id")?;
    assert!(sampled == first || sampled == second);

    // All columns skipped: the insert must fall back to `default values`.
    let blank = provider
        .insert_returning_id("stubseed_blanks", &SynthesizedRecord::new())
        .await?;
    assert!(blank >= 1);

    run_statements(&pool, TEARDOWN_SQL).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a Postgres database"]
async fn missing_table_is_reported_before_any_work() -> Result<()> {
    let pool = connect().await?;
    let provider = PostgresProvider::new(pool);

    let err = provider
        .describe("stubseed_ghost")
        .await
        .expect_err("missing table");
    assert!(matches!(
        err,
        stubseed_core::Error::TableNotFound(name) if name == "stubseed_ghost"
    ));
    Ok(())
}
