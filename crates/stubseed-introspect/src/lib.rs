//! Database adapters for stubseed.
//!
//! Implements the core boundary traits (`SchemaMetadataProvider`,
//! `RowStore`) for Postgres over `sqlx`.

pub mod postgres;

pub use postgres::PostgresProvider;
