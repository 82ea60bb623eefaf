use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use stubseed_core::Error as CoreError;
use stubseed_introspect::PostgresProvider;
use stubseed_synth::{FakeValues, RecordSynthesizer, SeedRunner, Sha256Hasher};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Seed a table with mock data inferred from its schema.
#[derive(Parser, Debug)]
#[command(name = "stubseed", version, about)]
struct Cli {
    /// Table to seed.
    table: String,
    /// Number of records to insert.
    #[arg(long, value_name = "N", default_value_t = 1)]
    count: u64,
    /// Database connection string; falls back to DATABASE_URL.
    #[arg(long, value_name = "CONNECTION_STRING")]
    conn: Option<String>,
    /// Seed for deterministic value generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Skip the confirmation prompt.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conn = match cli.conn {
        Some(value) => value,
        None => std::env::var("DATABASE_URL").map_err(|_| {
            CliError::InvalidConfig(
                "connection string is required (--conn or DATABASE_URL)".to_string(),
            )
        })?,
    };

    if !cli.force && !confirm(&cli.table, cli.count)? {
        println!("Aborted.");
        return Ok(());
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&conn)
        .await?;

    let provider = PostgresProvider::new(pool);
    let faker = match cli.seed {
        Some(seed) => FakeValues::from_seed(seed),
        None => FakeValues::from_entropy(),
    };
    let synthesizer = RecordSynthesizer::new(faker, Sha256Hasher::default());
    let mut runner = SeedRunner::new(synthesizer, &provider, &provider);

    let report = runner.run(&cli.table, cli.count).await?;

    println!(
        "Seeded {} {} in {} seconds",
        report.count, report.table, report.elapsed_seconds
    );

    Ok(())
}

fn confirm(table: &str, count: u64) -> Result<bool, CliError> {
    print!("Seed table '{table}' with {count} record(s)? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
