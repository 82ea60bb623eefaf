use std::time::Instant;

use serde::Serialize;
use tracing::info;

use stubseed_core::inflect::singular_studly;
use stubseed_core::{Result, RowStore, SchemaMetadataProvider};

use crate::synthesizer::RecordSynthesizer;
use crate::values::{CredentialHasher, ValueFaker};

/// Summary of a completed seeding run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeedReport {
    pub table: String,
    pub count: u64,
    /// Wall-clock time across the whole loop, rounded to 2 decimal places.
    pub elapsed_seconds: f64,
}

/// Orchestrates count-many synthesize-and-insert cycles.
pub struct SeedRunner<'a, F, H> {
    synthesizer: RecordSynthesizer<F, H>,
    schema: &'a dyn SchemaMetadataProvider,
    store: &'a dyn RowStore,
}

impl<'a, F, H> SeedRunner<'a, F, H>
where
    F: ValueFaker,
    H: CredentialHasher,
{
    pub fn new(
        synthesizer: RecordSynthesizer<F, H>,
        schema: &'a dyn SchemaMetadataProvider,
        store: &'a dyn RowStore,
    ) -> Self {
        Self {
            synthesizer,
            schema,
            store,
        }
    }

    /// Seeds `count` records into `table`.
    ///
    /// A count of zero is treated as one. The table's existence is checked
    /// once up front; a missing table aborts before any insert. Any insert
    /// failure aborts the remaining iterations and propagates, and no report
    /// is emitted.
    pub async fn run(&mut self, table: &str, count: u64) -> Result<SeedReport> {
        let count = count.max(1);
        let columns = self.schema.describe(table).await?;
        let label = singular_studly(table);

        info!(table, count, "seeding started");
        let start = Instant::now();

        for _ in 0..count {
            let record = self
                .synthesizer
                .synthesize(&columns, self.schema, self.store)
                .await?;
            let id = self.store.insert_returning_id(table, &record).await?;
            info!("created {label} with id {id}");
        }

        let elapsed_seconds = round2(start.elapsed().as_secs_f64());
        info!(table, count, elapsed_seconds, "seeding finished");

        Ok(SeedReport {
            table: table.to_string(),
            count,
            elapsed_seconds,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
