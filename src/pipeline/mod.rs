pub mod calendar;
pub mod filter;
pub mod normalize;
pub mod partition;

use metrics::counter;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::{
    PRODUCT_DETAILS_COLLECTION, PRODUCT_PRICE_COLLECTION, SALES_COLLECTION,
};
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::loader;
use crate::sink::DocumentStore;

/// Counts reported by a completed run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_dropped_missing_price: usize,
    pub rows_dropped_invalid_date: usize,
    pub rows_persisted: usize,
}

/// One batch ETL job: load, normalize, convert dates, filter, partition,
/// persist. Built explicitly by the caller; running it is a single
/// synchronous pass over the whole dataset, one stage at a time.
pub struct EtlJob {
    config: Config,
    store: Arc<dyn DocumentStore>,
    ids: Arc<dyn IdGenerator>,
}

impl EtlJob {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { config, store, ids }
    }

    #[instrument(skip(self), fields(source = %self.config.source.csv_path))]
    pub async fn run(&self) -> Result<RunSummary> {
        info!("🚀 Starting ETL run");
        counter!("bazari_runs_total").increment(1);

        let raw_rows = loader::load_csv(Path::new(&self.config.source.csv_path))?;
        let rows_loaded = raw_rows.len();
        counter!("bazari_rows_loaded_total").increment(rows_loaded as u64);

        info!("🔧 Normalizing {} rows", rows_loaded);
        let normalized = normalize::normalize_rows(raw_rows, self.ids.as_ref());
        let rows_dropped_missing_price = rows_loaded - normalized.len();

        info!("📅 Converting dates to the Jalali calendar");
        let converted = calendar::convert_dates(normalized);

        let before_filter = converted.len();
        let validated = filter::drop_undated(converted);
        let rows_dropped_invalid_date = before_filter - validated.len();

        info!("✂️  Partitioning {} surviving rows", validated.len());
        let (prices, details, sales) = partition::partition_rows(&validated);

        // Sequential writes; a failure aborts the run but leaves batches
        // already written in place.
        self.write_batch(PRODUCT_PRICE_COLLECTION, &prices).await?;
        self.write_batch(PRODUCT_DETAILS_COLLECTION, &details).await?;
        self.write_batch(SALES_COLLECTION, &sales).await?;

        let rows_persisted = validated.len();
        counter!("bazari_rows_persisted_total").increment(rows_persisted as u64);

        info!(
            "✅ ETL run complete: {} loaded, {} dropped on price, {} dropped on date, {} persisted",
            rows_loaded, rows_dropped_missing_price, rows_dropped_invalid_date, rows_persisted
        );

        Ok(RunSummary {
            rows_loaded,
            rows_dropped_missing_price,
            rows_dropped_invalid_date,
            rows_persisted,
        })
    }

    async fn write_batch<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<usize> {
        let documents = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let written = self.store.insert_batch(collection, &documents).await?;
        counter!("bazari_batches_persisted_total").increment(1);
        info!("💾 Persisted {} records to '{}'", written, collection);
        Ok(written)
    }
}
