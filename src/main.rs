use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

use bazari_etl::config::Config;
use bazari_etl::ids::{IdGenerator, RandomIds};
use bazari_etl::pipeline::EtlJob;
use bazari_etl::sink::{DocumentStore, JsonFileStore};
use bazari_etl::{logging, metrics};

#[derive(Parser)]
#[command(name = "bazari-etl")]
#[command(about = "Batch ETL for e-commerce product and sale records")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline once: load, normalize, convert, partition, persist
    Run {
        /// Path to the TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();
    metrics::init_metrics();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let config = Config::load(&config)?;

            let store: Arc<dyn DocumentStore> = Arc::new(JsonFileStore::new(
                &config.sink.data_dir,
                &config.sink.database,
            ));
            let ids: Arc<dyn IdGenerator> = Arc::new(RandomIds);

            let job = EtlJob::new(config, store, ids);
            match job.run().await {
                Ok(summary) => {
                    println!("\n📊 ETL Run Summary:");
                    println!("   Rows loaded: {}", summary.rows_loaded);
                    println!(
                        "   Dropped (unparsable price): {}",
                        summary.rows_dropped_missing_price
                    );
                    println!(
                        "   Dropped (missing/invalid date): {}",
                        summary.rows_dropped_invalid_date
                    );
                    println!("   Rows persisted: {}", summary.rows_persisted);
                }
                Err(e) => {
                    error!("ETL run failed: {}", e);
                    println!("❌ ETL run failed: {}", e);
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}
