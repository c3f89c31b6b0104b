use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Run configuration, constructed explicitly by the caller and handed to the
/// job. Nothing here is read at module load time.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub sink: SinkConfig,
}

/// Where the raw product/sale table comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub csv_path: String,
}

/// Where the derived entity batches go.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    pub data_dir: String,
    pub database: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EtlError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
