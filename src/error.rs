use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sink write failed for collection '{collection}': {message}")]
    Sink { collection: String, message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
