pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod jalali;
pub mod loader;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod sink;
pub mod types;
