//! Command implementations.

mod ask;
mod config;
mod ingest;

pub use ask::run_ask;
pub use config::run_config;
pub use ingest::run_ingest;
