pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::{IndexerConfig, SyncConfig};
pub use error::{IndexerError, Result};
