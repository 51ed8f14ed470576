use alloy::network::Ethereum;
use alloy::providers::{Provider, ProviderBuilder};
use indexer_core::{IndexerError, Result};
use std::sync::Arc;

/// Boxed provider trait for HTTP connections
pub type BoxedProvider = Arc<dyn Provider<Ethereum> + Send + Sync>;

/// Manages the RPC provider used by both sync phases
pub struct ProviderManager {
    http: BoxedProvider,
}

impl ProviderManager {
    pub fn new(http_url: &str) -> Result<Self> {
        let http_url: reqwest::Url = http_url
            .parse()
            .map_err(|e| IndexerError::Rpc(format!("Invalid HTTP URL: {}", e)))?;

        let http = ProviderBuilder::new().connect_http(http_url);

        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Get HTTP provider reference
    pub fn http(&self) -> &BoxedProvider {
        &self.http
    }
}
