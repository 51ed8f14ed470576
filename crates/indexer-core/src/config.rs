use crate::error::{IndexerError, Result};
use alloy_primitives::Address;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Deployment configuration loaded from JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    /// Address of the Magenta order contract
    pub magenta: Address,
    #[serde(rename = "startBlock")]
    pub start_block: u64,
}

/// Runtime configuration from environment variables
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub chain_id: u64,
    pub rpc_url: String,
}

/// Complete indexer configuration
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    /// Address of the Magenta order contract
    pub magenta: Address,
    /// Block the contract was deployed at; historical sync starts here
    pub start_block: u64,
    pub sync: SyncConfig,
}

/// Sync-related configuration
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub retry_attempts: u32,
    pub retry_delay_ms: u64,
    /// Blocks per eth_getLogs request during historical sync
    pub batch_size: u64,
}

impl SyncConfig {
    pub fn from_env() -> Self {
        let retry_attempts = env::var("SYNC_RETRY_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let retry_delay_ms = env::var("SYNC_RETRY_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);

        let batch_size = env::var("SYNC_BATCH_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2000);

        Self {
            retry_attempts,
            retry_delay_ms,
            batch_size,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        let chain_id = env::var("CHAIN_ID")
            .map_err(|_| IndexerError::MissingEnvVar("CHAIN_ID".to_string()))?
            .parse::<u64>()
            .map_err(|_| IndexerError::MissingEnvVar("CHAIN_ID (invalid format)".to_string()))?;

        let rpc_url = Self::sanitize_url(
            env::var("RPC_URL").map_err(|_| IndexerError::MissingEnvVar("RPC_URL".to_string()))?,
        );

        Ok(Self { chain_id, rpc_url })
    }

    /// Sanitize URL by removing surrounding quotes and whitespace
    fn sanitize_url(url: String) -> String {
        let trimmed = url.trim();
        let without_quotes = if trimmed.starts_with('"') && trimmed.ends_with('"') {
            &trimmed[1..trimmed.len() - 1]
        } else if trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        without_quotes.to_string()
    }
}

impl DeploymentConfig {
    /// Load deployment configuration from `deployments/{chain_id}.json`
    pub fn load(chain_id: u64) -> Result<Self> {
        let path = Self::deployment_path(chain_id);
        let content = fs::read_to_string(&path)
            .map_err(|_| IndexerError::DeploymentFileNotFound(path.display().to_string()))?;

        serde_json::from_str(&content).map_err(|e| IndexerError::DeploymentParseError(e.to_string()))
    }

    fn deployment_path(chain_id: u64) -> PathBuf {
        PathBuf::from(format!("deployments/{}.json", chain_id))
    }
}

impl IndexerConfig {
    /// Load complete configuration from environment and deployment file
    pub fn load() -> Result<Self> {
        let env_config = EnvConfig::load()?;
        let deployment = DeploymentConfig::load(env_config.chain_id)?;

        Ok(Self {
            chain_id: env_config.chain_id,
            rpc_url: env_config.rpc_url,
            magenta: deployment.magenta,
            start_block: deployment.start_block,
            sync: SyncConfig::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_file_parses() {
        let raw = r#"{
            "magenta": "0x3199C8dAADac1285167066c2C917E9D8B11366bc",
            "startBlock": 12345678
        }"#;

        let deployment: DeploymentConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(deployment.start_block, 12345678);
        assert_eq!(
            deployment.magenta,
            "0x3199C8dAADac1285167066c2C917E9D8B11366bc"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn url_sanitization_strips_quotes() {
        assert_eq!(
            EnvConfig::sanitize_url("\"https://rpc.example\"".to_string()),
            "https://rpc.example"
        );
        assert_eq!(
            EnvConfig::sanitize_url("  https://rpc.example ".to_string()),
            "https://rpc.example"
        );
    }
}
