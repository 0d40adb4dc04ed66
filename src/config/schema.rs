//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the mint
//! flow client. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the mint flow client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MintFlowConfig {
    /// Chain endpoint settings.
    pub chain: ChainConfig,

    /// Mint gate contract settings.
    pub contract: ContractConfig,

    /// Trait source settings.
    pub traits: TraitSourceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Chain endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    #[serde(default)]
    pub failover_urls: Vec<String>,

    /// Chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for one transaction to confirm, in seconds.
    pub confirmation_timeout_secs: u64,

    /// Gas price multiplier (1.0 = estimated, 1.2 = 20% buffer).
    pub gas_price_multiplier: f64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_gas_price_gwei: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            chain_id: 1,
            rpc_timeout_secs: 10,
            confirmation_blocks: 3,
            confirmation_timeout_secs: 180,
            gas_price_multiplier: 1.2,
            max_gas_price_gwei: 500,
        }
    }
}

/// Mint gate contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the deployed mint gate. Empty means not configured;
    /// status reads and minting fail fast in that case.
    pub address: String,
}

/// Trait source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TraitSourceConfig {
    /// Path to the JSON file holding the ordered trait entries.
    pub path: String,
}

impl Default for TraitSourceConfig {
    fn default() -> Self {
        Self {
            path: "traits.json".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MintFlowConfig::default();
        assert_eq!(config.chain.chain_id, 1);
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert_eq!(config.chain.confirmation_blocks, 3);
        assert!(config.contract.address.is_empty());
        assert_eq!(config.traits.path, "traits.json");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: MintFlowConfig = toml::from_str("").unwrap();
        assert_eq!(config.chain.rpc_url, "http://localhost:8545");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: MintFlowConfig = toml::from_str(
            r#"
            [chain]
            chain_id = 31337
            rpc_url = "http://127.0.0.1:8545"

            [contract]
            address = "0x0000000000000000000000000000000000000001"
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.chain_id, 31337);
        // Untouched sections keep their defaults.
        assert_eq!(config.chain.confirmation_blocks, 3);
        assert!(!config.contract.address.is_empty());
    }
}
