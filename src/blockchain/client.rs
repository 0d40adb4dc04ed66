//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoints (primary + failovers)
//! - Query chain state (block number, receipts, deployed code)
//! - Execute read-only contract calls and broadcast signed transactions
//! - Handle timeouts and network errors gracefully

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::transports::TransportResult;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{ChainConfig, ChainError, ChainId, ChainResult};
use crate::blockchain::wallet::Wallet;
use crate::observability::metrics;

type DynProvider = Arc<dyn Provider + Send + Sync>;

/// Chain RPC client wrapper with failover support.
///
/// Every provider carries the wallet filler, so requests built without
/// explicit gas or nonce fields are still completed before signing.
#[derive(Clone)]
pub struct ChainClient {
    /// List of providers (primary + failovers).
    providers: Vec<DynProvider>,
    /// Configuration.
    config: ChainConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new chain client signing with `wallet`.
    ///
    /// Construction is offline; reachability is only checked by
    /// [`ChainClient::verify_chain_id`].
    pub fn new(config: ChainConfig, wallet: &Wallet) -> ChainResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        providers.push(Arc::new(
            ProviderBuilder::new()
                .wallet(wallet.network_wallet())
                .connect_http(primary_url),
        ) as DynProvider);

        for url_str in &config.failover_urls {
            if let Ok(url) = url_str.parse() {
                providers.push(Arc::new(
                    ProviderBuilder::new()
                        .wallet(wallet.network_wallet())
                        .connect_http(url),
                ) as DynProvider);
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        tracing::info!(
            rpc_url = %config.rpc_url,
            failovers = providers.len() - 1,
            chain_id = config.chain_id,
            "Chain client initialized"
        );

        Ok(Self {
            providers,
            config,
            timeout_duration,
        })
    }

    /// Run `f` against each provider in order until one answers.
    ///
    /// Each attempt is bounded by the configured RPC timeout; errors and
    /// timeouts fall through to the next provider.
    async fn with_failover<'a, T, F>(&'a self, what: &str, f: F) -> ChainResult<T>
    where
        F: Fn(&'a DynProvider) -> Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>,
    {
        for (i, provider) in self.providers.iter().enumerate() {
            match timeout(self.timeout_duration, f(provider)).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    tracing::warn!(provider_idx = i, error = %e, op = what, "RPC error, trying next provider");
                }
                Err(_) => {
                    tracing::warn!(provider_idx = i, op = what, "RPC timeout, trying next provider");
                }
            }
        }
        metrics::record_rpc_health(false);
        Err(ChainError::Rpc(format!("all RPC providers failed: {what}")))
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        metrics::record_rpc_health(true);
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<ChainId> {
        self.with_failover("get chain id", |p| Box::pin(p.get_chain_id().into_future()))
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.with_failover("get block number", |p| {
            Box::pin(p.get_block_number().into_future())
        })
        .await
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.with_failover("get transaction count", move |p| {
            Box::pin(p.get_transaction_count(address).into_future())
        })
        .await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.with_failover("get transaction receipt", move |p| {
            Box::pin(p.get_transaction_receipt(tx_hash).into_future())
        })
        .await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> ChainResult<u128> {
        self.with_failover("get gas price", |p| {
            Box::pin(p.get_gas_price().into_future())
        })
        .await
    }

    /// Get the deployed bytecode at an address.
    pub async fn get_code_at(&self, address: Address) -> ChainResult<Bytes> {
        self.with_failover("get code", move |p| {
            Box::pin(p.get_code_at(address).into_future())
        })
        .await
    }

    /// Execute a read-only contract call.
    pub async fn call(&self, tx: TransactionRequest) -> ChainResult<Bytes> {
        self.with_failover("contract call", move |p| {
            Box::pin(p.call(tx.clone()).into_future())
        })
        .await
    }

    /// Sign and broadcast a transaction, returning its hash.
    ///
    /// The request carries an explicit nonce, so rebroadcasting the same
    /// payload through a failover endpoint cannot double-spend.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let pending = self
            .with_failover("send transaction", move |p| {
                Box::pin(p.send_transaction(tx.clone()).into_future())
            })
            .await?;
        Ok(*pending.tx_hash())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Get the number of confirmation blocks required.
    pub fn confirmation_blocks(&self) -> u32 {
        self.config.confirmation_blocks
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
