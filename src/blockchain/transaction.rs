//! Transaction building, broadcast, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with nonce and gas discipline
//! - Broadcast through the client and poll for confirmation depth
//! - Classify on-chain reverts

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::blockchain::wallet::Wallet;

/// Intrinsic transaction cost in gas.
const BASE_TX_GAS: u64 = 21_000;

/// Simplified calldata cost: every byte priced at the non-zero rate.
fn calldata_gas(data_len: usize) -> u64 {
    BASE_TX_GAS + data_len as u64 * 16
}

/// Builds, submits, and confirms transactions for one wallet.
pub struct TxBuilder {
    client: ChainClient,
    wallet: Wallet,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(client: ChainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build a transaction request with explicit nonce and gas fields.
    ///
    /// The nonce is synced from the chain first, so a fresh run starts from
    /// the wallet's on-chain state. The gas price is fetched, checked
    /// against the configured gwei cap, and padded by the configured
    /// multiplier.
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> ChainResult<TransactionRequest> {
        let chain_nonce = self
            .client
            .get_transaction_count(self.wallet.address())
            .await?;
        self.wallet.set_nonce(chain_nonce);

        let gas_price = self.client.get_gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;

        let config = self.client.config();
        if gas_price_gwei > config.max_gas_price_gwei as u128 {
            return Err(ChainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: config.max_gas_price_gwei,
            });
        }

        let adjusted_gas_price = (gas_price as f64 * config.gas_price_multiplier) as u128;
        let nonce = self.wallet.get_and_increment_nonce();
        let gas_limit = calldata_gas(data.len());

        let tx = TransactionRequest::default()
            .with_to(to)
            .with_value(value)
            .with_input(data)
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(gas_limit);

        Ok(tx)
    }

    /// Wait for a transaction to reach the configured confirmation depth.
    pub async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
    ) -> ChainResult<ConfirmationStatus> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_duration = Duration::from_secs(timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "execution reverted".to_string(),
                    ));
                }

                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) as u32;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout(tx_hash)),
        }
    }

    /// Build, broadcast, and confirm one transaction.
    ///
    /// Returns once the configured confirmation depth is observed; an
    /// on-chain revert surfaces as [`ChainError::Reverted`].
    pub async fn submit_and_confirm(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> ChainResult<TxHash> {
        let tx = self.build(to, value, data).await?;
        let tx_hash = self.client.send_transaction(tx).await?;
        tracing::debug!(tx_hash = %tx_hash, to = %to, "Transaction broadcast");

        let timeout_secs = self.client.config().confirmation_timeout_secs;
        match self.wait_for_confirmation(tx_hash, timeout_secs).await? {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::debug!(tx_hash = %tx_hash, block_number, "Transaction confirmed");
                Ok(tx_hash)
            }
            ConfirmationStatus::Failed(reason) => Err(ChainError::Reverted(reason)),
        }
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calldata_gas() {
        assert_eq!(calldata_gas(0), 21_000);
        assert_eq!(calldata_gas(100), 21_000 + 1_600);
    }

    #[test]
    fn test_confirmation_status() {
        let status = ConfirmationStatus::Confirmed { block_number: 100 };
        assert!(matches!(status, ConfirmationStatus::Confirmed { .. }));

        let status = ConfirmationStatus::Failed("execution reverted".to_string());
        assert!(matches!(status, ConfirmationStatus::Failed(_)));
    }
}
