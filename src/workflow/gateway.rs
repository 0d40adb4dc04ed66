//! Chain gateway seam.
//!
//! The workflows talk to the chain exclusively through [`LedgerGateway`],
//! so tests substitute an in-memory stub and the production path stays in
//! one place.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::blockchain::client::ChainClient;
use crate::blockchain::transaction::TxBuilder;
use crate::blockchain::types::{ChainError, ChainResult};
use crate::blockchain::wallet::Wallet;
use crate::contract::bindings::IMintGate;
use crate::contract::status::ContractStatus;

/// Ledger records are addressed to the null address; the calldata is the
/// record, the destination carries no meaning.
pub const RECORD_SINK: Address = Address::ZERO;

/// Everything the workflows need from the chain.
///
/// Implementations submit and confirm; callers never see raw provider
/// types.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Establish the wallet session: endpoint reachable, chain ID as
    /// configured.
    async fn connect(&self) -> ChainResult<()>;

    /// Read the current sale phase, price, and pause flag.
    async fn read_status(&self) -> ChainResult<ContractStatus>;

    /// Write one data record and wait for confirmation.
    async fn store_record(&self, payload: Bytes) -> ChainResult<TxHash>;

    /// Check that the configured mint gate is actually deployed.
    async fn verify_mint_gate(&self) -> ChainResult<()>;

    /// Invoke the mint entry point and wait for confirmation.
    async fn submit_mint(&self, record_hashes: Vec<TxHash>, value: U256) -> ChainResult<TxHash>;
}

/// Gateway backed by an EVM JSON-RPC endpoint and a local signing wallet.
pub struct EvmGateway {
    client: ChainClient,
    tx: TxBuilder,
    mint_gate: Option<Address>,
}

impl std::fmt::Debug for EvmGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmGateway")
            .field("mint_gate", &self.mint_gate)
            .finish_non_exhaustive()
    }
}

impl EvmGateway {
    /// Build a gateway from a connected client and wallet.
    ///
    /// An empty address string leaves the mint gate unconfigured; status
    /// reads and minting then fail fast without touching the network.
    pub fn new(client: ChainClient, wallet: Wallet, mint_gate_address: &str) -> ChainResult<Self> {
        let mint_gate = if mint_gate_address.is_empty() {
            None
        } else {
            Some(mint_gate_address.parse().map_err(|e| {
                ChainError::NotConfigured(format!(
                    "invalid mint gate address '{}': {}",
                    mint_gate_address, e
                ))
            })?)
        };

        let tx = TxBuilder::new(client.clone(), wallet);
        Ok(Self {
            client,
            tx,
            mint_gate,
        })
    }

    fn mint_gate(&self) -> ChainResult<Address> {
        self.mint_gate
            .ok_or_else(|| ChainError::NotConfigured("no mint gate address configured".to_string()))
    }

    /// Encode and execute a read-only call against the mint gate.
    async fn call_gate(&self, calldata: Vec<u8>) -> ChainResult<Bytes> {
        let gate = self.mint_gate()?;
        let req = TransactionRequest::default()
            .with_to(gate)
            .with_input(calldata);
        self.client.call(req).await
    }
}

fn decode_error(e: alloy::sol_types::Error) -> ChainError {
    ChainError::Rpc(format!("malformed contract return: {e}"))
}

#[async_trait]
impl LedgerGateway for EvmGateway {
    async fn connect(&self) -> ChainResult<()> {
        self.client.verify_chain_id().await?;
        tracing::info!(
            wallet = %self.tx.address(),
            "Wallet session established"
        );
        Ok(())
    }

    async fn read_status(&self) -> ChainResult<ContractStatus> {
        // Three sequential reads, mirroring the gate's accessor layout.
        let raw = self
            .call_gate(IMintGate::currentPhaseCall {}.abi_encode())
            .await?;
        let phase_index: u8 =
            IMintGate::currentPhaseCall::abi_decode_returns(&raw).map_err(decode_error)?;

        let raw = self
            .call_gate(IMintGate::phaseDetailsCall { phase: phase_index }.abi_encode())
            .await?;
        let mint_price: U256 =
            IMintGate::phaseDetailsCall::abi_decode_returns(&raw).map_err(decode_error)?;

        let raw = self.call_gate(IMintGate::pausedCall {}.abi_encode()).await?;
        let paused: bool = IMintGate::pausedCall::abi_decode_returns(&raw).map_err(decode_error)?;

        ContractStatus::from_reads(phase_index, mint_price, paused)
    }

    async fn store_record(&self, payload: Bytes) -> ChainResult<TxHash> {
        self.tx
            .submit_and_confirm(RECORD_SINK, U256::ZERO, payload)
            .await
    }

    async fn verify_mint_gate(&self) -> ChainResult<()> {
        let gate = self.mint_gate()?;
        let code = self.client.get_code_at(gate).await?;
        if code.is_empty() {
            return Err(ChainError::NotConfigured(format!(
                "no contract code at {gate}; check the configured address"
            )));
        }
        Ok(())
    }

    async fn submit_mint(&self, record_hashes: Vec<TxHash>, value: U256) -> ChainResult<TxHash> {
        let gate = self.mint_gate()?;
        let call = IMintGate::mintCall {
            recordHashes: record_hashes,
        };
        self.tx
            .submit_and_confirm(gate, value, call.abi_encode().into())
            .await
    }
}
