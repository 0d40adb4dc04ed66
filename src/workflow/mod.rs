//! Store-and-mint workflow subsystem.
//!
//! # Data Flow
//! ```text
//! TraitSet (ordered payloads)
//!     → store.rs (one confirmed ledger record per payload, sequential)
//!     → collected record hashes
//!     → mint.rs (single mint call carrying the hash list + price)
//! ```
//!
//! # Design Decisions
//! - One `MintFlow` value owns all session state; no locking
//! - `FlowState` rejects entry into a second workflow while one runs
//! - The chain is reached only through the `LedgerGateway` seam

pub mod gateway;
pub mod mint;
pub mod state;
pub mod store;

use alloy::primitives::TxHash;
use thiserror::Error;

use crate::blockchain::types::ChainError;
use crate::contract::status::ContractStatus;

pub use gateway::{EvmGateway, LedgerGateway};
pub use state::FlowState;

/// Number of ledger records a token references. The mint gate expects
/// exactly one record per trait layer.
pub const REQUIRED_RECORD_COUNT: usize = 9;

/// Errors surfaced by the workflow driver.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A workflow was entered while another one was running.
    #[error("another workflow is already running ({0})")]
    Busy(&'static str),

    /// The wallet session was never established.
    #[error("wallet is not connected")]
    WalletNotConnected,

    /// Minting was requested with the wrong number of stored records.
    #[error("expected {expected} stored record hashes, have {actual}")]
    RecordCount { expected: usize, actual: usize },

    /// A trait payload was not decodable into record bytes.
    #[error("trait '{name}' carries invalid hex data: {source}")]
    Payload {
        name: String,
        #[source]
        source: hex::FromHexError,
    },

    /// The chain boundary failed.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Drives the two on-chain workflows over an injected gateway.
///
/// Owns the session state: wallet connection, last fetched contract
/// status, collected record hashes, and which workflow is in flight.
pub struct MintFlow<G> {
    gateway: G,
    state: FlowState,
    wallet_connected: bool,
    status: ContractStatus,
    record_hashes: Vec<TxHash>,
}

impl<G: LedgerGateway> MintFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: FlowState::Idle,
            wallet_connected: false,
            status: ContractStatus::default(),
            record_hashes: Vec::new(),
        }
    }

    /// Establish the wallet session.
    ///
    /// Leaves the session disconnected on any fault; the caller may simply
    /// try again.
    pub async fn connect(&mut self) -> Result<(), WorkflowError> {
        self.gateway.connect().await?;
        self.wallet_connected = true;
        Ok(())
    }

    /// Refresh the cached contract status.
    ///
    /// A failed read keeps the prior value, so the session never loses a
    /// status it already had.
    pub async fn refresh_status(&mut self) -> Result<&ContractStatus, WorkflowError> {
        let status = self.gateway.read_status().await?;
        tracing::info!(
            phase = %status.phase,
            price_wei = %status.mint_price_wei,
            paused = ?status.paused,
            "Contract status refreshed"
        );
        self.status = status;
        Ok(&self.status)
    }

    /// Seed the collected hash list from an earlier session's store run.
    pub fn resume_with_hashes(&mut self, hashes: Vec<TxHash>) {
        self.record_hashes = hashes;
    }

    pub fn status(&self) -> &ContractStatus {
        &self.status
    }

    pub fn record_hashes(&self) -> &[TxHash] {
        &self.record_hashes
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn wallet_connected(&self) -> bool {
        self.wallet_connected
    }

    /// Whether enough records are collected for the mint call.
    pub fn mint_ready(&self) -> bool {
        self.record_hashes.len() == REQUIRED_RECORD_COUNT
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
