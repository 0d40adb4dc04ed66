//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

// Re-export ChainConfig from config module to avoid duplication
pub use crate::config::schema::ChainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction was not confirmed within the configured window.
    #[error("transaction {0} was not confirmed in time")]
    ConfirmationTimeout(TxHash),

    /// Transaction was reverted on-chain.
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or missing signing environment.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Gas price exceeded maximum allowed.
    #[error("gas price {current_gwei} gwei exceeds maximum {max_gwei} gwei")]
    GasPriceTooHigh { current_gwei: u64, max_gwei: u64 },

    /// Chain configuration mismatch.
    #[error("chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Mint gate address missing, malformed, or without deployed code.
    #[error("mint gate not usable: {0}")]
    NotConfigured(String),

    /// The contract reported a sale phase this client does not know.
    #[error("unknown sale phase index {0}")]
    UnknownPhase(u8),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Transaction confirmation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Transaction is confirmed with required block depth.
    Confirmed { block_number: u64 },
    /// Transaction was mined but reverted.
    Failed(String),
}
