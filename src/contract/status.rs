//! Sale phase and contract status model.

use std::fmt;

use alloy::primitives::{utils::format_ether, U256};

use crate::blockchain::types::ChainError;

/// Sale stages exposed by the mint gate, in contract index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalePhase {
    Phase1,
    Phase2,
    Phase3,
}

impl SalePhase {
    pub fn name(&self) -> &'static str {
        match self {
            SalePhase::Phase1 => "Phase1",
            SalePhase::Phase2 => "Phase2",
            SalePhase::Phase3 => "Phase3",
        }
    }
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for SalePhase {
    type Error = ChainError;

    /// A phase index outside the known list means the deployed contract is
    /// newer than this client; that is rejected rather than clamped.
    fn try_from(index: u8) -> Result<Self, ChainError> {
        match index {
            0 => Ok(SalePhase::Phase1),
            1 => Ok(SalePhase::Phase2),
            2 => Ok(SalePhase::Phase3),
            other => Err(ChainError::UnknownPhase(other)),
        }
    }
}

/// Snapshot of the mint gate's sale state.
///
/// The default value is the state shown before any successful read: first
/// phase, zero price, pause flag unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractStatus {
    pub phase: SalePhase,
    /// Raw mint price in wei, passed unmodified as the mint value.
    pub mint_price_wei: U256,
    /// Decimal ETH value shown to the user.
    pub mint_price_eth: f64,
    /// None until a successful read reports the flag.
    pub paused: Option<bool>,
}

impl Default for ContractStatus {
    fn default() -> Self {
        Self {
            phase: SalePhase::Phase1,
            mint_price_wei: U256::ZERO,
            mint_price_eth: 0.0,
            paused: None,
        }
    }
}

impl ContractStatus {
    /// Compose a status from the three raw contract reads.
    pub fn from_reads(phase_index: u8, mint_price_wei: U256, paused: bool) -> Result<Self, ChainError> {
        let phase = SalePhase::try_from(phase_index)?;
        Ok(Self {
            phase,
            mint_price_eth: display_price(mint_price_wei),
            mint_price_wei,
            paused: Some(paused),
        })
    }
}

/// Convert a raw wei amount into the decimal ETH value shown to the user.
fn display_price(wei: U256) -> f64 {
    format_ether(wei).parse().unwrap_or(0.0)
}
