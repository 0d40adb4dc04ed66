//! Mint workflow.

use alloy::primitives::TxHash;

use crate::observability::metrics;
use crate::workflow::gateway::LedgerGateway;
use crate::workflow::state::FlowState;
use crate::workflow::{MintFlow, WorkflowError, REQUIRED_RECORD_COUNT};

impl<G: LedgerGateway> MintFlow<G> {
    /// Mint the token referencing the stored record hashes.
    ///
    /// Preconditions, checked in order before the network is touched: no
    /// workflow in flight, exactly the required hash count, connected
    /// wallet. The previously fetched raw mint price rides along as the
    /// transaction value; `refresh_status` must have run for a non-free
    /// phase or the gate will reject the underpayment.
    pub async fn mint(&mut self) -> Result<TxHash, WorkflowError> {
        if !self.state.is_idle() {
            return Err(WorkflowError::Busy(self.state.describe()));
        }
        if self.record_hashes.len() != REQUIRED_RECORD_COUNT {
            return Err(WorkflowError::RecordCount {
                expected: REQUIRED_RECORD_COUNT,
                actual: self.record_hashes.len(),
            });
        }
        if !self.wallet_connected {
            return Err(WorkflowError::WalletNotConnected);
        }

        self.state = FlowState::Minting;
        let result = self.mint_inner().await;
        self.state = FlowState::Idle;
        metrics::record_mint_result(result.is_ok());
        result
    }

    async fn mint_inner(&mut self) -> Result<TxHash, WorkflowError> {
        // Guards against a mistyped or stale address before spending gas.
        self.gateway.verify_mint_gate().await?;

        let value = self.status.mint_price_wei;
        tracing::info!(
            records = self.record_hashes.len(),
            value_wei = %value,
            "Submitting mint transaction"
        );

        let hash = self
            .gateway
            .submit_mint(self.record_hashes.clone(), value)
            .await?;
        tracing::info!(tx_hash = %hash, "Mint confirmed");
        Ok(hash)
    }
}
