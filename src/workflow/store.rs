//! Ledger-record store workflow.

use alloy::primitives::Bytes;

use crate::artwork::types::TraitSet;
use crate::observability::metrics;
use crate::workflow::gateway::LedgerGateway;
use crate::workflow::state::FlowState;
use crate::workflow::{MintFlow, WorkflowError};

impl<G: LedgerGateway> MintFlow<G> {
    /// Write every non-empty trait payload as an individually confirmed
    /// ledger record, in trait-set order.
    ///
    /// Strictly sequential: record N+1 is never submitted before record N
    /// confirms, so the hash list always comes out in the same order the
    /// mint gate expects. Aborts on the first failure; hashes confirmed
    /// before the failure stay collected. A re-run starts over from the
    /// first payload, so an aborted run can leave duplicate records on
    /// chain (accepted, see DESIGN.md).
    pub async fn store_records(&mut self, traits: &TraitSet) -> Result<(), WorkflowError> {
        if !self.state.is_idle() {
            return Err(WorkflowError::Busy(self.state.describe()));
        }
        if !self.wallet_connected {
            return Err(WorkflowError::WalletNotConnected);
        }

        self.state = FlowState::StoringRecords;
        let result = self.store_records_inner(traits).await;
        // Unconditional: the state frees up on success and failure alike.
        self.state = FlowState::Idle;
        result
    }

    async fn store_records_inner(&mut self, traits: &TraitSet) -> Result<(), WorkflowError> {
        self.record_hashes.clear();

        for (name, payload) in traits.non_empty() {
            let data = hex::decode(payload.strip_prefix("0x").unwrap_or(payload)).map_err(
                |source| WorkflowError::Payload {
                    name: name.to_string(),
                    source,
                },
            )?;

            let hash = self.gateway.store_record(Bytes::from(data)).await?;
            metrics::record_record_stored();
            tracing::info!(trait_name = %name, tx_hash = %hash, "Ledger record confirmed");
            self.record_hashes.push(hash);
        }

        tracing::info!(count = self.record_hashes.len(), "All ledger records stored");
        Ok(())
    }
}
