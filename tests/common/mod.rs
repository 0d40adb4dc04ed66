//! Shared stubs for workflow integration tests.

use std::sync::Mutex;

use alloy::primitives::{Bytes, TxHash, U256};
use async_trait::async_trait;

use mintflow::artwork::{TraitEntry, TraitSet};
use mintflow::blockchain::types::{ChainError, ChainResult};
use mintflow::contract::status::ContractStatus;
use mintflow::workflow::gateway::LedgerGateway;

/// Deterministic hash for the i-th stub submission.
pub fn stub_hash(i: usize) -> TxHash {
    TxHash::with_last_byte(i as u8)
}

/// Gateway stub that confirms every submission, records every interaction,
/// and optionally fails the Nth store submission.
#[derive(Default)]
pub struct StubGateway {
    /// 1-based submission index that should fail; None confirms everything.
    pub fail_store_at: Option<usize>,
    /// Status returned by `read_status`.
    pub status: ContractStatus,
    /// Payloads of confirmed store submissions, in order.
    pub stored: Mutex<Vec<Bytes>>,
    /// Arguments of the last accepted mint call.
    pub minted: Mutex<Option<(Vec<TxHash>, U256)>>,
    /// Total mint submissions seen, accepted or not.
    pub mint_calls: Mutex<usize>,
    pub submissions: Mutex<usize>,
}

#[async_trait]
impl LedgerGateway for StubGateway {
    async fn connect(&self) -> ChainResult<()> {
        Ok(())
    }

    async fn read_status(&self) -> ChainResult<ContractStatus> {
        Ok(self.status.clone())
    }

    async fn store_record(&self, payload: Bytes) -> ChainResult<TxHash> {
        let n = {
            let mut submissions = self.submissions.lock().unwrap();
            *submissions += 1;
            *submissions
        };

        if self.fail_store_at == Some(n) {
            return Err(ChainError::Rpc(format!("injected failure at submission {n}")));
        }

        self.stored.lock().unwrap().push(payload);
        Ok(stub_hash(n))
    }

    async fn verify_mint_gate(&self) -> ChainResult<()> {
        Ok(())
    }

    async fn submit_mint(&self, record_hashes: Vec<TxHash>, value: U256) -> ChainResult<TxHash> {
        *self.mint_calls.lock().unwrap() += 1;
        *self.minted.lock().unwrap() = Some((record_hashes, value));
        Ok(TxHash::with_last_byte(0xAA))
    }
}

/// A trait set with nine non-empty payloads, in layer order.
pub fn nine_trait_set() -> TraitSet {
    let layers = [
        "background",
        "body",
        "head",
        "eyes",
        "mouth",
        "outfit",
        "accessory",
        "hand",
        "badge",
    ];
    TraitSet::from_entries(
        layers
            .iter()
            .enumerate()
            .map(|(i, name)| TraitEntry {
                name: name.to_string(),
                data: Some(format!("{:02x}{:02x}", i, i)),
            })
            .collect(),
    )
}
