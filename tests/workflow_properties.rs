//! End-to-end properties of the store and mint workflows over a stub
//! gateway.

use alloy::primitives::U256;

use mintflow::contract::status::{ContractStatus, SalePhase};
use mintflow::workflow::state::FlowState;
use mintflow::{MintFlow, WorkflowError, REQUIRED_RECORD_COUNT};

mod common;

use common::{nine_trait_set, stub_hash, StubGateway};

fn one_ether() -> U256 {
    U256::from(1_000_000_000_000_000_000u64)
}

fn priced_stub(fail_store_at: Option<usize>) -> StubGateway {
    StubGateway {
        fail_store_at,
        status: ContractStatus::from_reads(1, one_ether(), false).unwrap(),
        ..StubGateway::default()
    }
}

#[tokio::test]
async fn store_then_mint_passes_hashes_in_order_with_fetched_price() {
    let mut flow = MintFlow::new(priced_stub(None));
    flow.connect().await.unwrap();
    flow.refresh_status().await.unwrap();
    assert_eq!(flow.status().phase, SalePhase::Phase2);

    let traits = nine_trait_set();
    flow.store_records(&traits).await.unwrap();

    let expected: Vec<_> = (1..=REQUIRED_RECORD_COUNT).map(stub_hash).collect();
    assert_eq!(flow.record_hashes(), expected.as_slice());
    assert!(flow.mint_ready());

    flow.mint().await.unwrap();

    let minted = flow.gateway().minted.lock().unwrap().clone().unwrap();
    assert_eq!(minted.0, expected);
    assert_eq!(minted.1, one_ether());
}

#[tokio::test]
async fn stored_payloads_follow_trait_set_order() {
    let mut flow = MintFlow::new(priced_stub(None));
    flow.connect().await.unwrap();

    let traits = nine_trait_set();
    flow.store_records(&traits).await.unwrap();

    let stored = flow.gateway().stored.lock().unwrap().clone();
    let expected: Vec<Vec<u8>> = traits
        .non_empty()
        .map(|(_, payload)| hex::decode(payload).unwrap())
        .collect();
    assert_eq!(stored.len(), expected.len());
    for (got, want) in stored.iter().zip(&expected) {
        assert_eq!(got.as_ref(), want.as_slice());
    }
}

#[tokio::test]
async fn fifth_submission_failure_keeps_first_four_hashes() {
    let mut flow = MintFlow::new(priced_stub(Some(5)));
    flow.connect().await.unwrap();
    flow.refresh_status().await.unwrap();

    let err = flow.store_records(&nine_trait_set()).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Chain(_)));

    // Partial progress retained, nothing rolled back.
    let expected: Vec<_> = (1..=4).map(stub_hash).collect();
    assert_eq!(flow.record_hashes(), expected.as_slice());

    // The workflow freed its state...
    assert_eq!(flow.state(), FlowState::Idle);

    // ...but minting stays disabled: 4 != 9, and the gate is never called.
    assert!(!flow.mint_ready());
    let err = flow.mint().await.unwrap_err();
    assert!(matches!(
        err,
        WorkflowError::RecordCount {
            expected: REQUIRED_RECORD_COUNT,
            actual: 4
        }
    ));
    assert_eq!(*flow.gateway().mint_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn rerun_after_failure_restarts_from_scratch() {
    let mut flow = MintFlow::new(priced_stub(Some(3)));
    flow.connect().await.unwrap();

    let traits = nine_trait_set();
    flow.store_records(&traits).await.unwrap_err();
    assert_eq!(flow.record_hashes().len(), 2);

    // The stub only fails once, so a re-run completes — and re-submits
    // every payload, including the two already inscribed (the documented
    // duplicate-record gap).
    flow.store_records(&traits).await.unwrap();
    assert_eq!(flow.record_hashes().len(), REQUIRED_RECORD_COUNT);
    assert_eq!(
        flow.gateway().stored.lock().unwrap().len(),
        2 + REQUIRED_RECORD_COUNT
    );
}

#[tokio::test]
async fn store_state_resets_on_success_and_failure() {
    let mut ok_flow = MintFlow::new(priced_stub(None));
    ok_flow.connect().await.unwrap();
    ok_flow.store_records(&nine_trait_set()).await.unwrap();
    assert_eq!(ok_flow.state(), FlowState::Idle);

    let mut failing_flow = MintFlow::new(priced_stub(Some(1)));
    failing_flow.connect().await.unwrap();
    failing_flow
        .store_records(&nine_trait_set())
        .await
        .unwrap_err();
    assert_eq!(failing_flow.state(), FlowState::Idle);
}

#[tokio::test]
async fn mint_without_status_refresh_sends_zero_value() {
    // The session default price is zero; mint still goes through and the
    // gate sees a zero-value call (the chain would reject an underpaid
    // phase, which is the contract's decision, not the client's).
    let mut flow = MintFlow::new(priced_stub(None));
    flow.connect().await.unwrap();
    flow.store_records(&nine_trait_set()).await.unwrap();
    flow.mint().await.unwrap();

    let minted = flow.gateway().minted.lock().unwrap().clone().unwrap();
    assert_eq!(minted.1, U256::ZERO);
}
