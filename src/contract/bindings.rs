//! Typed interface of the deployed mint gate.
//!
//! The contract is pre-deployed and its ABI is fixed; only the entry points
//! this client touches are declared.

use alloy::sol;

sol! {
    interface IMintGate {
        /// Index into the fixed sale phase list.
        function currentPhase() external view returns (uint8);

        /// Per-phase pricing; only the mint price is consumed here.
        function phaseDetails(uint8 phase) external view returns (uint256 mintPrice);

        function paused() external view returns (bool);

        /// Mints one token referencing the given ledger record hashes.
        function mint(bytes32[] calldata recordHashes) external payable;
    }
}
