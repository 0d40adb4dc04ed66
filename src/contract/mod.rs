//! Mint gate contract boundary.
//!
//! # Data Flow
//! ```text
//! bindings.rs (sol!-generated call types)
//!     → workflow::gateway (encode calls, decode returns)
//!     → status.rs (phase mapping, price display)
//! ```

pub mod bindings;
pub mod status;

pub use status::{ContractStatus, SalePhase};
