//! Headless ethscription-and-mint client library.

pub mod artwork;
pub mod blockchain;
pub mod config;
pub mod contract;
pub mod observability;
pub mod workflow;

pub use config::schema::MintFlowConfig;
pub use workflow::gateway::{EvmGateway, LedgerGateway};
pub use workflow::{MintFlow, WorkflowError, REQUIRED_RECORD_COUNT};
