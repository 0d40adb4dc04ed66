//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variables (private key) + config (RPC URLs)
//!     → wallet.rs (key loading, nonce management)
//!     → client.rs (RPC connection with timeouts and failover)
//!     → transaction.rs (build, broadcast, confirm)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainConfig, ChainError, ChainId};
pub use wallet::Wallet;
