//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MintFlowConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one file per invocation
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ChainConfig;
pub use schema::ContractConfig;
pub use schema::MintFlowConfig;
pub use schema::ObservabilityConfig;
