//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, multiplier sane)
//! - Check the contract address parses when one is given
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MintFlowConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::MintFlowConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("chain.rpc_url must not be empty")]
    EmptyRpcUrl,

    #[error("chain.rpc_url is not a valid URL: {0}")]
    BadRpcUrl(String),

    #[error("chain.chain_id must not be zero")]
    ZeroChainId,

    #[error("chain.rpc_timeout_secs must be greater than zero")]
    ZeroRpcTimeout,

    #[error("chain.confirmation_timeout_secs must be greater than zero")]
    ZeroConfirmationTimeout,

    #[error("chain.gas_price_multiplier must be at least 1.0, got {0}")]
    BadGasMultiplier(f64),

    #[error("chain.max_gas_price_gwei must be greater than zero")]
    ZeroGasCap,

    #[error("contract.address is not a valid address: {0}")]
    BadContractAddress(String),

    #[error("traits.path must not be empty")]
    EmptyTraitsPath,
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &MintFlowConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.rpc_url.is_empty() {
        errors.push(ValidationError::EmptyRpcUrl);
    } else if config.chain.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::BadRpcUrl(config.chain.rpc_url.clone()));
    }

    if config.chain.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }
    if config.chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConfirmationTimeout);
    }
    if config.chain.gas_price_multiplier < 1.0 {
        errors.push(ValidationError::BadGasMultiplier(
            config.chain.gas_price_multiplier,
        ));
    }
    if config.chain.max_gas_price_gwei == 0 {
        errors.push(ValidationError::ZeroGasCap);
    }

    // An empty address is legal (status/mint fail fast at runtime); a
    // non-empty one must at least parse.
    if !config.contract.address.is_empty() && config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::BadContractAddress(
            config.contract.address.clone(),
        ));
    }

    if config.traits.path.is_empty() {
        errors.push(ValidationError::EmptyTraitsPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
