//! mintflow — command-line driver for the store-and-mint workflow.
//!
//! # Architecture Overview
//!
//! ```text
//!   traits.json ──▶ artwork (decode, preview)
//!                      │
//!                      ▼
//!   config.toml ──▶ workflow::MintFlow ──▶ workflow::EvmGateway
//!                      │                        │
//!                      │                        ▼
//!                      │                 blockchain (wallet, client, tx)
//!                      ▼                        │
//!                 contract::status ◀────────────┘ JSON-RPC endpoint
//! ```
//!
//! Commands map onto the page actions of the original flow: `status`
//! (contract state + saved traits), `preview` (decoded SVGs), `store`
//! (one confirmed ledger record per trait), `mint` (final call referencing
//! the records), and `run` (store then mint in one session).

use std::path::PathBuf;
use std::process::ExitCode;

use alloy::primitives::TxHash;
use clap::{Parser, Subcommand};

use mintflow::artwork::{build_previews, TraitSet, ZlibSvgDecoder};
use mintflow::blockchain::client::ChainClient;
use mintflow::blockchain::types::ChainError;
use mintflow::blockchain::wallet::Wallet;
use mintflow::config::loader::load_config;
use mintflow::config::MintFlowConfig;
use mintflow::observability::{logging, metrics};
use mintflow::{EvmGateway, MintFlow, WorkflowError, REQUIRED_RECORD_COUNT};

#[derive(Parser)]
#[command(name = "mintflow")]
#[command(about = "Store trait ethscriptions and mint the token referencing them", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "mintflow.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show contract sale status and the loaded trait set
    Status,
    /// Decode trait payloads and print the SVG previews
    Preview,
    /// Write each trait payload as a confirmed ledger record
    Store,
    /// Mint using record hashes from an earlier store run
    Mint {
        /// The stored record transaction hashes, in store order
        #[arg(required = true)]
        hashes: Vec<String>,
    },
    /// Store all records, then mint, in one session
    Run,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(notice) => {
            eprintln!("{notice}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli.config)
        .map_err(|e| format!("Configuration error ({}): {e}", cli.config.display()))?;

    logging::init(&config.observability.log_level);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let traits = TraitSet::load(config.traits.path.as_ref())
        .map_err(|e| format!("Failed to load traits from {}: {e}", config.traits.path))?;

    match cli.command {
        Commands::Status => status(&config, &traits).await,
        Commands::Preview => preview(&traits).await,
        Commands::Store => store(&config, &traits).await,
        Commands::Mint { hashes } => mint(&config, &hashes).await,
        Commands::Run => store_and_mint(&config, &traits).await,
    }
}

/// Build the session driver from configuration and the environment wallet.
fn build_flow(config: &MintFlowConfig) -> Result<MintFlow<EvmGateway>, String> {
    let wallet = Wallet::from_env(config.chain.chain_id).map_err(|e| match e {
        ChainError::Wallet(msg) => format!("No signing wallet available: {msg}"),
        other => format!("Failed to set up the wallet: {other}"),
    })?;
    let client = ChainClient::new(config.chain.clone(), &wallet)
        .map_err(|e| format!("Failed to set up the chain client: {e}"))?;
    let gateway = EvmGateway::new(client, wallet, &config.contract.address)
        .map_err(|e| format!("Error: {e}. Please check your configuration."))?;
    Ok(MintFlow::new(gateway))
}

async fn status(config: &MintFlowConfig, traits: &TraitSet) -> Result<(), String> {
    let mut flow = build_flow(config)?;
    let status = flow.refresh_status().await.map_err(|e| {
        format!("Failed to fetch contract status: {e}. Ensure the contract is deployed and accessible.")
    })?;

    println!("Current phase:   {}", status.phase);
    println!("Mint price:      {} ETH", status.mint_price_eth);
    println!(
        "Contract paused: {}",
        match status.paused {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "Unknown",
        }
    );

    println!("\nSaved traits:");
    for entry in traits.entries() {
        match entry.data.as_deref().filter(|d| !d.is_empty()) {
            Some(data) => println!("  {}: {} bytes of payload", capitalize(&entry.name), data.len() / 2),
            None => println!("  {}: no value", capitalize(&entry.name)),
        }
    }
    Ok(())
}

async fn preview(traits: &TraitSet) -> Result<(), String> {
    let previews = build_previews(traits, &ZlibSvgDecoder).await;
    if previews.is_empty() {
        println!("No decodable trait payloads.");
        return Ok(());
    }
    for (name, svg) in &previews {
        println!("=== {} ===", capitalize(name));
        println!("{svg}");
    }
    Ok(())
}

async fn store(config: &MintFlowConfig, traits: &TraitSet) -> Result<(), String> {
    let mut flow = build_flow(config)?;
    flow.connect().await.map_err(connect_notice)?;

    let result = flow.store_records(traits).await;
    print_hashes(flow.record_hashes());

    match result {
        Ok(()) => {
            println!("Ethscriptions stored successfully!");
            Ok(())
        }
        Err(e) => Err(format!("Failed to store ethscriptions: {e}")),
    }
}

async fn mint(config: &MintFlowConfig, hashes: &[String]) -> Result<(), String> {
    let parsed: Vec<TxHash> = hashes
        .iter()
        .map(|h| h.parse())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Invalid record hash: {e}"))?;

    let mut flow = build_flow(config)?;
    flow.connect().await.map_err(connect_notice)?;
    flow.refresh_status().await.map_err(|e| {
        format!("Failed to fetch contract status: {e}. Ensure the contract is deployed and accessible.")
    })?;
    flow.resume_with_hashes(parsed);

    match flow.mint().await {
        Ok(hash) => {
            println!("Token minted successfully! Transaction: {hash}");
            Ok(())
        }
        Err(e) => Err(mint_notice(&e)),
    }
}

async fn store_and_mint(config: &MintFlowConfig, traits: &TraitSet) -> Result<(), String> {
    let mut flow = build_flow(config)?;
    flow.connect().await.map_err(connect_notice)?;
    flow.refresh_status().await.map_err(|e| {
        format!("Failed to fetch contract status: {e}. Ensure the contract is deployed and accessible.")
    })?;

    let result = flow.store_records(traits).await;
    print_hashes(flow.record_hashes());
    result.map_err(|e| format!("Failed to store ethscriptions: {e}"))?;
    println!("Ethscriptions stored successfully!");

    match flow.mint().await {
        Ok(hash) => {
            println!("Token minted successfully! Transaction: {hash}");
            Ok(())
        }
        Err(e) => Err(mint_notice(&e)),
    }
}

fn print_hashes(hashes: &[TxHash]) {
    if hashes.is_empty() {
        return;
    }
    println!("Ethscription hashes:");
    for hash in hashes {
        println!("  {hash}");
    }
}

/// Wallet-session failures share one phrasing so every command reads alike.
fn connect_notice(e: WorkflowError) -> String {
    match e {
        WorkflowError::Chain(ChainError::Wallet(msg)) => {
            format!("No signing wallet available: {msg}")
        }
        other => format!("Failed to connect the wallet session: {other}. Please try again."),
    }
}

/// Mint failures distinguish an on-chain revert from everything else.
fn mint_notice(e: &WorkflowError) -> String {
    match e {
        WorkflowError::RecordCount { actual, .. } => format!(
            "Please ensure all {REQUIRED_RECORD_COUNT} ethscriptions are stored before minting (have {actual})."
        ),
        WorkflowError::Chain(ChainError::Reverted(_)) => {
            "Minting failed: the contract reverted the call. Ensure the contract is deployed and the interface matches.".to_string()
        }
        other => format!("Minting failed: {other}"),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
