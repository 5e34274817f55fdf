//! repute-cli — Command-line client for a Repute ledger node.
//!
//! Submits service ratings and queries reputations over JSON-RPC. Results are
//! printed as pretty JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde_json::Value;

use repute_core::constants::DEFAULT_RPC_ENDPOINT;

/// Repute command-line client.
#[derive(Parser)]
#[command(name = "repute-cli")]
#[command(version, about = "Rate completed services and query provider reputation.")]
struct Cli {
    /// RPC endpoint URL.
    #[arg(short, long, global = true, default_value = DEFAULT_RPC_ENDPOINT)]
    rpc_endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate a completed service.
    Rate(RateArgs),
    /// Show a provider's reputation aggregate.
    Reputation {
        /// Provider identity.
        user: String,
    },
    /// Show the rating recorded for a service.
    Rating {
        /// Service id.
        service_id: u64,
    },
    /// Show node status.
    Info,
}

#[derive(Args)]
struct RateArgs {
    /// Service id of the completed exchange.
    #[arg(short, long)]
    service_id: u64,

    /// Provider being rated.
    #[arg(short, long)]
    provider: String,

    /// Rating from 1 to 5.
    #[arg(short = 'R', long, allow_negative_numbers = true)]
    rating: i64,

    /// Free-form comment.
    #[arg(short, long, default_value = "")]
    comment: String,

    /// Identity submitting the rating.
    #[arg(long)]
    rater: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = HttpClientBuilder::default()
        .build(&cli.rpc_endpoint)
        .context("Failed to connect to RPC")?;

    let (method, params) = build_request(cli.command)?;
    tracing::debug!(method, endpoint = %cli.rpc_endpoint, "sending request");

    let result: Value = call(&client, method, params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Map a subcommand onto its RPC method name and positional params.
fn build_request(command: Commands) -> Result<(&'static str, ArrayParams)> {
    let mut params = ArrayParams::new();
    let method = match command {
        Commands::Rate(args) => {
            params.insert(args.service_id)?;
            params.insert(args.provider)?;
            params.insert(args.rating)?;
            params.insert(args.comment)?;
            params.insert(args.rater)?;
            "rate-service"
        }
        Commands::Reputation { user } => {
            params.insert(user)?;
            "get-reputation"
        }
        Commands::Rating { service_id } => {
            params.insert(service_id)?;
            "get-service-rating"
        }
        Commands::Info => "getinfo",
    };
    Ok((method, params))
}

async fn call(client: &HttpClient, method: &str, params: ArrayParams) -> Result<Value> {
    client
        .request(method, params)
        .await
        .with_context(|| format!("RPC {method} failed"))
}
