//! Repute ledger node binary.
//!
//! Starts a ledger node holding the rating store in memory and serves the
//! ledger functions over JSON-RPC until Ctrl+C.

use std::process;

use clap::Parser;
use repute_node_lib::{start_rpc_server, Node, NodeConfig};
use tracing::{error, info};

/// Repute ledger node.
#[derive(Parser, Debug)]
#[command(
    name = "repute-node",
    version,
    about = "Service-rating reputation ledger with a JSON-RPC server"
)]
struct Args {
    /// RPC server bind address [env: REPUTE_RPC_BIND, default: 127.0.0.1]
    #[arg(long)]
    rpc_bind: Option<String>,

    /// RPC server port [env: REPUTE_RPC_PORT, default: 18432]
    #[arg(long)]
    rpc_port: Option<u16>,

    /// Ledger height for the first accepted rating [env: REPUTE_START_HEIGHT, default: 0]
    #[arg(long)]
    start_height: Option<u64>,

    /// Log level (trace, debug, info, warn, error) [env: REPUTE_LOG_LEVEL, default: info]
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Apply CLI overrides on top of `base`. Returns the config and log format.
    fn into_config(self, base: NodeConfig) -> (NodeConfig, String) {
        let config = NodeConfig {
            rpc_bind: self.rpc_bind.unwrap_or(base.rpc_bind),
            rpc_port: self.rpc_port.unwrap_or(base.rpc_port),
            start_height: self.start_height.unwrap_or(base.start_height),
            log_level: self.log_level.unwrap_or(base.log_level),
        };
        (config, self.log_format)
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let base = match NodeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            process::exit(2);
        }
    };
    let (config, log_format) = args.into_config(base);

    init_logging(&config.log_level, &log_format);

    info!("Repute Node v{}", env!("CARGO_PKG_VERSION"));
    info!("rpc_addr: {}", config.rpc_addr());
    info!("start_height: {}", config.start_height);

    let node = Node::new(&config);

    let (local_addr, rpc_handle) = match start_rpc_server(&config.rpc_addr(), node).await {
        Ok(started) => started,
        Err(e) => {
            error!("failed to start RPC server: {}", e);
            process::exit(1);
        }
    };
    info!("RPC server listening on {}", local_addr);
    info!("Repute node running (Ctrl+C to stop)");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl+C: {}", e);
    }
    info!("shutdown signal received");

    rpc_handle.stop().ok();
    rpc_handle.stopped().await;
    info!("RPC server stopped");
    info!("Repute node shutdown complete");
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true))
            .init();
    }
}
