//! Node configuration for the Repute ledger node.
//!
//! Provides [`NodeConfig`] with defaults for RPC binding, the starting
//! ledger height, and log level. Defaults can be overlaid from `REPUTE_*`
//! environment variables with [`NodeConfig::from_env`]; command-line flags in
//! the `repute-node` binary override both.

use repute_core::constants::DEFAULT_RPC_PORT;
use repute_core::error::ReputeError;

/// Environment variable overriding [`NodeConfig::rpc_bind`].
pub const ENV_RPC_BIND: &str = "REPUTE_RPC_BIND";
/// Environment variable overriding [`NodeConfig::rpc_port`].
pub const ENV_RPC_PORT: &str = "REPUTE_RPC_PORT";
/// Environment variable overriding [`NodeConfig::start_height`].
pub const ENV_START_HEIGHT: &str = "REPUTE_START_HEIGHT";
/// Environment variable overriding [`NodeConfig::log_level`].
pub const ENV_LOG_LEVEL: &str = "REPUTE_LOG_LEVEL";

/// Configuration for a ledger node instance.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// IP address for the JSON-RPC server to bind to.
    pub rpc_bind: String,
    /// Port for the JSON-RPC server.
    pub rpc_port: u16,
    /// Ledger height stamped on the first accepted rating.
    pub start_height: u64,
    /// Log level filter string (e.g. "info", "debug", "repute_node_lib=trace").
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            rpc_bind: "127.0.0.1".to_string(),
            rpc_port: DEFAULT_RPC_PORT,
            start_height: 0,
            log_level: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Defaults overlaid with any `REPUTE_*` environment variables.
    pub fn from_env() -> Result<Self, ReputeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    ///
    /// Unset keys keep their defaults; set keys that fail to parse are an
    /// error rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReputeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(bind) = lookup(ENV_RPC_BIND) {
            cfg.rpc_bind = bind;
        }
        if let Some(port) = lookup(ENV_RPC_PORT) {
            cfg.rpc_port = port
                .parse()
                .map_err(|_| ReputeError::Config(format!("{ENV_RPC_PORT} must be a port number")))?;
        }
        if let Some(height) = lookup(ENV_START_HEIGHT) {
            cfg.start_height = height.parse().map_err(|_| {
                ReputeError::Config(format!("{ENV_START_HEIGHT} must be a non-negative integer"))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            cfg.log_level = level;
        }

        Ok(cfg)
    }

    /// Socket address string for the RPC server.
    pub fn rpc_addr(&self) -> String {
        format!("{}:{}", self.rpc_bind, self.rpc_port)
    }
}
