//! # repute-node — Ledger node, configuration, JSON-RPC.
//!
//! Composes the Repute ledger into a running node:
//! - [`node::Node`] — the authoritative store and ledger height behind one lock
//! - [`rpc`] — JSON-RPC server for external access
//! - [`config::NodeConfig`] — node configuration

pub mod config;
pub mod node;
pub mod rpc;

pub use config::NodeConfig;
pub use node::{Node, NodeInfo};
pub use rpc::start_rpc_server;
