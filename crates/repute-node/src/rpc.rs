//! JSON-RPC server for the Repute ledger node.
//!
//! Uses jsonrpsee 0.24 to expose the ledger's public functions under their
//! ledger names (`rate-service`, `get-reputation`, `get-service-rating`) plus
//! a `getinfo` status call.

use std::net::SocketAddr;
use std::sync::Arc;

use jsonrpsee::core::async_trait;
use jsonrpsee::proc_macros::rpc;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use serde::{Deserialize, Serialize};

use repute_core::error::ReputeError;
use repute_core::types::{Principal, RatingRecord, ReputationAggregate, ServiceId};

use crate::node::Node;

/// Generic internal error code.
pub const RPC_INTERNAL_ERROR: i32 = -1;

/// JSON result of a successful `rate-service` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateServiceJson {
    /// Always `true`; failures come back as JSON-RPC errors.
    pub ok: bool,
    /// Ledger height the rating was recorded at.
    pub height: u64,
}

/// JSON representation of node info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfoJson {
    /// Package version of the running node.
    pub version: String,
    /// Height the next accepted rating will be recorded at.
    pub height: u64,
    /// Providers with at least one rating.
    pub providers: usize,
    /// Rated service ids.
    pub ratings: usize,
}

/// Create a JSON-RPC error.
fn rpc_error(code: i32, msg: &str) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code, msg.to_string(), None::<()>)
}

/// Map a ledger error onto a JSON-RPC error.
///
/// Ledger rejections keep their ledger code (`4` for an invalid rating) so
/// clients can match on it.
pub fn to_rpc_error(err: &ReputeError) -> ErrorObjectOwned {
    match err {
        ReputeError::Reputation(e) => rpc_error(e.code() as i32, &e.to_string()),
        other => rpc_error(RPC_INTERNAL_ERROR, &other.to_string()),
    }
}

/// The Repute JSON-RPC interface.
#[rpc(server)]
pub trait ReputeRpc {
    /// Rate a completed service. `rater` is the submitting identity.
    #[method(name = "rate-service")]
    async fn rate_service(
        &self,
        service_id: u64,
        provider: String,
        rating: i64,
        comment: String,
        rater: String,
    ) -> Result<RateServiceJson, ErrorObjectOwned>;

    /// Returns the reputation aggregate of a provider (`{0,0,0}` if unrated).
    #[method(name = "get-reputation")]
    async fn get_reputation(&self, user: String) -> Result<ReputationAggregate, ErrorObjectOwned>;

    /// Returns the rating recorded for a service, or `null`.
    #[method(name = "get-service-rating")]
    async fn get_service_rating(
        &self,
        service_id: u64,
    ) -> Result<Option<RatingRecord>, ErrorObjectOwned>;

    /// Returns general node info.
    #[method(name = "getinfo")]
    async fn get_info(&self) -> Result<NodeInfoJson, ErrorObjectOwned>;
}

/// Implementation of the Repute JSON-RPC server.
pub struct RpcServerImpl {
    node: Arc<Node>,
}

impl RpcServerImpl {
    /// Create a new RPC server implementation wrapping the given node.
    pub fn new(node: Arc<Node>) -> Self {
        Self { node }
    }
}

#[async_trait]
impl ReputeRpcServer for RpcServerImpl {
    async fn rate_service(
        &self,
        service_id: u64,
        provider: String,
        rating: i64,
        comment: String,
        rater: String,
    ) -> Result<RateServiceJson, ErrorObjectOwned> {
        let height = self
            .node
            .rate_service(
                ServiceId(service_id),
                Principal::from(provider),
                rating,
                comment,
                Principal::from(rater),
            )
            .map_err(|e| to_rpc_error(&e))?;
        Ok(RateServiceJson { ok: true, height })
    }

    async fn get_reputation(&self, user: String) -> Result<ReputationAggregate, ErrorObjectOwned> {
        Ok(self.node.get_reputation(&Principal::from(user)))
    }

    async fn get_service_rating(
        &self,
        service_id: u64,
    ) -> Result<Option<RatingRecord>, ErrorObjectOwned> {
        Ok(self.node.get_service_rating(ServiceId(service_id)))
    }

    async fn get_info(&self) -> Result<NodeInfoJson, ErrorObjectOwned> {
        let info = self.node.info();
        Ok(NodeInfoJson {
            version: env!("CARGO_PKG_VERSION").to_string(),
            height: info.height,
            providers: info.providers,
            ratings: info.ratings,
        })
    }
}

/// Start the JSON-RPC server on the given address.
///
/// Returns the bound address (useful with port `0`) and a [`ServerHandle`]
/// that can be used to stop the server.
pub async fn start_rpc_server(
    addr: &str,
    node: Arc<Node>,
) -> Result<(SocketAddr, ServerHandle), ReputeError> {
    let server = Server::builder()
        .build(addr)
        .await
        .map_err(|e| ReputeError::Rpc(format!("RPC server error: {e}")))?;
    let local_addr = server
        .local_addr()
        .map_err(|e| ReputeError::Rpc(format!("RPC local address: {e}")))?;

    let rpc_impl = RpcServerImpl::new(node);
    let handle = server.start(rpc_impl.into_rpc());

    Ok((local_addr, handle))
}
