//! Ledger node composition.
//!
//! The [`Node`] owns the one authoritative [`MemoryReputationStore`] and the
//! ledger height behind a single `RwLock`. Every submission runs under the
//! write guard, so submissions are applied one at a time in the order they
//! acquire the lock and no two can interleave the read-modify-write of a
//! provider's aggregate. Queries take the read guard.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use repute_core::error::ReputeError;
use repute_core::store::MemoryReputationStore;
use repute_core::traits::ReputationLedger;
use repute_core::types::{Principal, RatingRecord, RatingSubmission, ReputationAggregate, ServiceId};

use crate::config::NodeConfig;

/// Store plus the height the next accepted rating will be stamped with.
#[derive(Debug)]
struct LedgerState {
    store: MemoryReputationStore,
    height: u64,
}

/// Snapshot of node-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    /// Height the next accepted rating will be recorded at.
    pub height: u64,
    /// Providers with at least one rating.
    pub providers: usize,
    /// Rated service ids.
    pub ratings: usize,
}

/// The ledger node.
#[derive(Debug)]
pub struct Node {
    state: RwLock<LedgerState>,
}

impl Node {
    /// Create a node with an empty store starting at `config.start_height`.
    pub fn new(config: &NodeConfig) -> Arc<Self> {
        debug!(start_height = config.start_height, "initializing ledger");
        Arc::new(Self {
            state: RwLock::new(LedgerState {
                store: MemoryReputationStore::new(),
                height: config.start_height,
            }),
        })
    }

    /// Record a rating from `rater` for the completed `service_id`.
    ///
    /// The rating is stamped with the current ledger height, which then
    /// advances by one. Returns the height the rating was recorded at.
    /// A rejected rating leaves the store and the height untouched.
    ///
    /// # Errors
    ///
    /// - [`ReputationError::InvalidRating`](repute_core::error::ReputationError::InvalidRating)
    ///   if `rating` is outside `1..=5`
    pub fn rate_service(
        &self,
        service_id: ServiceId,
        provider: Principal,
        rating: i64,
        comment: String,
        rater: Principal,
    ) -> Result<u64, ReputeError> {
        let mut state = self.state.write();
        let height = state.height;

        let submission = RatingSubmission {
            service_id,
            provider: provider.clone(),
            rating,
            comment,
            rater: rater.clone(),
            created_at: height,
        };

        if let Err(e) = state.store.submit_rating(submission) {
            warn!(%service_id, %provider, %rater, rating, code = e.code(), "rating rejected: {e}");
            return Err(e.into());
        }

        state.height = height.saturating_add(1);
        let aggregate = state.store.get_reputation(&provider);
        info!(
            %service_id,
            %provider,
            %rater,
            rating,
            height,
            average = aggregate.average_rating,
            count = aggregate.rating_count,
            "rating recorded"
        );
        Ok(height)
    }

    /// Reputation of `user`; the zero aggregate if never rated.
    pub fn get_reputation(&self, user: &Principal) -> ReputationAggregate {
        self.state.read().store.get_reputation(user)
    }

    /// Rating recorded for `service_id`, if any.
    pub fn get_service_rating(&self, service_id: ServiceId) -> Option<RatingRecord> {
        self.state.read().store.get_service_rating(service_id)
    }

    /// Current height and store counters.
    pub fn info(&self) -> NodeInfo {
        let state = self.state.read();
        NodeInfo {
            height: state.height,
            providers: state.store.provider_count(),
            ratings: state.store.rating_count(),
        }
    }
}
