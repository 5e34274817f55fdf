//! Trait interfaces for the Repute ledger.
//!
//! - [`ReputationLedger`] — rating submission and reputation queries
//!   ([`MemoryReputationStore`](crate::store::MemoryReputationStore)
//!   implements; repute-node wraps it behind a lock)

use crate::error::ReputationError;
use crate::types::{Principal, RatingRecord, RatingSubmission, ReputationAggregate, ServiceId};

/// Per-service rating records and per-provider reputation aggregates.
///
/// Assumes the caller has already established that the service exchange was
/// completed by the provider for the rater; the ledger only checks the rating
/// range.
pub trait ReputationLedger: Send + Sync {
    /// Validate and record a rating, then fold it into the provider's
    /// aggregate.
    ///
    /// All-or-nothing: on error neither the record map nor the aggregate map
    /// is touched. A second submission for an already-rated service id
    /// replaces the record and is counted again in the aggregate.
    ///
    /// # Errors
    ///
    /// - [`ReputationError::InvalidRating`] if `rating` is outside `1..=5`
    fn submit_rating(&mut self, submission: RatingSubmission) -> Result<(), ReputationError>;

    /// Reputation of `user`, or [`ReputationAggregate::ZERO`] if never rated.
    fn get_reputation(&self, user: &Principal) -> ReputationAggregate;

    /// Rating recorded for `service_id`. Returns `None` if not rated.
    fn get_service_rating(&self, service_id: ServiceId) -> Option<RatingRecord>;

    /// Number of providers with at least one accepted rating.
    fn provider_count(&self) -> usize;

    /// Number of distinct rated service ids.
    fn rating_count(&self) -> usize;

    /// Whether nothing has been rated.
    ///
    /// Default implementation: `rating_count() == 0`.
    fn is_empty(&self) -> bool {
        self.rating_count() == 0
    }
}
