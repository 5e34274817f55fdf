//! In-memory reputation store.
//!
//! [`MemoryReputationStore`] keeps the two ledger maps (service id → rating
//! record, provider → aggregate) in `HashMap`s. Nothing is persisted.
//!
//! Not thread-safe on its own: submissions need `&mut self`, so callers that
//! share a store wrap it in a `Mutex` or `RwLock`. Holding the write guard for
//! the whole of [`submit_rating`](ReputationLedger::submit_rating) is what
//! keeps two submissions for one provider from losing an update.

use std::collections::HashMap;

use crate::error::ReputationError;
use crate::traits::ReputationLedger;
use crate::types::{
    Principal, Rating, RatingRecord, RatingSubmission, ReputationAggregate, ServiceId,
};

/// In-memory rating ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryReputationStore {
    /// Rating records: service id → record.
    service_ratings: HashMap<ServiceId, RatingRecord>,
    /// Provider reputation: provider → aggregate.
    user_ratings: HashMap<Principal, ReputationAggregate>,
}

impl MemoryReputationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReputationLedger for MemoryReputationStore {
    fn submit_rating(&mut self, submission: RatingSubmission) -> Result<(), ReputationError> {
        // Validate before touching either map.
        let rating = Rating::new(submission.rating)?;

        self.service_ratings.insert(
            submission.service_id,
            RatingRecord {
                rating,
                comment: submission.comment,
                rater: submission.rater,
                rated_user: submission.provider.clone(),
                created_at: submission.created_at,
            },
        );

        self.user_ratings
            .entry(submission.provider)
            .or_default()
            .accumulate(rating);

        Ok(())
    }

    fn get_reputation(&self, user: &Principal) -> ReputationAggregate {
        self.user_ratings
            .get(user)
            .copied()
            .unwrap_or(ReputationAggregate::ZERO)
    }

    fn get_service_rating(&self, service_id: ServiceId) -> Option<RatingRecord> {
        self.service_ratings.get(&service_id).cloned()
    }

    fn provider_count(&self) -> usize {
        self.user_ratings.len()
    }

    fn rating_count(&self) -> usize {
        self.service_ratings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PROVIDER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
    const RATER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

    fn submission(service_id: u64, provider: &str, rating: i64, comment: &str) -> RatingSubmission {
        RatingSubmission {
            service_id: ServiceId(service_id),
            provider: Principal::from(provider),
            rating,
            comment: comment.to_string(),
            rater: Principal::from(RATER),
            created_at: 123,
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = MemoryReputationStore::new();
        assert!(store.is_empty());
        assert_eq!(store.provider_count(), 0);
        assert_eq!(store.rating_count(), 0);
    }

    #[test]
    fn rate_service_provider_stores_record() {
        let mut store = MemoryReputationStore::new();
        store
            .submit_rating(submission(0, PROVIDER, 5, "Excellent service, very professional"))
            .unwrap();

        let record = store.get_service_rating(ServiceId(0)).unwrap();
        assert_eq!(
            record,
            RatingRecord {
                rating: Rating::new(5).unwrap(),
                comment: "Excellent service, very professional".into(),
                rater: Principal::from(RATER),
                rated_user: Principal::from(PROVIDER),
                created_at: 123,
            }
        );
    }

    #[test]
    fn average_of_five_four_three_is_four() {
        let mut store = MemoryReputationStore::new();
        store.submit_rating(submission(0, PROVIDER, 5, "Excellent")).unwrap();
        store.submit_rating(submission(1, PROVIDER, 4, "Very good")).unwrap();
        store.submit_rating(submission(2, PROVIDER, 3, "Good")).unwrap();

        assert_eq!(
            store.get_reputation(&Principal::from(PROVIDER)),
            ReputationAggregate {
                total_rating: 12,
                rating_count: 3,
                average_rating: 4,
            }
        );
    }

    #[test]
    fn average_of_five_five_four_floors_to_four() {
        let mut store = MemoryReputationStore::new();
        for (id, r) in [(0, 5), (1, 5), (2, 4)] {
            store.submit_rating(submission(id, PROVIDER, r, "")).unwrap();
        }
        let rep = store.get_reputation(&Principal::from(PROVIDER));
        assert_eq!(rep.total_rating, 14);
        assert_eq!(rep.rating_count, 3);
        assert_eq!(rep.average_rating, 4);
    }

    #[test]
    fn reject_invalid_rating_stores_nothing() {
        let mut store = MemoryReputationStore::new();
        let err = store
            .submit_rating(submission(0, PROVIDER, 6, "Too many stars"))
            .unwrap_err();
        assert_eq!(err, ReputationError::InvalidRating { rating: 6 });
        assert_eq!(err.code(), 4);
        assert!(store.get_service_rating(ServiceId(0)).is_none());
        assert_eq!(
            store.get_reputation(&Principal::from(PROVIDER)),
            ReputationAggregate::ZERO
        );
        assert!(store.is_empty());
        assert_eq!(store.provider_count(), 0);
    }

    #[test]
    fn invalid_rating_leaves_existing_state_untouched() {
        let mut store = MemoryReputationStore::new();
        store.submit_rating(submission(0, PROVIDER, 4, "ok")).unwrap();
        let before_record = store.get_service_rating(ServiceId(0));
        let before_rep = store.get_reputation(&Principal::from(PROVIDER));

        for bad in [0, -1, 6] {
            assert!(store.submit_rating(submission(0, PROVIDER, bad, "bad")).is_err());
        }

        assert_eq!(store.get_service_rating(ServiceId(0)), before_record);
        assert_eq!(store.get_reputation(&Principal::from(PROVIDER)), before_rep);
    }

    #[test]
    fn unknown_user_has_zero_reputation() {
        let store = MemoryReputationStore::new();
        let rep = store.get_reputation(&Principal::from("ST3YFXPS524JJMM6N74VACP94SNZX1QZHJNPYG5D7"));
        assert_eq!(rep, ReputationAggregate::ZERO);
    }

    #[test]
    fn unknown_service_has_no_rating() {
        let store = MemoryReputationStore::new();
        assert!(store.get_service_rating(ServiceId(99)).is_none());
    }

    #[test]
    fn providers_are_tracked_independently() {
        let mut store = MemoryReputationStore::new();
        store.submit_rating(submission(0, "alice", 5, "")).unwrap();
        store.submit_rating(submission(1, "bob", 1, "")).unwrap();
        store.submit_rating(submission(2, "bob", 2, "")).unwrap();

        assert_eq!(store.get_reputation(&Principal::from("alice")).average_rating, 5);
        let bob = store.get_reputation(&Principal::from("bob"));
        assert_eq!(bob.total_rating, 3);
        assert_eq!(bob.average_rating, 1);
        assert_eq!(store.provider_count(), 2);
        assert_eq!(store.rating_count(), 3);
    }

    #[test]
    fn resubmitting_service_id_replaces_record_and_counts_again() {
        let mut store = MemoryReputationStore::new();
        store.submit_rating(submission(7, PROVIDER, 2, "first")).unwrap();
        store.submit_rating(submission(7, PROVIDER, 5, "second")).unwrap();

        let record = store.get_service_rating(ServiceId(7)).unwrap();
        assert_eq!(record.rating.get(), 5);
        assert_eq!(record.comment, "second");
        assert_eq!(store.rating_count(), 1);

        let rep = store.get_reputation(&Principal::from(PROVIDER));
        assert_eq!(rep.total_rating, 7);
        assert_eq!(rep.rating_count, 2);
        assert_eq!(rep.average_rating, 3);
    }

    #[test]
    fn comment_and_identities_are_not_validated() {
        let mut store = MemoryReputationStore::new();
        let long = "x".repeat(10_000);
        store.submit_rating(submission(0, "", 3, &long)).unwrap();
        let record = store.get_service_rating(ServiceId(0)).unwrap();
        assert_eq!(record.comment.len(), 10_000);
        assert_eq!(record.rated_user.as_str(), "");
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn valid_rating_round_trips_submitted_fields(
            id in any::<u64>(),
            rating in 1i64..=5,
            comment in ".{0,64}",
            height in any::<u64>(),
        ) {
            let mut store = MemoryReputationStore::new();
            let sub = RatingSubmission {
                service_id: ServiceId(id),
                provider: Principal::from(PROVIDER),
                rating,
                comment: comment.clone(),
                rater: Principal::from(RATER),
                created_at: height,
            };
            prop_assert!(store.submit_rating(sub).is_ok());
            let record = store.get_service_rating(ServiceId(id)).unwrap();
            prop_assert_eq!(record.rating.get() as i64, rating);
            prop_assert_eq!(record.comment, comment);
            prop_assert_eq!(record.rater, Principal::from(RATER));
            prop_assert_eq!(record.rated_user, Principal::from(PROVIDER));
            prop_assert_eq!(record.created_at, height);
        }

        #[test]
        fn invalid_rating_never_mutates(
            rating in prop_oneof![i64::MIN..1i64, 6i64..=i64::MAX],
        ) {
            let mut store = MemoryReputationStore::new();
            let result = store.submit_rating(submission(0, PROVIDER, rating, "bad"));
            prop_assert_eq!(result, Err(ReputationError::InvalidRating { rating }));
            prop_assert!(store.is_empty());
            prop_assert_eq!(store.provider_count(), 0);
        }
    }
}
