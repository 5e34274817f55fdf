//! Shared test helpers for scenario tests.

use repute_core::types::{Principal, RatingSubmission, ServiceId};

/// Provider identity used across scenarios.
pub const PROVIDER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

/// Rater identity used across scenarios.
pub const RATER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// An identity nobody has rated.
pub const STRANGER: &str = "ST3YFXPS524JJMM6N74VACP94SNZX1QZHJNPYG5D7";

/// Build a submission from [`RATER`] at the given height.
pub fn make_submission(
    service_id: u64,
    provider: &str,
    rating: i64,
    comment: &str,
    created_at: u64,
) -> RatingSubmission {
    RatingSubmission {
        service_id: ServiceId(service_id),
        provider: Principal::from(provider),
        rating,
        comment: comment.to_string(),
        rater: Principal::from(RATER),
        created_at,
    }
}

/// Expected floor-average of a slice of ratings (0 for an empty slice).
pub fn floor_average(ratings: &[i64]) -> u64 {
    if ratings.is_empty() {
        return 0;
    }
    ratings.iter().sum::<i64>() as u64 / ratings.len() as u64
}
