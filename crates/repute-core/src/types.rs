//! Core ledger types: identities, ratings, records, aggregates.
//!
//! Field names serialize in camelCase (`ratedUser`, `createdAt`,
//! `totalRating`, ...) so JSON output lines up with the ledger's tuples.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MAX_RATING, MIN_RATING};
use crate::error::ReputationError;

/// Identifier of a completed service exchange.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ServiceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An opaque ledger identity (a rater or a provider).
///
/// The ledger never inspects the contents; identity checks belong to the
/// caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A star rating in `MIN_RATING..=MAX_RATING`.
///
/// The only constructor is [`Rating::new`], so a `Rating` value is always in
/// range.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Validate a raw rating.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_core::types::Rating;
    /// use repute_core::error::ReputationError;
    ///
    /// assert_eq!(Rating::new(5).unwrap().get(), 5);
    /// assert_eq!(Rating::new(6), Err(ReputationError::InvalidRating { rating: 6 }));
    /// assert_eq!(Rating::new(0), Err(ReputationError::InvalidRating { rating: 0 }));
    /// ```
    pub fn new(rating: i64) -> Result<Self, ReputationError> {
        if rating < MIN_RATING as i64 || rating > MAX_RATING as i64 {
            return Err(ReputationError::InvalidRating { rating });
        }
        Ok(Self(rating as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ReputationError;

    fn try_from(rating: i64) -> Result<Self, Self::Error> {
        Self::new(rating)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored rating for one service exchange.
///
/// Records have no update path; a new submission for the same service id
/// replaces the whole record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub rating: Rating,
    pub comment: String,
    /// Identity that submitted the rating.
    pub rater: Principal,
    /// Provider being rated.
    pub rated_user: Principal,
    /// Ledger height at which the rating was recorded.
    pub created_at: u64,
}

/// Running reputation statistics for one provider.
///
/// # Invariants
///
/// * `rating_count == 0` implies `total_rating == 0` and `average_rating == 0`
/// * `average_rating == total_rating / rating_count` (integer floor) otherwise
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReputationAggregate {
    /// Sum of every rating ever accepted for the provider.
    pub total_rating: u64,
    /// Number of accepted ratings.
    pub rating_count: u64,
    /// `floor(total_rating / rating_count)`.
    pub average_rating: u64,
}

impl ReputationAggregate {
    /// The aggregate of a provider nobody has rated yet: `{0, 0, 0}`.
    pub const ZERO: Self = Self {
        total_rating: 0,
        rating_count: 0,
        average_rating: 0,
    };

    /// Fold one more rating into the running totals.
    ///
    /// The average is recomputed from the totals each time and truncates
    /// toward zero; it is never rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_core::types::{Rating, ReputationAggregate};
    ///
    /// let mut agg = ReputationAggregate::default();
    /// for r in [5, 5, 4] {
    ///     agg.accumulate(Rating::new(r).unwrap());
    /// }
    /// assert_eq!(agg.total_rating, 14);
    /// assert_eq!(agg.rating_count, 3);
    /// assert_eq!(agg.average_rating, 4);
    /// ```
    pub fn accumulate(&mut self, rating: Rating) {
        self.total_rating = self.total_rating.saturating_add(rating.get() as u64);
        self.rating_count = self.rating_count.saturating_add(1);
        self.average_rating = self.total_rating / self.rating_count;
    }

    /// Whether no rating has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.rating_count == 0
    }
}

/// Input to [`ReputationLedger::submit_rating`](crate::traits::ReputationLedger::submit_rating).
///
/// `rating` is the raw, unvalidated value; `rater` and `created_at` are
/// supplied by the caller rather than derived by the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RatingSubmission {
    pub service_id: ServiceId,
    pub provider: Principal,
    pub rating: i64,
    pub comment: String,
    pub rater: Principal,
    pub created_at: u64,
}
