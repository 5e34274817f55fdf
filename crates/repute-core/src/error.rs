//! Error types for the Repute ledger.
use thiserror::Error;

use crate::constants::{ERR_INVALID_RATING, MAX_RATING, MIN_RATING};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReputationError {
    #[error("invalid rating: {rating} (must be {}..={})", MIN_RATING, MAX_RATING)] InvalidRating { rating: i64 },
}

impl ReputationError {
    /// Numeric code reported to ledger clients.
    ///
    /// # Examples
    ///
    /// ```
    /// use repute_core::error::ReputationError;
    /// assert_eq!(ReputationError::InvalidRating { rating: 6 }.code(), 4);
    /// ```
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidRating { .. } => ERR_INVALID_RATING,
        }
    }
}

#[derive(Error, Debug)]
pub enum ReputeError {
    #[error(transparent)] Reputation(#[from] ReputationError),
    #[error("config: {0}")] Config(String),
    #[error("rpc: {0}")] Rpc(String),
}
