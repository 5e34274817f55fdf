//! # repute-core
//! Foundation types, errors, and the reputation aggregation store for the
//! Repute rating ledger.

pub mod constants;
pub mod error;
pub mod store;
pub mod traits;
pub mod types;
