//! Cross-crate scenario tests for Repute.
//!
//! Exercises the store and the node together the way a ledger client would:
//! rate, read back, aggregate.

pub mod helpers;
