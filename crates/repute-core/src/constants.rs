//! Protocol constants for the rating ledger.

/// Lowest rating a rater may give.
pub const MIN_RATING: u8 = 1;

/// Highest rating a rater may give.
pub const MAX_RATING: u8 = 5;

/// Error code reported for an out-of-range rating.
///
/// Matches the ledger's `err-invalid-rating` response (`u4`), so RPC clients
/// see the same code the contract returned.
pub const ERR_INVALID_RATING: u32 = 4;

/// Default TCP port for the node's JSON-RPC server.
pub const DEFAULT_RPC_PORT: u16 = 18432;

/// Default RPC endpoint used by the command-line client.
///
/// # Examples
///
/// ```
/// use repute_core::constants::{DEFAULT_RPC_ENDPOINT, DEFAULT_RPC_PORT};
/// assert!(DEFAULT_RPC_ENDPOINT.ends_with(&DEFAULT_RPC_PORT.to_string()));
/// ```
pub const DEFAULT_RPC_ENDPOINT: &str = "http://127.0.0.1:18432";
