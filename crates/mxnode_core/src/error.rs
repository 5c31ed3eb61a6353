//! Setter error types.

use thiserror::Error;

/// Result type for node value operations.
pub type SetResult<T> = Result<T, SetError>;

/// Errors returned by node value setters.
///
/// Every rejection cause (absent node, kind mismatch after auto-descent)
/// maps to the same variant. Callers that need the reason should inspect
/// the node kind beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// The node is absent or does not hold the targeted kind.
    #[error("Operation not applicable to node")]
    Inapplicable,
}
