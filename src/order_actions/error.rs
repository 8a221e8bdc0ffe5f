//! Error types for the order action creators.

use thiserror::Error;

/// Errors that can occur while producing order actions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderActionError {
    /// The checkout backend refused or failed the request.
    #[error("Order request failed: {0}")]
    RequestFailed(String),

    /// The request payload was rejected before it was sent.
    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    /// The backend answered but the response did not describe a usable order.
    #[error("Unexpected order response: {0}")]
    UnexpectedResponse(String),
}
