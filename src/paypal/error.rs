//! Error types for the PayPal client library.

use thiserror::Error;

/// Errors reported by the PayPal SDK itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaypalError {
    #[error("PayPal setup failed: {0}")]
    Setup(String),

    #[error("PayPal checkout flow failed: {0}")]
    Flow(String),
}

/// Errors raised while loading the hosted PayPal script.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScriptLoadError {
    #[error("Unable to load script {url}: {reason}")]
    Failed { url: String, reason: String },

    /// The script loaded but did not expose the SDK object.
    #[error("Script {0} loaded without exposing the PayPal SDK")]
    SdkUnavailable(String),
}
