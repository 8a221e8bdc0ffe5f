use crate::paypal::PaypalError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Button element the in-context flow attaches to.
pub const DEFAULT_BUTTON_ID: &str = "paypal-button";

/// Capability interface over the `paypal.checkout` object a loaded script provides.
///
/// All calls may complete asynchronously; callers must not assume the provider
/// has finished its own work when a call returns.
#[async_trait]
pub trait PaypalSdk: Send + Sync {
    /// Binds the merchant account and checkout button.
    async fn setup(&self, merchant_id: &str, options: &PaypalSetupOptions)
        -> Result<(), PaypalError>;

    /// Opens the in-context overlay ahead of `start_flow`.
    async fn init_xo(&self) -> Result<(), PaypalError>;

    /// Starts the checkout flow towards `url` inside the overlay.
    async fn start_flow(&self, url: &str) -> Result<(), PaypalError>;

    /// Tears down any open overlay.
    async fn close_flow(&self) -> Result<(), PaypalError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaypalEnvironment {
    #[default]
    Production,
    Sandbox,
}

impl fmt::Display for PaypalEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaypalEnvironment::Production => write!(f, "production"),
            PaypalEnvironment::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Options passed to [`PaypalSdk::setup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalSetupOptions {
    pub button: String,
    pub environment: PaypalEnvironment,
}

impl Default for PaypalSetupOptions {
    fn default() -> Self {
        Self {
            button: DEFAULT_BUTTON_ID.to_string(),
            environment: PaypalEnvironment::Production,
        }
    }
}
