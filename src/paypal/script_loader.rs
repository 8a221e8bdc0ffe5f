//! # Script Loading
//!
//! The hosted PayPal script attaches its SDK object to a shared namespace once
//! it has run. [`PaypalScriptLoader`] is the only code that reads that
//! namespace: it waits for [`ScriptLoader::load_script`] to complete and then
//! hands the SDK out as an owned handle.

use crate::paypal::{PaypalSdk, ScriptLoadError};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, instrument};

/// Hosted location of the PayPal checkout script.
pub const PAYPAL_SCRIPT_URL: &str = "https://www.paypalobjects.com/api/checkout.min.js";

/// Loads a remote script into the host page.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    async fn load_script(&self, url: &str) -> Result<(), ScriptLoadError>;
}

/// Slot a loaded PayPal script attaches its SDK object to.
#[derive(Clone, Default)]
pub struct PaypalNamespace {
    slot: Arc<RwLock<Option<Arc<dyn PaypalSdk>>>>,
}

impl PaypalNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the script host once the script has run.
    pub fn attach(&self, sdk: Arc<dyn PaypalSdk>) {
        *self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(sdk);
    }

    fn get(&self) -> Option<Arc<dyn PaypalSdk>> {
        self.slot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl std::fmt::Debug for PaypalNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaypalNamespace")
            .field("attached", &self.get().is_some())
            .finish()
    }
}

/// Loads the PayPal script and returns the SDK it exposes.
#[derive(Clone)]
pub struct PaypalScriptLoader {
    loader: Arc<dyn ScriptLoader>,
    namespace: PaypalNamespace,
    script_url: String,
}

impl PaypalScriptLoader {
    pub fn new(loader: Arc<dyn ScriptLoader>, namespace: PaypalNamespace) -> Self {
        Self {
            loader,
            namespace,
            script_url: PAYPAL_SCRIPT_URL.to_string(),
        }
    }

    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }

    /// Loads the script, then reads the SDK it attached.
    #[instrument(skip(self), fields(url = %self.script_url))]
    pub async fn load_paypal(&self) -> Result<Arc<dyn PaypalSdk>, ScriptLoadError> {
        debug!("Loading script");
        self.loader.load_script(&self.script_url).await?;

        let sdk = self
            .namespace
            .get()
            .ok_or_else(|| ScriptLoadError::SdkUnavailable(self.script_url.clone()))?;
        info!("PayPal SDK loaded");
        Ok(sdk)
    }
}
