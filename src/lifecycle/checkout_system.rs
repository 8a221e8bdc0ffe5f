use crate::lifecycle::CheckoutConfig;
use crate::order_actions::OrderActionCreator;
use crate::paypal::{PaypalNamespace, PaypalScriptLoader, ScriptLoader};
use crate::store::{CheckoutState, CheckoutStore, StoreClient};
use crate::strategy::{Navigator, PaypalExpressPaymentStrategy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Store task failed: {0}")]
    StoreTaskFailed(String),
}

/// The runtime orchestrator for a checkout session.
///
/// `CheckoutSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actor
/// - **Dependency Wiring**: Handing strategies a store client and the PayPal namespace
///
/// # Example
///
/// ```ignore
/// let system = CheckoutSystem::new(CheckoutConfig::default(), CheckoutState::default());
/// let mut strategy = system.paypal_express_strategy(order_actions, script_loader, navigator);
///
/// strategy.initialize(options).await?;
/// strategy.execute(payload, request_options).await?;
///
/// drop(strategy);
/// system.shutdown().await?;
/// ```
pub struct CheckoutSystem {
    /// Client for the running store actor.
    pub store: StoreClient,

    config: CheckoutConfig,
    namespace: PaypalNamespace,

    /// Store task handle (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CheckoutSystem {
    /// Spawns the store actor seeded with `initial`.
    pub fn new(config: CheckoutConfig, initial: CheckoutState) -> Self {
        let (store_actor, store) = CheckoutStore::new(config.store_buffer_size, initial);
        let handle = tokio::spawn(store_actor.run());
        info!(script_url = %config.script_url, "Checkout system started");

        Self {
            store,
            config,
            namespace: PaypalNamespace::new(),
            handle,
        }
    }

    /// The slot a loaded PayPal script attaches its SDK to.
    pub fn paypal_namespace(&self) -> PaypalNamespace {
        self.namespace.clone()
    }

    /// Builds a PayPal Express strategy bound to this system's store and configuration.
    pub fn paypal_express_strategy(
        &self,
        order_actions: Arc<dyn OrderActionCreator>,
        script_loader: Arc<dyn ScriptLoader>,
        navigator: Arc<dyn Navigator>,
    ) -> PaypalExpressPaymentStrategy {
        let paypal_loader = PaypalScriptLoader::new(script_loader, self.namespace.clone())
            .with_script_url(self.config.script_url.clone());

        PaypalExpressPaymentStrategy::new(self.store.clone(), order_actions, paypal_loader, navigator)
            .with_setup_options(self.config.setup_options())
    }

    /// Gracefully shuts down the store.
    ///
    /// The store exits once every client is dropped, so strategies built by this
    /// system must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down checkout system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(SystemError::StoreTaskFailed(e.to_string()));
        }

        info!("Checkout system shutdown complete.");
        Ok(())
    }
}
