//! # PayPal Express Strategy
//!
//! Adapts the generic checkout submission flow to PayPal Express.
//!
//! ## Modes
//!
//! - **In-context**: the payment method carries a merchant id. `initialize` loads
//!   the PayPal script and sets up the SDK; `execute` completes payment in an
//!   overlay via `init_xo`/`start_flow`.
//! - **Redirect**: no merchant id. No script is loaded; `execute` sends the
//!   shopper to the order's redirect URL once the order is submitted.
//!
//! ## Status Gate
//!
//! A payment the provider already acknowledged or finalized must never trigger
//! the overlay or the redirect again. The gate is read once per `execute`,
//! before submission, and both branches consume that single value. Submission
//! itself always happens.

use crate::model::{InitializeOptions, Order, OrderRequestBody, RequestOptions};
use crate::order_actions::OrderActionCreator;
use crate::paypal::{PaypalScriptLoader, PaypalSdk, PaypalSetupOptions};
use crate::store::{CheckoutState, StoreClient};
use crate::strategy::{Navigator, PaymentStrategy, PaymentStrategyError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// PayPal Express implementation of [`PaymentStrategy`].
///
/// Owns nothing but the SDK handle, which is present if and only if the last
/// `initialize` ran in in-context mode and succeeded.
pub struct PaypalExpressPaymentStrategy {
    store: StoreClient,
    order_actions: Arc<dyn OrderActionCreator>,
    script_loader: PaypalScriptLoader,
    navigator: Arc<dyn Navigator>,
    setup_options: PaypalSetupOptions,
    paypal_sdk: Option<Arc<dyn PaypalSdk>>,
    is_initialized: bool,
}

impl PaypalExpressPaymentStrategy {
    pub fn new(
        store: StoreClient,
        order_actions: Arc<dyn OrderActionCreator>,
        script_loader: PaypalScriptLoader,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            order_actions,
            script_loader,
            navigator,
            setup_options: PaypalSetupOptions::default(),
            paypal_sdk: None,
            is_initialized: false,
        }
    }

    pub fn with_setup_options(mut self, options: PaypalSetupOptions) -> Self {
        self.setup_options = options;
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn is_in_context(&self) -> bool {
        self.paypal_sdk.is_some()
    }

    async fn submit(
        &self,
        payload: OrderRequestBody,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        let action = self
            .order_actions
            .submit_order(payload, true, options)
            .await?;
        Ok(self.store.dispatch(action).await?)
    }

    async fn execute_in_context(
        &self,
        sdk: &Arc<dyn PaypalSdk>,
        payload: OrderRequestBody,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        // A failed overlay must not stop the order from being submitted.
        let opened = sdk.init_xo().await;

        let state = match self.submit(payload, options).await {
            Ok(state) => state,
            Err(e) => {
                if opened.is_ok() {
                    close_quietly(sdk.as_ref()).await;
                }
                return Err(e);
            }
        };
        opened?;

        let url = match redirect_url(&state) {
            Ok(url) => url,
            Err(e) => {
                close_quietly(sdk.as_ref()).await;
                return Err(e);
            }
        };
        sdk.start_flow(&url).await?;
        info!(%url, "PayPal flow started");
        Ok(state)
    }
}

fn is_acknowledged_or_finalized(state: &CheckoutState) -> bool {
    state
        .get_order()
        .is_some_and(Order::is_payment_acknowledged_or_finalized)
}

fn redirect_url(state: &CheckoutState) -> Result<String, PaymentStrategyError> {
    state
        .get_order()
        .and_then(Order::redirect_url)
        .map(str::to_string)
        .ok_or(PaymentStrategyError::MissingRedirectUrl)
}

async fn close_quietly(sdk: &dyn PaypalSdk) {
    if let Err(e) = sdk.close_flow().await {
        warn!(error = %e, "Failed to close PayPal flow");
    }
}

#[async_trait]
impl PaymentStrategy for PaypalExpressPaymentStrategy {
    #[instrument(skip_all, fields(method_id = %options.method_id))]
    async fn initialize(
        &mut self,
        options: InitializeOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        self.paypal_sdk = None;
        self.is_initialized = false;

        if let Some(merchant_id) = options.payment_method.merchant_id() {
            let sdk = self.script_loader.load_paypal().await?;
            sdk.setup(merchant_id, &self.setup_options).await?;
            self.paypal_sdk = Some(sdk);
            info!(
                button = %self.setup_options.button,
                environment = %self.setup_options.environment,
                "Initialized in-context checkout"
            );
        } else {
            info!("Initialized redirect checkout");
        }

        self.is_initialized = true;
        Ok(self.store.get_state().await?)
    }

    /// A [`PaymentStrategyError::Provider`] from opening the overlay is
    /// returned after submission, so the store already holds the submitted order.
    #[instrument(skip_all)]
    async fn execute(
        &self,
        payload: OrderRequestBody,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        let current = self.store.get_state().await?;
        let flow_allowed = !is_acknowledged_or_finalized(&current);
        debug!(flow_allowed, in_context = self.is_in_context(), ?payload, "execute called");

        match &self.paypal_sdk {
            Some(sdk) if flow_allowed => self.execute_in_context(sdk, payload, options).await,
            Some(_) => {
                info!("Payment already confirmed, skipping PayPal flow");
                self.submit(payload, options).await
            }
            None => {
                let state = self.submit(payload, options).await?;
                if flow_allowed {
                    let url = redirect_url(&state)?;
                    info!(%url, "Redirecting to PayPal");
                    self.navigator.redirect(&url);
                } else {
                    info!("Payment already confirmed, skipping redirect");
                }
                Ok(state)
            }
        }
    }

    #[instrument(skip_all)]
    async fn finalize(
        &self,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        let state = self.store.get_state().await?;
        let order_id = state
            .get_order()
            .filter(|order| order.is_payment_acknowledged_or_finalized())
            .and_then(|order| order.order_id)
            .ok_or(PaymentStrategyError::OrderFinalizationNotRequired)?;

        let action = self.order_actions.finalize_order(order_id, options).await?;
        let state = self.store.dispatch(action).await?;
        info!(%order_id, "Order finalized");
        Ok(state)
    }

    #[instrument(skip_all)]
    async fn deinitialize(
        &mut self,
        _options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError> {
        self.is_initialized = false;

        if let Some(sdk) = self.paypal_sdk.take() {
            sdk.close_flow().await?;
            info!("PayPal flow closed");
        }

        Ok(self.store.get_state().await?)
    }
}
