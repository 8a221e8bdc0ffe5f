//! Walks one in-context PayPal Express checkout end to end against in-memory
//! collaborators.
//!
//! Set `CHECKOUT_CONFIG` to a JSON [`CheckoutConfig`] to override defaults.

use async_trait::async_trait;
use checkout_strategy::lifecycle::{setup_tracing, CheckoutConfig, CheckoutSystem};
use checkout_strategy::mock::{Journal, MockScriptLoader, RecordingNavigator, RecordingPaypalSdk};
use checkout_strategy::model::{
    InitializeOptions, Order, OrderId, OrderRequestBody, PaymentMethod, PaymentStatus,
    RequestOptions,
};
use checkout_strategy::order_actions::{
    OrderActionError, OrderRequestSender, RemoteOrderActionCreator,
};
use checkout_strategy::store::{CheckoutAction, CheckoutState};
use checkout_strategy::strategy::PaymentStrategy;
use std::sync::Arc;
use tracing::{info, Instrument};

const REDIRECT_URL: &str = "https://www.paypal.com/checkoutnow?token=EC-DEMO";

/// Backend that places every submitted order as order 1.
struct DemoBackend;

#[async_trait]
impl OrderRequestSender for DemoBackend {
    async fn submit_order(
        &self,
        body: &OrderRequestBody,
        _use_stored_instrument: bool,
        _options: &RequestOptions,
    ) -> Result<Order, OrderActionError> {
        let provider = body
            .payment
            .as_ref()
            .map(|payment| payment.name.clone())
            .ok_or_else(|| OrderActionError::InvalidRequest("missing payment".to_string()))?;
        Ok(Order::placed(1, provider, Some(REDIRECT_URL), None))
    }

    async fn finalize_order(
        &self,
        order_id: OrderId,
        _options: &RequestOptions,
    ) -> Result<Order, OrderActionError> {
        let mut order = Order::placed(
            order_id.0,
            "paypalexpress",
            Some(REDIRECT_URL),
            Some(PaymentStatus::Finalized),
        );
        order.is_complete = true;
        Ok(order)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = match std::env::var("CHECKOUT_CONFIG") {
        Ok(json) => CheckoutConfig::from_json(&json)?,
        Err(_) => CheckoutConfig::default(),
    };
    let system = CheckoutSystem::new(config, CheckoutState::default());

    let journal = Journal::new();
    let sdk = Arc::new(RecordingPaypalSdk::new(journal.clone()));
    let script_loader =
        MockScriptLoader::attaching(journal.clone(), system.paypal_namespace(), sdk);
    let navigator = RecordingNavigator::new(journal.clone());
    let mut strategy = system.paypal_express_strategy(
        Arc::new(RemoteOrderActionCreator::new(DemoBackend)),
        Arc::new(script_loader),
        Arc::new(navigator),
    );

    let method = PaymentMethod::new("paypalexpress", Some("DEMO-MERCHANT"));
    let request_options = RequestOptions::for_method(method.id.clone());

    strategy
        .initialize(InitializeOptions::new(method))
        .instrument(tracing::info_span!("initialize"))
        .await?;

    strategy
        .execute(
            OrderRequestBody::with_payment("paypalexpress"),
            request_options.clone(),
        )
        .instrument(tracing::info_span!("execute"))
        .await?;

    // PayPal reports back through the store once the shopper approves.
    system
        .store
        .dispatch(CheckoutAction::PaymentStatusUpdated(PaymentStatus::Acknowledged))
        .await?;

    let state = strategy
        .finalize(request_options.clone())
        .instrument(tracing::info_span!("finalize"))
        .await?;
    info!(order = ?state.get_order(), "Checkout complete");

    strategy.deinitialize(request_options).await?;
    drop(strategy);

    info!(calls = ?journal.entries(), "Collaborator calls");
    system.shutdown().await?;
    Ok(())
}
