use checkout_strategy::mock::{
    Journal, MockOrderActionCreator, MockScriptLoader, RecordingNavigator, RecordingPaypalSdk,
};
use checkout_strategy::model::{
    InitializeOptions, Order, OrderRequestBody, PaymentMethod, RequestOptions,
};
use checkout_strategy::paypal::{PaypalNamespace, PaypalScriptLoader};
use checkout_strategy::store::mock::MockStore;
use checkout_strategy::store::{CheckoutAction, CheckoutState};
use checkout_strategy::strategy::{PaymentStrategy, PaypalExpressPaymentStrategy};
use std::sync::Arc;

const REDIRECT_URL: &str = "https://x/checkout";

/// Real strategy, mocked store: asserts the exact sequence of store requests.
///
/// merchantId="abc", no payment status, redirectUrl set: the flow starts with
/// the order's URL, the submission is dispatched and nothing redirects.
#[tokio::test]
async fn test_in_context_scenario_with_mocked_store() {
    let order = Order::placed(1, "paypalexpress", Some(REDIRECT_URL), None);
    let state = CheckoutState::with_order(order.clone());

    let mut store = MockStore::new();
    // initialize -> get_state, execute -> get_state + dispatch
    store.expect_get_state().return_ok(state.clone());
    store.expect_get_state().return_ok(state.clone());
    store.expect_dispatch().return_ok(state.clone());

    let journal = Journal::new();
    let namespace = PaypalNamespace::new();
    let sdk = Arc::new(RecordingPaypalSdk::new(journal.clone()));
    let loader = MockScriptLoader::attaching(journal.clone(), namespace.clone(), sdk);
    let navigator = RecordingNavigator::new(journal.clone());
    let mut strategy = PaypalExpressPaymentStrategy::new(
        store.client(),
        Arc::new(MockOrderActionCreator::new(journal.clone()).with_submitted_order(order.clone())),
        PaypalScriptLoader::new(Arc::new(loader), namespace),
        Arc::new(navigator.clone()),
    );

    strategy
        .initialize(InitializeOptions::new(PaymentMethod::new(
            "paypalexpress",
            Some("abc"),
        )))
        .await
        .unwrap();
    strategy
        .execute(
            OrderRequestBody::with_payment("paypalexpress"),
            RequestOptions::default(),
        )
        .await
        .unwrap();

    store.verify();
    assert_eq!(
        store.dispatched(),
        vec![CheckoutAction::SubmitOrderSucceeded(order)]
    );
    assert_eq!(journal.count("start_flow"), 1);
    assert!(journal
        .entries()
        .contains(&format!("start_flow:{}", REDIRECT_URL)));
    assert!(navigator.redirects().is_empty());
}

/// Same scenario with merchantId=null: no flow, redirect after dispatch resolves.
#[tokio::test]
async fn test_redirect_scenario_with_mocked_store() {
    let order = Order::placed(1, "paypalexpress", Some(REDIRECT_URL), None);
    let state = CheckoutState::with_order(order.clone());

    let mut store = MockStore::new();
    store.expect_get_state().return_ok(state.clone());
    store.expect_get_state().return_ok(state.clone());
    store.expect_dispatch().return_ok(state.clone());

    let journal = Journal::new();
    let navigator = RecordingNavigator::new(journal.clone());
    let mut strategy = PaypalExpressPaymentStrategy::new(
        store.client(),
        Arc::new(MockOrderActionCreator::new(journal.clone()).with_submitted_order(order)),
        PaypalScriptLoader::new(
            Arc::new(MockScriptLoader::empty(journal.clone())),
            PaypalNamespace::new(),
        ),
        Arc::new(navigator.clone()),
    );

    strategy
        .initialize(InitializeOptions::new(PaymentMethod::new("paypalexpress", None)))
        .await
        .unwrap();
    strategy
        .execute(
            OrderRequestBody::with_payment("paypalexpress"),
            RequestOptions::default(),
        )
        .await
        .unwrap();

    store.verify();
    assert_eq!(journal.count("load_script"), 0);
    assert_eq!(journal.count("start_flow"), 0);
    assert_eq!(navigator.redirects(), vec![REDIRECT_URL.to_string()]);
    assert_eq!(
        journal.entries(),
        vec!["submit_order".to_string(), format!("redirect:{}", REDIRECT_URL)]
    );
}
