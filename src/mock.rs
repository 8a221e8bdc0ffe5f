//! # Recording Collaborators
//!
//! In-memory stand-ins for the systems the payment strategy talks to. They all
//! write into one shared [`Journal`], so a test can assert on the order of calls
//! across collaborators (script load before setup, submission before redirect).
//!
//! | Collaborator | Stand-in |
//! |--------------|----------|
//! | PayPal SDK | [`RecordingPaypalSdk`] |
//! | Script loader | [`MockScriptLoader`] |
//! | Browser navigation | [`RecordingNavigator`] |
//! | Order action creator | [`MockOrderActionCreator`] |
//!
//! For the store itself see [`crate::store::mock`].

use crate::model::{Order, OrderId, OrderRequestBody, RequestOptions};
use crate::order_actions::{OrderActionCreator, OrderActionError};
use crate::paypal::{
    PaypalError, PaypalNamespace, PaypalSdk, PaypalSetupOptions, ScriptLoadError, ScriptLoader,
};
use crate::store::CheckoutAction;
use crate::strategy::Navigator;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Ordered log of calls shared between collaborators.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        lock(&self.entries).push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    /// Number of entries whose call name (text before the first `:`) is `name`.
    pub fn count(&self, name: &str) -> usize {
        lock(&self.entries)
            .iter()
            .filter(|entry| entry.split(':').next() == Some(name))
            .count()
    }

    /// Position of the first entry starting with `prefix`.
    pub fn position(&self, prefix: &str) -> Option<usize> {
        lock(&self.entries)
            .iter()
            .position(|entry| entry.starts_with(prefix))
    }
}

// =============================================================================
// PAYPAL
// =============================================================================

/// A [`PaypalSdk`] that records every call and can be told to fail some of them.
#[derive(Debug)]
pub struct RecordingPaypalSdk {
    journal: Journal,
    failing: Vec<&'static str>,
}

impl RecordingPaypalSdk {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            failing: Vec::new(),
        }
    }

    /// Makes the named call (`setup`, `init_xo`, `start_flow`, `close_flow`) fail.
    pub fn fail_on(mut self, call: &'static str) -> Self {
        self.failing.push(call);
        self
    }

    fn outcome(&self, call: &'static str) -> Result<(), PaypalError> {
        if !self.failing.contains(&call) {
            return Ok(());
        }
        match call {
            "setup" => Err(PaypalError::Setup(format!("{} refused", call))),
            _ => Err(PaypalError::Flow(format!("{} refused", call))),
        }
    }
}

#[async_trait]
impl PaypalSdk for RecordingPaypalSdk {
    async fn setup(
        &self,
        merchant_id: &str,
        options: &PaypalSetupOptions,
    ) -> Result<(), PaypalError> {
        self.journal.record(format!(
            "setup:{}:{}:{}",
            merchant_id, options.button, options.environment
        ));
        self.outcome("setup")
    }

    async fn init_xo(&self) -> Result<(), PaypalError> {
        self.journal.record("init_xo");
        self.outcome("init_xo")
    }

    async fn start_flow(&self, url: &str) -> Result<(), PaypalError> {
        self.journal.record(format!("start_flow:{}", url));
        self.outcome("start_flow")
    }

    async fn close_flow(&self) -> Result<(), PaypalError> {
        self.journal.record("close_flow");
        self.outcome("close_flow")
    }
}

enum LoadBehavior {
    Attach(PaypalNamespace, Arc<dyn PaypalSdk>),
    Empty,
    Fail(String),
}

/// A [`ScriptLoader`] that simulates the hosted script running.
pub struct MockScriptLoader {
    journal: Journal,
    behavior: LoadBehavior,
}

impl MockScriptLoader {
    /// Loads successfully and attaches `sdk` to `namespace`, as the real script would.
    pub fn attaching(journal: Journal, namespace: PaypalNamespace, sdk: Arc<dyn PaypalSdk>) -> Self {
        Self {
            journal,
            behavior: LoadBehavior::Attach(namespace, sdk),
        }
    }

    /// Loads successfully without exposing anything.
    pub fn empty(journal: Journal) -> Self {
        Self {
            journal,
            behavior: LoadBehavior::Empty,
        }
    }

    pub fn failing(journal: Journal, reason: impl Into<String>) -> Self {
        Self {
            journal,
            behavior: LoadBehavior::Fail(reason.into()),
        }
    }
}

#[async_trait]
impl ScriptLoader for MockScriptLoader {
    async fn load_script(&self, url: &str) -> Result<(), ScriptLoadError> {
        self.journal.record(format!("load_script:{}", url));
        tokio::task::yield_now().await;
        match &self.behavior {
            LoadBehavior::Attach(namespace, sdk) => {
                namespace.attach(sdk.clone());
                Ok(())
            }
            LoadBehavior::Empty => Ok(()),
            LoadBehavior::Fail(reason) => Err(ScriptLoadError::Failed {
                url: url.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// A [`Navigator`] that records redirects instead of leaving the page.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    journal: Journal,
    redirects: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            redirects: Arc::default(),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        lock(&self.redirects).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.journal.record(format!("redirect:{}", url));
        lock(&self.redirects).push(url.to_string());
    }
}

// =============================================================================
// ORDER ACTIONS
// =============================================================================

/// Arguments of one `submit_order` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitCall {
    pub payload: OrderRequestBody,
    pub use_stored_instrument: bool,
    pub options: RequestOptions,
}

/// An [`OrderActionCreator`] returning canned actions and recording its inputs.
pub struct MockOrderActionCreator {
    journal: Journal,
    submit_result: Result<CheckoutAction, OrderActionError>,
    finalize_result: Result<Order, OrderActionError>,
    submit_calls: Mutex<Vec<SubmitCall>>,
    finalize_calls: Mutex<Vec<(OrderId, RequestOptions)>>,
}

impl MockOrderActionCreator {
    pub fn new(journal: Journal) -> Self {
        let unconfigured = OrderActionError::RequestFailed("no response configured".to_string());
        Self {
            journal,
            submit_result: Err(unconfigured.clone()),
            finalize_result: Err(unconfigured),
            submit_calls: Mutex::new(Vec::new()),
            finalize_calls: Mutex::new(Vec::new()),
        }
    }

    /// `submit_order` succeeds with this order.
    pub fn with_submitted_order(mut self, order: Order) -> Self {
        self.submit_result = Ok(CheckoutAction::SubmitOrderSucceeded(order));
        self
    }

    pub fn failing_submission(mut self, error: OrderActionError) -> Self {
        self.submit_result = Err(error);
        self
    }

    /// `finalize_order` succeeds with this order (its id is replaced by the requested one).
    pub fn with_finalized_order(mut self, order: Order) -> Self {
        self.finalize_result = Ok(order);
        self
    }

    pub fn failing_finalization(mut self, error: OrderActionError) -> Self {
        self.finalize_result = Err(error);
        self
    }

    pub fn submit_calls(&self) -> Vec<SubmitCall> {
        lock(&self.submit_calls).clone()
    }

    pub fn finalize_calls(&self) -> Vec<(OrderId, RequestOptions)> {
        lock(&self.finalize_calls).clone()
    }
}

#[async_trait]
impl OrderActionCreator for MockOrderActionCreator {
    async fn submit_order(
        &self,
        payload: OrderRequestBody,
        use_stored_instrument: bool,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError> {
        self.journal.record("submit_order");
        lock(&self.submit_calls).push(SubmitCall {
            payload,
            use_stored_instrument,
            options,
        });
        tokio::task::yield_now().await;
        self.submit_result.clone()
    }

    async fn finalize_order(
        &self,
        order_id: OrderId,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError> {
        self.journal.record(format!("finalize_order:{}", order_id));
        lock(&self.finalize_calls).push((order_id, options));
        tokio::task::yield_now().await;
        let mut order = self.finalize_result.clone()?;
        order.order_id = Some(order_id);
        Ok(CheckoutAction::FinalizeOrderSucceeded(order))
    }
}
