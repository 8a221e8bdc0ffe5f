//! # Mock Store
//!
//! An expectation-driven stand-in for [`CheckoutStore`](crate::store::CheckoutStore).
//!
//! Use [`MockStore`] when a test cares about *which* requests reach the store and
//! in what order, rather than about the reducer. Each request pops the next
//! expectation; a request with no matching expectation panics the mock task, which
//! surfaces to the caller as [`StoreError::StoreDropped`].

use crate::store::{CheckoutAction, CheckoutState, StoreClient, StoreError, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation {
    GetState {
        response: Result<CheckoutState, StoreError>,
    },
    Dispatch {
        response: Result<CheckoutState, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::new();
/// mock.expect_get_state().return_ok(state.clone());
/// mock.expect_dispatch().return_ok(next);
///
/// let store = mock.client();
/// // Drive the code under test...
/// mock.verify();
/// assert_eq!(mock.dispatched().len(), 1);
/// ```
pub struct MockStore {
    client: StoreClient,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    dispatched: Arc<Mutex<Vec<CheckoutAction>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::GetState { respond_to },
                        Some(Expectation::GetState { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .push(action);
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected store request: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns the client to hand to the code under test.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    /// Expects a `get_state` request.
    pub fn expect_get_state(&mut self) -> ExpectationBuilder {
        ExpectationBuilder {
            dispatch: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder {
        ExpectationBuilder {
            dispatch: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Actions dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<CheckoutAction> {
        self.dispatched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single store expectation.
pub struct ExpectationBuilder {
    dispatch: bool,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a snapshot.
    pub fn return_ok(self, state: CheckoutState) {
        self.push(Ok(state));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<CheckoutState, StoreError>) {
        let expectation = if self.dispatch {
            Expectation::Dispatch { response }
        } else {
            Expectation::GetState { response }
        };
        self.expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(expectation);
    }
}
