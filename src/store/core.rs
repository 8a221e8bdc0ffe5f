//! # Store Actor
//!
//! The store owns the current [`CheckoutState`] inside a single Tokio task. Every
//! read and every dispatch travels through an `mpsc` channel and is answered on a
//! `oneshot`, so requests are applied strictly in arrival order without locks.
//!
//! ## Key Types
//!
//! - [`CheckoutStore`]: The actor that owns the state and runs the reducer.
//! - [`StoreClient`]: The cloneable handle callers use.
//! - [`StoreRequest`]: Messages exchanged between the two.
//! - [`StoreError`]: Channel failures and rejected actions.

use crate::store::{CheckoutAction, CheckoutState};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Errors returned by the checkout store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Action rejected: {0}")]
    Rejected(String),
}

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Messages sent to the store actor.
#[derive(Debug)]
pub enum StoreRequest {
    GetState {
        respond_to: Response<CheckoutState>,
    },
    Dispatch {
        action: CheckoutAction,
        respond_to: Response<CheckoutState>,
    },
}

/// The actor half of the store. It owns the state and the receiver.
pub struct CheckoutStore {
    receiver: mpsc::Receiver<StoreRequest>,
    state: CheckoutState,
}

impl CheckoutStore {
    pub fn new(buffer_size: usize, initial: CheckoutState) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            state: initial,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the store's event loop until every [`StoreClient`] has been dropped.
    pub async fn run(mut self) {
        info!(version = self.state.version(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::GetState { respond_to } => {
                    debug!(version = self.state.version(), "GetState");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Dispatch { action, respond_to } => {
                    let kind = action.kind();
                    debug!(kind, ?action, "Dispatch");
                    match self.state.reduce(action) {
                        Ok(next) => {
                            self.state = next;
                            info!(kind, version = self.state.version(), "Dispatched");
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            warn!(kind, error = %e, "Dispatch rejected");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
            }
        }

        info!(version = self.state.version(), "Shutdown");
    }
}

/// A cloneable handle for reading from and dispatching to a [`CheckoutStore`].
#[derive(Clone, Debug)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Returns the current snapshot.
    pub async fn get_state(&self) -> Result<CheckoutState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetState { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Applies `action` and returns the snapshot it produced.
    pub async fn dispatch(&self, action: CheckoutAction) -> Result<CheckoutState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
