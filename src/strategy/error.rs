//! Error types for payment strategies.

use crate::order_actions::OrderActionError;
use crate::paypal::{PaypalError, ScriptLoadError};
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`PaymentStrategy`](crate::strategy::PaymentStrategy) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentStrategyError {
    /// The provider script could not be loaded; no SDK handle was stored.
    #[error(transparent)]
    ScriptLoad(#[from] ScriptLoadError),

    /// The order has not been placed, or its payment is not acknowledged or finalized.
    ///
    /// Expected control flow rather than a fault.
    #[error("Order finalization is not required")]
    OrderFinalizationNotRequired,

    /// Submitting or finalizing the order failed upstream.
    #[error(transparent)]
    OrderAction(#[from] OrderActionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Provider(#[from] PaypalError),

    /// The payment flow should start but the order carries no redirect URL.
    #[error("Order has no payment redirect URL")]
    MissingRedirectUrl,
}

impl PaymentStrategyError {
    pub fn is_finalization_not_required(&self) -> bool {
        matches!(self, PaymentStrategyError::OrderFinalizationNotRequired)
    }
}
