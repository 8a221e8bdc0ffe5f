//! Checkout snapshots and the actions that move the store between them.

use crate::model::{Order, PaymentStatus};
use crate::store::StoreError;

/// Immutable snapshot of checkout state.
///
/// A fresh snapshot is produced on every dispatch; `version` counts how many
/// actions have been applied since the store started.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutState {
    order: Option<Order>,
    version: u64,
}

impl CheckoutState {
    pub fn new(order: Option<Order>) -> Self {
        Self { order, version: 0 }
    }

    pub fn with_order(order: Order) -> Self {
        Self::new(Some(order))
    }

    pub fn get_order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `action` and returns the next snapshot, leaving `self` untouched.
    pub fn reduce(&self, action: CheckoutAction) -> Result<CheckoutState, StoreError> {
        let order = match action {
            CheckoutAction::LoadOrderSucceeded(order)
            | CheckoutAction::SubmitOrderSucceeded(order)
            | CheckoutAction::FinalizeOrderSucceeded(order) => Some(order),
            CheckoutAction::PaymentStatusUpdated(status) => {
                let mut order = self
                    .order
                    .clone()
                    .ok_or_else(|| StoreError::Rejected("no order to update".to_string()))?;
                let payment = order.payment.as_mut().ok_or_else(|| {
                    StoreError::Rejected("order has no payment".to_string())
                })?;
                payment.status = Some(status);
                Some(order)
            }
        };

        Ok(CheckoutState {
            order,
            version: self.version + 1,
        })
    }
}

/// Actions accepted by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutAction {
    LoadOrderSucceeded(Order),
    SubmitOrderSucceeded(Order),
    FinalizeOrderSucceeded(Order),
    /// Status reported back by the payment provider.
    PaymentStatusUpdated(PaymentStatus),
}

impl CheckoutAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutAction::LoadOrderSucceeded(_) => "LOAD_ORDER_SUCCEEDED",
            CheckoutAction::SubmitOrderSucceeded(_) => "SUBMIT_ORDER_SUCCEEDED",
            CheckoutAction::FinalizeOrderSucceeded(_) => "FINALIZE_ORDER_SUCCEEDED",
            CheckoutAction::PaymentStatusUpdated(_) => "PAYMENT_STATUS_UPDATED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_produces_fresh_snapshot() {
        let state = CheckoutState::default();
        let order = Order::placed(1, "paypalexpress", Some("https://x/checkout"), None);

        let next = state
            .reduce(CheckoutAction::SubmitOrderSucceeded(order.clone()))
            .unwrap();

        assert_eq!(state.get_order(), None);
        assert_eq!(state.version(), 0);
        assert_eq!(next.get_order(), Some(&order));
        assert_eq!(next.version(), 1);
    }

    #[test]
    fn test_payment_status_update() {
        let state = CheckoutState::with_order(Order::placed(1, "paypalexpress", None, None));

        let next = state
            .reduce(CheckoutAction::PaymentStatusUpdated(PaymentStatus::Acknowledged))
            .unwrap();

        assert_eq!(
            next.get_order().and_then(Order::payment_status),
            Some(PaymentStatus::Acknowledged)
        );
    }

    #[test]
    fn test_payment_status_update_without_order_is_rejected() {
        let result = CheckoutState::default()
            .reduce(CheckoutAction::PaymentStatusUpdated(PaymentStatus::Finalized));

        assert!(matches!(result, Err(StoreError::Rejected(_))));
    }
}
