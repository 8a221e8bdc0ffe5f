use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Provider-reported payment status.
///
/// `None` on [`OrderPayment::status`] means the provider has not reported one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
    #[serde(rename = "ACKNOWLEDGE")]
    Acknowledged,
    #[serde(rename = "FINALIZE")]
    Finalized,
}

impl PaymentStatus {
    /// Once a payment is acknowledged or finalized the provider flow must not run again.
    pub fn is_acknowledged_or_finalized(self) -> bool {
        matches!(self, PaymentStatus::Acknowledged | PaymentStatus::Finalized)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayment {
    pub provider_id: String,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
}

/// Represents the shopper's order as held by the checkout store.
///
/// An order that has not been placed yet carries no `order_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub payment: Option<OrderPayment>,
}

impl Order {
    /// Creates an order that has not been placed yet.
    pub fn incomplete() -> Self {
        Self::default()
    }

    /// Creates a placed order paid through `provider_id`.
    pub fn placed(
        order_id: u64,
        provider_id: impl Into<String>,
        redirect_url: Option<&str>,
        status: Option<PaymentStatus>,
    ) -> Self {
        Self {
            order_id: Some(OrderId(order_id)),
            is_complete: false,
            payment: Some(OrderPayment {
                provider_id: provider_id.into(),
                redirect_url: redirect_url.map(str::to_string),
                status,
            }),
        }
    }

    pub fn is_placed(&self) -> bool {
        self.order_id.is_some()
    }

    pub fn payment_status(&self) -> Option<PaymentStatus> {
        self.payment.as_ref().and_then(|payment| payment.status)
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.payment
            .as_ref()
            .and_then(|payment| payment.redirect_url.as_deref())
    }

    /// True when the provider already confirmed the payment.
    pub fn is_payment_acknowledged_or_finalized(&self) -> bool {
        self.payment_status()
            .is_some_and(PaymentStatus::is_acknowledged_or_finalized)
    }
}

/// Payment part of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Provider identifier, e.g. `paypalexpress`.
    pub name: String,
    #[serde(default)]
    pub gateway: Option<String>,
}

/// Body of an order submission as sent to the checkout backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequestBody {
    #[serde(default)]
    pub payment: Option<PaymentRequest>,
    #[serde(default)]
    pub use_store_credit: bool,
    #[serde(default)]
    pub customer_message: Option<String>,
}

impl OrderRequestBody {
    pub fn with_payment(name: impl Into<String>) -> Self {
        Self {
            payment: Some(PaymentRequest {
                name: name.into(),
                gateway: None,
            }),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_statuses() {
        assert!(PaymentStatus::Acknowledged.is_acknowledged_or_finalized());
        assert!(PaymentStatus::Finalized.is_acknowledged_or_finalized());
        assert!(!PaymentStatus::Incomplete.is_acknowledged_or_finalized());

        let pending = Order::placed(1, "paypalexpress", None, None);
        assert!(!pending.is_payment_acknowledged_or_finalized());
        assert!(!Order::incomplete().is_payment_acknowledged_or_finalized());
    }

    #[test]
    fn test_order_wire_format() {
        let json = r#"{
            "orderId": 295,
            "payment": {
                "providerId": "paypalexpress",
                "redirectUrl": "https://x/checkout",
                "status": "ACKNOWLEDGE"
            }
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, Some(OrderId(295)));
        assert_eq!(order.redirect_url(), Some("https://x/checkout"));
        assert_eq!(order.payment_status(), Some(PaymentStatus::Acknowledged));
        assert!(order.is_placed());
    }
}
