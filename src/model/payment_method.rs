use serde::{Deserialize, Serialize};

/// A payment method as configured for the store, e.g. PayPal Express.
///
/// The strategy treats this as immutable once it has been passed to
/// [`initialize`](crate::strategy::PaymentStrategy::initialize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    #[serde(default)]
    pub config: PaymentMethodConfig,
}

/// Provider-specific configuration attached to a [`PaymentMethod`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodConfig {
    /// Presence enables the in-context (popup) flow.
    #[serde(default)]
    pub merchant_id: Option<String>,
}

impl PaymentMethod {
    pub fn new(id: impl Into<String>, merchant_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            config: PaymentMethodConfig {
                merchant_id: merchant_id.map(str::to_string),
            },
        }
    }

    /// Returns the merchant identifier only when it is present and non-empty.
    pub fn merchant_id(&self) -> Option<&str> {
        self.config
            .merchant_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_merchant_id_is_treated_as_absent() {
        assert_eq!(PaymentMethod::new("paypalexpress", Some("")).merchant_id(), None);
        assert_eq!(PaymentMethod::new("paypalexpress", None).merchant_id(), None);
        assert_eq!(
            PaymentMethod::new("paypalexpress", Some("abc")).merchant_id(),
            Some("abc")
        );
    }

    #[test]
    fn test_deserializes_null_merchant_id() {
        let json = r#"{"id":"paypalexpress","config":{"merchantId":null}}"#;
        let method: PaymentMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.merchant_id(), None);
    }

    #[test]
    fn test_ignores_unmodelled_config_fields() {
        let json = r#"{"id":"paypalexpress","config":{"merchantId":"abc","displayName":"PayPal","testMode":true}}"#;
        let method: PaymentMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method, PaymentMethod::new("paypalexpress", Some("abc")));
    }
}
