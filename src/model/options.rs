//! Option bags passed into the strategy lifecycle.

use crate::model::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Options for [`PaymentStrategy::initialize`](crate::strategy::PaymentStrategy::initialize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeOptions {
    pub method_id: String,
    pub payment_method: PaymentMethod,
}

impl InitializeOptions {
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            method_id: payment_method.id.clone(),
            payment_method,
        }
    }
}

/// Opaque request options forwarded untouched to the action creators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(default)]
    pub method_id: Option<String>,
    #[serde(default)]
    pub gateway_id: Option<String>,
}

impl RequestOptions {
    pub fn for_method(method_id: impl Into<String>) -> Self {
        Self {
            method_id: Some(method_id.into()),
            ..Self::default()
        }
    }
}
