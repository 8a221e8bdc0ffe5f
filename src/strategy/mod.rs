//! Payment strategies: the four-step lifecycle every provider integration follows.
//!
//! ```text
//! initialize ──► execute ──► finalize ──► deinitialize
//!      ▲                                        │
//!      └────────────────────────────────────────┘
//! ```

pub mod error;
pub mod navigation;
pub mod paypal_express;

pub use error::*;
pub use navigation::*;
pub use paypal_express::*;

use crate::model::{InitializeOptions, OrderRequestBody, RequestOptions};
use crate::store::CheckoutState;
use async_trait::async_trait;

/// Lifecycle contract shared by provider strategies.
///
/// Every method resolves to the checkout snapshot current when it settled.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    async fn initialize(
        &mut self,
        options: InitializeOptions,
    ) -> Result<CheckoutState, PaymentStrategyError>;

    async fn execute(
        &self,
        payload: OrderRequestBody,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError>;

    async fn finalize(&self, options: RequestOptions)
        -> Result<CheckoutState, PaymentStrategyError>;

    async fn deinitialize(
        &mut self,
        options: RequestOptions,
    ) -> Result<CheckoutState, PaymentStrategyError>;
}
