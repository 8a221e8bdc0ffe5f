//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole crate.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** with spans shown inline (e.g. `execute:submit_order`)
//!
//! ```bash
//! # Lifecycle transitions, dispatches, redirects
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every store read
//! RUST_LOG=debug cargo run
//!
//! # Only the store actor
//! RUST_LOG=checkout_strategy::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an in-context checkout looks like:
//!
//! ```text
//! INFO Store started version=0
//! INFO initialize: PayPal SDK loaded
//! INFO initialize: Initialized in-context checkout button=paypal-button environment=production
//! INFO execute:submit_order: Order submitted order_id=Some(OrderId(1))
//! INFO Dispatched kind="SUBMIT_ORDER_SUCCEEDED" version=1
//! INFO execute: PayPal flow started url=https://x/checkout
//! ```

/// Initializes the global subscriber. Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
