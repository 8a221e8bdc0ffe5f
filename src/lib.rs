//! # Checkout Strategy
//!
//! > **A payment strategy lifecycle coordinator for redirect/popup providers.**
//!
//! This crate adapts a checkout's generic order-submission flow to PayPal Express,
//! keeping a shared checkout store consistent with the provider's asynchronous
//! callbacks.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One lifecycle, two protocols
//!
//! The checkout speaks in dispatched actions and state snapshots; PayPal speaks in
//! SDK calls and callbacks. A [`PaymentStrategy`](strategy::PaymentStrategy) sits
//! between them and walks a fixed lifecycle:
//!
//! `initialize → execute → finalize → deinitialize`
//!
//! ### The status gate
//!
//! Once the provider has acknowledged or finalized a payment, the overlay and the
//! redirect must not run again. The order is still submitted. `finalize` only
//! proceeds for such confirmed payments and otherwise returns
//! [`OrderFinalizationNotRequired`](strategy::PaymentStrategyError::OrderFinalizationNotRequired).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Single-owner store
//! The [`store`] runs as one Tokio task that owns the [`CheckoutState`](store::CheckoutState).
//! Reads and dispatches are messages; snapshots are immutable and replaced on every dispatch.
//!
//! ### 2. Injected collaborators
//! The PayPal SDK, script loader, browser navigation and order action creator are traits.
//! The strategy never reads global state: the SDK handle only arrives through
//! [`PaypalScriptLoader::load_paypal`](paypal::PaypalScriptLoader::load_paypal).
//!
//! ### 3. Errors surface, never vanish
//! Each module has its own `thiserror` enum; all of them convert into
//! [`PaymentStrategyError`](strategy::PaymentStrategyError). Nothing is retried.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: Orders, payment methods and option bags.
//! - [`store`]: The checkout store actor, its client and an expectation-driven mock.
//! - [`order_actions`]: Submit/finalize action creators.
//! - [`paypal`]: SDK capability interface and script loading.
//! - [`strategy`]: The lifecycle contract and the PayPal Express strategy.
//! - [`lifecycle`]: Configuration, system wiring and tracing setup.
//! - [`mock`]: Recording collaborators for tests and the demo.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod order_actions;
pub mod paypal;
pub mod store;
pub mod strategy;
