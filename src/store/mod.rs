//! The checkout store: a single-owner actor holding the current [`CheckoutState`].
//!
//! # Main Components
//!
//! - [`CheckoutStore`] - The actor task that owns state and applies dispatched actions
//! - [`StoreClient`] - Cloneable handle used to read snapshots and dispatch actions
//! - [`CheckoutState`] / [`CheckoutAction`] - Snapshots and the actions that produce them
//! - [`StoreError`] - Errors returned to callers of the client
//!
//! # Testing
//!
//! See [`mock`] for an expectation-driven store that needs no reducer.

pub mod core;
pub mod mock;
pub mod state;

pub use self::core::*;
pub use state::*;
