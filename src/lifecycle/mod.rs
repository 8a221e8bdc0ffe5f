//! Runtime orchestration and lifecycle management.
//!
//! - **Configuration**: [`CheckoutConfig`], loadable from JSON
//! - **System orchestration**: [`CheckoutSystem`] starts the store actor and wires strategies to it
//! - **Observability setup**: [`setup_tracing`]

pub mod checkout_system;
pub mod config;
pub mod tracing;

pub use checkout_system::*;
pub use config::*;
pub use self::tracing::setup_tracing;
