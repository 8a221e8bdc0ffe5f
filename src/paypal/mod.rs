//! PayPal Express client library: the SDK capability interface and the
//! loader that acquires it.

pub mod error;
pub mod script_loader;
pub mod sdk;

pub use error::*;
pub use script_loader::*;
pub use sdk::*;
