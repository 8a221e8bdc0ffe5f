//! Order action creators: turn submit/finalize intents into store actions.

pub mod creator;
pub mod error;

pub use creator::*;
pub use error::*;
