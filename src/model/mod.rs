//! Pure data structures exchanged between the strategy and its collaborators.

pub mod options;
pub mod order;
pub mod payment_method;

pub use options::*;
pub use order::*;
pub use payment_method::*;
