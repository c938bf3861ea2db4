//! Models for the transaction reversal API.

mod model;

pub use model::*;
