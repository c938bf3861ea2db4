//! Models for the transaction status query API.

mod model;

pub use model::*;
