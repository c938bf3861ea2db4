//! Models for the account balance query API.

mod model;

pub use model::*;
