//! Models for the Customer To Business APIs.

mod model;

pub use model::*;
