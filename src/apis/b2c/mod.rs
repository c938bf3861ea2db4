//! Models for the Business To Customer payment API.

mod model;

pub use model::*;
