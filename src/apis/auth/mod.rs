//! Models related to authentication against the Daraja OAuth endpoint.

mod model;

pub use model::*;
