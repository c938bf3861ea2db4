//! Models for the dynamic QR code generation API.

mod model;

pub use model::*;
