//! Models for the M-Pesa Express (STK push) APIs.

mod model;

pub use model::*;
