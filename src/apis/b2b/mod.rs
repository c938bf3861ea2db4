//! Models for the Business To Business APIs: paybill payments and tax
//! remittance to KRA.

mod model;

pub use model::*;
