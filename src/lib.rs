//! Rust client for the Safaricom M-Pesa [Daraja](https://developer.safaricom.co.ke) APIs.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! First create an app on the [Daraja portal](https://developer.safaricom.co.ke)
//! and obtain your consumer key and consumer secret. Operations acting on behalf
//! of an initiator (B2C, B2B, account balance, reversals, transaction status and
//! tax remittance) additionally need the initiator's password, which the SDK
//! encrypts into a security credential on every call using the public
//! certificate published by the gateway.
//!
//! ## Initialize a new `DarajaClient`
//!
//! Create a new [`DarajaClient`](crate::client::DarajaClient) and provide your
//! consumer key and consumer secret.
//!
//! ```rust,no_run
//! # use daraja_rust::{DarajaClient, client::Environment, apis::auth::Credentials};
//! let mpesa = DarajaClient::builder(Credentials::new("consumer-key", "consumer-secret"))
//!     .with_environment(Environment::Sandbox)
//!     .build();
//! ```
//!
//! By default a `DarajaClient` connects to the production environment. To
//! connect to the Daraja sandbox, use
//! [`with_environment(Environment::Sandbox)`](crate::client::DarajaClientBuilder::with_environment).
//!
//! ## Initiate an STK push
//!
//! ```rust,no_run
//! # use daraja_rust::{DarajaClient, Error, MpesaApi, apis::express::ExpressSimulateRequest};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let mpesa: DarajaClient = unreachable!();
//! #
//! let res = mpesa
//!     .express_simulate(&ExpressSimulateRequest {
//!         business_short_code: 174379,
//!         password: "base64-encoded-password".to_string(),
//!         timestamp: "20240101120000".to_string(),
//!         transaction_type: "CustomerPayBillOnline".to_string(),
//!         amount: 10,
//!         party_a: 254708374149,
//!         party_b: 174379,
//!         phone_number: 254708374149,
//!         call_back_url: "https://example.com/callback".to_string(),
//!         account_reference: "CompanyX".to_string(),
//!         transaction_desc: "Payment".to_string(),
//!     })
//!     .await?;
//!
//! println!("Checkout request accepted: {}", res.checkout_request_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability decorators
//!
//! Every operation goes through the [`MpesaApi`](crate::service::MpesaApi)
//! trait, so cross-cutting concerns are added by wrapping the client in
//! decorators from the [`decorators`](crate::decorators) module:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use daraja_rust::{DarajaClient, MpesaApi, decorators::{LoggingService, MetricsService}};
//! # let mpesa: DarajaClient = unreachable!();
//! let service: Arc<dyn MpesaApi> = Arc::new(LoggingService::new(Arc::new(
//!     MetricsService::new(Arc::new(mpesa)).unwrap(),
//! )));
//! ```
//!
//! Decorators only observe; they never alter the request or the returned
//! response, so they compose in any order.

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub(crate) mod credential;
pub mod decorators;
pub mod error;
mod middlewares;
pub mod operation;
pub mod service;
mod validate;

pub use client::DarajaClient;
pub use error::Error;
pub use operation::Operation;
pub use service::MpesaApi;
