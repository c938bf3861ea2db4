//! Composable wrappers around [`MpesaApi`](crate::service::MpesaApi)
//! implementations.
//!
//! Each decorator implements `MpesaApi` itself and forwards every operation
//! to the wrapped service, adding one cross-cutting behaviour on the way:
//! structured logging, Prometheus metrics, tracing spans or request
//! persistence. Decorators compose in any order:
//!
//! ```no_run
//! use std::sync::Arc;
//! use daraja_rust::{
//!     decorators::{logging::LoggingService, tracing::TracingService},
//!     service::MpesaApi,
//!     DarajaClient,
//! };
//! # use daraja_rust::apis::auth::Credentials;
//!
//! let client = DarajaClient::new(Credentials::new("key", "secret"));
//! let service: Arc<dyn MpesaApi> =
//!     Arc::new(TracingService::new(Arc::new(LoggingService::new(Arc::new(client)))));
//! ```

pub mod logging;
pub mod metrics;
pub mod store;
pub mod tracing;

pub use self::logging::LoggingService;
pub use self::metrics::MetricsService;
pub use self::store::{OperationStore, StoreService};
pub use self::tracing::TracingService;
