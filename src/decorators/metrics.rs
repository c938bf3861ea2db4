//! Prometheus metrics for every operation.

use crate::{
    apis::{
        account_balance::AccountBalanceRequest,
        auth::TokenResponse,
        b2b::{BusinessPayBillRequest, RemitTaxRequest},
        b2c::B2CPaymentRequest,
        c2b::{C2BRegisterUrlRequest, C2BSimulateRequest},
        express::{
            ExpressQueryRequest, ExpressQueryResponse, ExpressSimulateRequest,
            ExpressSimulateResponse,
        },
        qr::{GenerateQrRequest, GenerateQrResponse},
        reversal::ReverseRequest,
        transaction_status::TransactionStatusRequest,
        ValidResponse,
    },
    error::Error,
    operation::Operation,
    service::MpesaApi,
};
use async_trait::async_trait;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use reqwest::Url;
use std::{future::Future, sync::Arc};

/// Decorator recording a request counter and a duration histogram per
/// operation.
///
/// Metrics live in the service's own [`Registry`], exposed through
/// [`registry()`](MetricsService::registry) for scrape-style setups. With
/// [`with_push_endpoint`](MetricsService::with_push_endpoint) the service
/// additionally pushes the text exposition after every operation; push
/// failures are logged and never affect the operation result.
pub struct MetricsService {
    inner: Arc<dyn MpesaApi>,
    registry: Registry,
    requests: IntCounterVec,
    duration: HistogramVec,
    push_endpoint: Option<Url>,
    push_client: reqwest::Client,
}

impl std::fmt::Debug for MetricsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsService")
            .field("push_endpoint", &self.push_endpoint)
            .finish_non_exhaustive()
    }
}

impl MetricsService {
    pub fn new(inner: Arc<dyn MpesaApi>) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("mpesa_requests_total", "Total number of M-Pesa operations"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(requests.clone()))?;

        let duration = HistogramVec::new(
            HistogramOpts::new(
                "mpesa_request_duration_seconds",
                "Duration of M-Pesa operations in seconds",
            ),
            &["operation"],
        )?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            inner,
            registry,
            requests,
            duration,
            push_endpoint: None,
            push_client: reqwest::Client::new(),
        })
    }

    /// Pushes the text exposition to the given endpoint after every
    /// operation.
    pub fn with_push_endpoint(mut self, endpoint: Url) -> Self {
        self.push_endpoint = Some(endpoint);
        self
    }

    /// Registry holding this service's metrics.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    async fn observe<T>(
        &self,
        operation: Operation,
        fut: impl Future<Output = Result<T, Error>> + Send,
    ) -> Result<T, Error> {
        let timer = self
            .duration
            .with_label_values(&[operation.name()])
            .start_timer();
        let res = fut.await;
        timer.observe_duration();

        let outcome = if res.is_ok() { "success" } else { "error" };
        self.requests
            .with_label_values(&[operation.name(), outcome])
            .inc();

        self.push().await;

        res
    }

    async fn push(&self) {
        let Some(endpoint) = &self.push_endpoint else {
            return;
        };

        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::warn!(error = %e, "failed to encode metrics for push");
            return;
        }

        let res = self
            .push_client
            .post(endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, encoder.format_type())
            .body(buffer)
            .send()
            .await;

        match res {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = %response.status(), "metrics push rejected");
            }
            Err(e) => tracing::warn!(error = %e, "metrics push failed"),
            Ok(_) => {}
        }
    }
}

#[async_trait]
impl MpesaApi for MetricsService {
    async fn get_token(&self) -> Result<TokenResponse, Error> {
        self.observe(Operation::GetToken, self.inner.get_token()).await
    }

    async fn express_simulate(
        &self,
        request: &ExpressSimulateRequest,
    ) -> Result<ExpressSimulateResponse, Error> {
        self.observe(Operation::ExpressSimulate, self.inner.express_simulate(request))
            .await
    }

    async fn express_query(
        &self,
        request: &ExpressQueryRequest,
    ) -> Result<ExpressQueryResponse, Error> {
        self.observe(Operation::ExpressQuery, self.inner.express_query(request))
            .await
    }

    async fn b2c_payment(&self, request: &B2CPaymentRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::B2CPayment, self.inner.b2c_payment(request))
            .await
    }

    async fn business_pay_bill(
        &self,
        request: &BusinessPayBillRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(Operation::BusinessPayBill, self.inner.business_pay_bill(request))
            .await
    }

    async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(Operation::AccountBalance, self.inner.account_balance(request))
            .await
    }

    async fn c2b_register_url(
        &self,
        request: &C2BRegisterUrlRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(Operation::C2BRegisterUrl, self.inner.c2b_register_url(request))
            .await
    }

    async fn c2b_simulate(&self, request: &C2BSimulateRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::C2BSimulate, self.inner.c2b_simulate(request))
            .await
    }

    async fn generate_qr(
        &self,
        request: &GenerateQrRequest,
    ) -> Result<GenerateQrResponse, Error> {
        self.observe(Operation::GenerateQr, self.inner.generate_qr(request))
            .await
    }

    async fn reverse(&self, request: &ReverseRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::Reverse, self.inner.reverse(request)).await
    }

    async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(Operation::TransactionStatus, self.inner.transaction_status(request))
            .await
    }

    async fn remit_tax(&self, request: &RemitTaxRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::RemitTax, self.inner.remit_tax(request)).await
    }
}
