//! Structured logging for every operation outcome.

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
use std::{future::Future, sync::Arc, time::Instant};

/// Decorator emitting one log line per operation, with the operation name,
/// elapsed time and outcome.
pub struct LoggingService {
    inner: Arc<dyn MpesaApi>,
}

impl std::fmt::Debug for LoggingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingService").finish_non_exhaustive()
    }
}

impl LoggingService {
    pub fn new(inner: Arc<dyn MpesaApi>) -> Self {
        Self { inner }
    }

    async fn observe<T>(
        &self,
        operation: Operation,
        fut: impl Future<Output = Result<T, Error>> + Send,
    ) -> Result<T, Error> {
        let started = Instant::now();
        match fut.await {
            Ok(res) => {
                tracing::info!(
                    operation = operation.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "mpesa operation succeeded"
                );
                Ok(res)
            }
            Err(e) => {
                tracing::error!(
                    operation = operation.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "mpesa operation failed"
                );
                Err(e)
            }
        }
    }
}

#[async_trait]
impl MpesaApi for LoggingService {
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
