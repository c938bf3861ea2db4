//! Tracing spans around every operation.

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
use std::{future::Future, sync::Arc};
use tracing::Instrument;

/// Decorator running every operation inside a `mpesa_operation` span.
///
/// The HTTP layer already traces individual requests; this span groups the
/// whole operation, including credential derivation and the token call made
/// by the authentication middleware.
pub struct TracingService {
    inner: Arc<dyn MpesaApi>,
}

impl std::fmt::Debug for TracingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingService").finish_non_exhaustive()
    }
}

impl TracingService {
    pub fn new(inner: Arc<dyn MpesaApi>) -> Self {
        Self { inner }
    }

    async fn observe<T>(
        &self,
        operation: Operation,
        fut: impl Future<Output = Result<T, Error>> + Send,
    ) -> Result<T, Error> {
        let span = tracing::info_span!("mpesa_operation", operation = operation.name());
        fut.instrument(span).await
    }
}

#[async_trait]
impl MpesaApi for TracingService {
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
