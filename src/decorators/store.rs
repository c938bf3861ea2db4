//! Persistence of submitted requests.

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
use serde::Serialize;
use std::{future::Future, sync::Arc};

/// Sink for submitted operation requests.
///
/// Implementations typically write to a database or an audit log. Recording
/// happens after the gateway accepts the request; a failure to record is
/// logged and never fails the operation itself.
#[async_trait]
pub trait OperationStore: Send + Sync {
    async fn record(
        &self,
        operation: Operation,
        request: serde_json::Value,
    ) -> Result<(), anyhow::Error>;
}

/// Decorator persisting every accepted request to an [`OperationStore`].
///
/// The recorded payload is the request as it serializes over the wire, minus
/// fields that never serialize: in particular, plaintext initiator passwords
/// are not part of the recorded payload.
pub struct StoreService {
    inner: Arc<dyn MpesaApi>,
    store: Arc<dyn OperationStore>,
}

impl std::fmt::Debug for StoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreService").finish_non_exhaustive()
    }
}

impl StoreService {
    pub fn new(inner: Arc<dyn MpesaApi>, store: Arc<dyn OperationStore>) -> Self {
        Self { inner, store }
    }

    async fn observe<T, R>(
        &self,
        operation: Operation,
        request: &R,
        fut: impl Future<Output = Result<T, Error>> + Send,
    ) -> Result<T, Error>
    where
        R: Serialize + Sync,
    {
        let res = fut.await?;

        match serde_json::to_value(request) {
            Ok(value) => {
                if let Err(e) = self.store.record(operation, value).await {
                    tracing::warn!(
                        operation = operation.name(),
                        error = %e,
                        "failed to record operation"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    operation = operation.name(),
                    error = %e,
                    "failed to serialize operation for recording"
                );
            }
        }

        Ok(res)
    }
}

#[async_trait]
impl MpesaApi for StoreService {
    // Tokens are not persisted
    async fn get_token(&self) -> Result<TokenResponse, Error> {
        self.inner.get_token().await
    }

    async fn express_simulate(
        &self,
        request: &ExpressSimulateRequest,
    ) -> Result<ExpressSimulateResponse, Error> {
        self.observe(
            Operation::ExpressSimulate,
            request,
            self.inner.express_simulate(request),
        )
        .await
    }

    async fn express_query(
        &self,
        request: &ExpressQueryRequest,
    ) -> Result<ExpressQueryResponse, Error> {
        self.observe(Operation::ExpressQuery, request, self.inner.express_query(request))
            .await
    }

    async fn b2c_payment(&self, request: &B2CPaymentRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::B2CPayment, request, self.inner.b2c_payment(request))
            .await
    }

    async fn business_pay_bill(
        &self,
        request: &BusinessPayBillRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(
            Operation::BusinessPayBill,
            request,
            self.inner.business_pay_bill(request),
        )
        .await
    }

    async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(
            Operation::AccountBalance,
            request,
            self.inner.account_balance(request),
        )
        .await
    }

    async fn c2b_register_url(
        &self,
        request: &C2BRegisterUrlRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(
            Operation::C2BRegisterUrl,
            request,
            self.inner.c2b_register_url(request),
        )
        .await
    }

    async fn c2b_simulate(&self, request: &C2BSimulateRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::C2BSimulate, request, self.inner.c2b_simulate(request))
            .await
    }

    async fn generate_qr(
        &self,
        request: &GenerateQrRequest,
    ) -> Result<GenerateQrResponse, Error> {
        self.observe(Operation::GenerateQr, request, self.inner.generate_qr(request))
            .await
    }

    async fn reverse(&self, request: &ReverseRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::Reverse, request, self.inner.reverse(request))
            .await
    }

    async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<ValidResponse, Error> {
        self.observe(
            Operation::TransactionStatus,
            request,
            self.inner.transaction_status(request),
        )
        .await
    }

    async fn remit_tax(&self, request: &RemitTaxRequest) -> Result<ValidResponse, Error> {
        self.observe(Operation::RemitTax, request, self.inner.remit_tax(request))
            .await
    }
}
