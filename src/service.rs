//! Operation-level interface to the Daraja gateway.
//!
//! Every gateway operation is a method on [`MpesaApi`], implemented by
//! [`DarajaClient`](crate::client::DarajaClient). Having a single trait for
//! all operations lets callers compose cross-cutting behaviour by wrapping a
//! client in [decorators](crate::decorators) that implement the same trait.

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
    client::DarajaClient,
    error::Error,
    operation::Operation,
    validate,
};
use async_trait::async_trait;

/// The full set of M-Pesa operations supported by this crate.
///
/// Each method validates the request against the operation's business rules
/// before anything touches the network, derives a security credential where
/// the operation requires one, and decodes the response envelope paired with
/// the operation.
#[async_trait]
pub trait MpesaApi: Send + Sync {
    /// Requests a fresh OAuth access token.
    ///
    /// The client already acquires a token for every outgoing API call, so
    /// this is only needed to talk to the gateway outside of this crate.
    async fn get_token(&self) -> Result<TokenResponse, Error>;

    /// Initiates an M-Pesa Express (STK push) payment on a customer handset.
    async fn express_simulate(
        &self,
        request: &ExpressSimulateRequest,
    ) -> Result<ExpressSimulateResponse, Error>;

    /// Checks the status of an earlier M-Pesa Express payment.
    async fn express_query(
        &self,
        request: &ExpressQueryRequest,
    ) -> Result<ExpressQueryResponse, Error>;

    /// Pays an M-Pesa customer from an organization short code.
    async fn b2c_payment(&self, request: &B2CPaymentRequest) -> Result<ValidResponse, Error>;

    /// Pays another organization's paybill from an organization short code.
    async fn business_pay_bill(
        &self,
        request: &BusinessPayBillRequest,
    ) -> Result<ValidResponse, Error>;

    /// Queries the working account balance of a short code.
    async fn account_balance(&self, request: &AccountBalanceRequest)
        -> Result<ValidResponse, Error>;

    /// Registers validation and confirmation URLs for a short code.
    async fn c2b_register_url(
        &self,
        request: &C2BRegisterUrlRequest,
    ) -> Result<ValidResponse, Error>;

    /// Simulates a customer-to-business payment. Sandbox only.
    async fn c2b_simulate(&self, request: &C2BSimulateRequest) -> Result<ValidResponse, Error>;

    /// Generates a dynamic M-Pesa QR code.
    async fn generate_qr(&self, request: &GenerateQrRequest)
        -> Result<GenerateQrResponse, Error>;

    /// Reverses a completed M-Pesa transaction.
    async fn reverse(&self, request: &ReverseRequest) -> Result<ValidResponse, Error>;

    /// Queries the status of an earlier transaction.
    async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<ValidResponse, Error>;

    /// Remits tax to the Kenya Revenue Authority.
    async fn remit_tax(&self, request: &RemitTaxRequest) -> Result<ValidResponse, Error>;
}

#[async_trait]
impl MpesaApi for DarajaClient {
    async fn get_token(&self) -> Result<TokenResponse, Error> {
        self.inner.authenticator.get_access_token().await
    }

    async fn express_simulate(
        &self,
        request: &ExpressSimulateRequest,
    ) -> Result<ExpressSimulateResponse, Error> {
        validate::express_simulate(request)?;
        self.inner.dispatch(Operation::ExpressSimulate, request).await
    }

    async fn express_query(
        &self,
        request: &ExpressQueryRequest,
    ) -> Result<ExpressQueryResponse, Error> {
        validate::express_query(request)?;
        self.inner.dispatch(Operation::ExpressQuery, request).await
    }

    async fn b2c_payment(&self, request: &B2CPaymentRequest) -> Result<ValidResponse, Error> {
        validate::b2c_payment(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner.dispatch(Operation::B2CPayment, &request).await
    }

    async fn business_pay_bill(
        &self,
        request: &BusinessPayBillRequest,
    ) -> Result<ValidResponse, Error> {
        validate::business_pay_bill(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner.dispatch(Operation::BusinessPayBill, &request).await
    }

    async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> Result<ValidResponse, Error> {
        validate::account_balance(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner.dispatch(Operation::AccountBalance, &request).await
    }

    async fn c2b_register_url(
        &self,
        request: &C2BRegisterUrlRequest,
    ) -> Result<ValidResponse, Error> {
        validate::c2b_register_url(request)?;
        self.inner.dispatch(Operation::C2BRegisterUrl, request).await
    }

    async fn c2b_simulate(&self, request: &C2BSimulateRequest) -> Result<ValidResponse, Error> {
        validate::c2b_simulate(request)?;
        self.inner.dispatch(Operation::C2BSimulate, request).await
    }

    async fn generate_qr(
        &self,
        request: &GenerateQrRequest,
    ) -> Result<GenerateQrResponse, Error> {
        validate::generate_qr(request)?;
        self.inner.dispatch(Operation::GenerateQr, request).await
    }

    async fn reverse(&self, request: &ReverseRequest) -> Result<ValidResponse, Error> {
        validate::reverse(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner.dispatch(Operation::Reverse, &request).await
    }

    async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<ValidResponse, Error> {
        validate::transaction_status(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner
            .dispatch(Operation::TransactionStatus, &request)
            .await
    }

    async fn remit_tax(&self, request: &RemitTaxRequest) -> Result<ValidResponse, Error> {
        validate::remit_tax(request)?;
        let mut request = request.clone();
        request.security_credential = self
            .inner
            .encryptor
            .encrypt(&request.initiator_password)
            .await?;
        self.inner.dispatch(Operation::RemitTax, &request).await
    }
}
