//! The fixed set of Daraja operations exposed by this SDK.

use reqwest::Method;

/// One named Daraja API capability.
///
/// Each operation carries its own immutable descriptor: HTTP method, endpoint
/// path relative to the configured base URL, and whether the request must be
/// completed with an RSA-encrypted security credential before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetToken,
    ExpressSimulate,
    ExpressQuery,
    B2CPayment,
    BusinessPayBill,
    AccountBalance,
    C2BRegisterUrl,
    C2BSimulate,
    GenerateQr,
    Reverse,
    TransactionStatus,
    RemitTax,
}

impl Operation {
    /// Stable name used by the observability decorators.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetToken => "GetToken",
            Operation::ExpressSimulate => "ExpressSimulate",
            Operation::ExpressQuery => "ExpressQuery",
            Operation::B2CPayment => "B2CPayment",
            Operation::BusinessPayBill => "BusinessPayBill",
            Operation::AccountBalance => "AccountBalance",
            Operation::C2BRegisterUrl => "C2BRegisterUrl",
            Operation::C2BSimulate => "C2BSimulate",
            Operation::GenerateQr => "GenerateQr",
            Operation::Reverse => "Reverse",
            Operation::TransactionStatus => "TransactionStatus",
            Operation::RemitTax => "RemitTax",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::GetToken => Method::GET,
            _ => Method::POST,
        }
    }

    /// Endpoint path relative to the environment base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::GetToken => "oauth/v1/generate?grant_type=client_credentials",
            Operation::ExpressSimulate => "mpesa/stkpush/v1/processrequest",
            Operation::ExpressQuery => "mpesa/stkpush/v1/query",
            Operation::B2CPayment => "mpesa/b2c/v1/paymentrequest",
            Operation::BusinessPayBill => "mpesa/b2b/v1/paymentrequest",
            Operation::AccountBalance => "mpesa/accountbalance/v1/query",
            Operation::C2BRegisterUrl => "mpesa/c2b/v1/registerurl",
            Operation::C2BSimulate => "mpesa/c2b/v1/simulate",
            Operation::GenerateQr => "mpesa/qrcode/v1/generate",
            Operation::Reverse => "mpesa/reversal/v1/request",
            Operation::TransactionStatus => "mpesa/transactionstatus/v1/query",
            Operation::RemitTax => "mpesa/b2b/v1/remittax",
        }
    }

    /// Whether the request must carry a freshly derived security credential.
    pub fn requires_security_credential(&self) -> bool {
        matches!(
            self,
            Operation::B2CPayment
                | Operation::BusinessPayBill
                | Operation::AccountBalance
                | Operation::Reverse
                | Operation::TransactionStatus
                | Operation::RemitTax
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
