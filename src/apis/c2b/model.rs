use serde::{Deserialize, Serialize};

/// Request to register validation and confirmation URLs for a short code.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct C2BRegisterUrlRequest {
    pub short_code: u64,
    /// What the gateway should do when the validation URL is unreachable:
    /// `Completed` or `Cancelled`.
    pub response_type: String,
    #[serde(rename = "ConfirmationURL")]
    pub confirmation_url: String,
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
}

/// Sandbox-only request simulating a customer paying a short code.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct C2BSimulateRequest {
    pub short_code: u64,
    /// `CustomerPayBillOnline` or `CustomerBuyGoodsOnline`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    pub amount: u64,
    /// Phone number of the paying customer.
    pub msisdn: u64,
    pub bill_ref_number: String,
}
