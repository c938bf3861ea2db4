use serde::{Deserialize, Serialize};

/// Request to initiate an STK push on a customer's handset.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressSimulateRequest {
    /// Organization short code receiving the funds.
    pub business_short_code: u64,
    /// Base64 of `short code + passkey + timestamp`.
    pub password: String,
    /// Timestamp the password was generated at, `YYYYMMDDHHmmss`.
    pub timestamp: String,
    /// `CustomerPayBillOnline` or `CustomerBuyGoodsOnline`.
    pub transaction_type: String,
    pub amount: u64,
    /// Phone number sending money, 12 digits.
    pub party_a: u64,
    /// Short code receiving money.
    pub party_b: u64,
    /// Phone number to receive the STK prompt, usually the same as `party_a`.
    pub phone_number: u64,
    #[serde(rename = "CallBackURL")]
    pub call_back_url: String,
    /// Shown to the customer as the account being paid, at most 12 characters.
    pub account_reference: String,
    /// Free-form description, at most 13 characters.
    pub transaction_desc: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExpressSimulateResponse {
    #[serde(rename = "MerchantRequestID", default)]
    pub merchant_request_id: String,
    #[serde(rename = "CheckoutRequestID", default)]
    pub checkout_request_id: String,
    #[serde(rename = "ResponseCode", default)]
    pub response_code: String,
    #[serde(rename = "ResponseDescription", default)]
    pub response_description: String,
    #[serde(rename = "CustomerMessage", default)]
    pub customer_message: String,
}

/// Request to check the status of an earlier STK push.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressQueryRequest {
    pub business_short_code: u64,
    pub password: String,
    pub timestamp: String,
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ExpressQueryResponse {
    #[serde(rename = "ResponseCode", default)]
    pub response_code: String,
    #[serde(rename = "ResponseDescription", default)]
    pub response_description: String,
    #[serde(rename = "MerchantRequestID", default)]
    pub merchant_request_id: String,
    #[serde(rename = "CheckoutRequestID", default)]
    pub checkout_request_id: String,
    /// Final result of the push, e.g. `1032` when the user cancelled.
    #[serde(rename = "ResultCode", default)]
    pub result_code: String,
    #[serde(rename = "ResultDesc", default)]
    pub result_desc: String,
}
