use serde::{Deserialize, Serialize};

/// Request for a dynamic M-Pesa QR code.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateQrRequest {
    pub merchant_name: String,
    /// Transaction reference shown to the payer.
    pub ref_no: String,
    pub amount: u64,
    /// Transaction type of the QR code: `SB` (send to business), `SM`
    /// (send money), `PB` (paybill), `WA` (withdraw at agent) or `BG`
    /// (buy goods).
    pub trx_code: String,
    /// Credit party identifier: paybill number, till number, agent number
    /// or phone number, depending on `trx_code`.
    #[serde(rename = "CPI")]
    pub cpi: String,
    /// Size of the QR code image in pixels.
    pub size: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct GenerateQrResponse {
    #[serde(rename = "ResponseCode", default)]
    pub response_code: String,
    #[serde(rename = "RequestID", default)]
    pub request_id: String,
    #[serde(rename = "ResponseDescription", default)]
    pub response_description: String,
    /// Base64 PNG of the generated QR code.
    #[serde(rename = "QRCode", default)]
    pub qr_code: String,
}
