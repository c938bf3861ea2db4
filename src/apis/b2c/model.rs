use serde::{Deserialize, Serialize};

/// Request to pay an M-Pesa customer from an organization short code.
///
/// `initiator_password` never leaves the process: the dispatcher encrypts it
/// with the gateway certificate and places the result in
/// `security_credential` before the request is serialized.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct B2CPaymentRequest {
    /// Unique id of the request, echoed back in the result callback.
    #[serde(rename = "OriginatorConversationID", skip_serializing_if = "Option::is_none")]
    pub originator_conversation_id: Option<String>,
    /// API operator username set up on the portal.
    pub initiator_name: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// `BusinessPayment`, `SalaryPayment` or `PromotionPayment`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    pub amount: u64,
    /// Organization short code sending the funds.
    pub party_a: u64,
    /// Customer phone number receiving the funds, 12 digits.
    pub party_b: u64,
    /// At most 100 characters.
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    /// At most 100 characters.
    pub occasion: String,
}
