use serde::{Deserialize, Serialize};

/// Request to pay from one organization's paybill to another.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BusinessPayBillRequest {
    pub initiator: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// Always `BusinessPayBill`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Identifier type of the sending short code; the gateway accepts only `4`.
    pub sender_identifier_type: u32,
    // The misspelling is the gateway's, not ours.
    #[serde(rename = "RecieverIdentifierType")]
    pub receiver_identifier_type: u32,
    pub amount: u64,
    /// Short code the payment is made from.
    pub party_a: u64,
    /// Short code the payment is made to.
    pub party_b: u64,
    /// Account number to be credited, at most 12 characters.
    pub account_reference: String,
    /// Phone number of the consumer initiating the payment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<u64>,
    /// At most 100 characters.
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}

/// Request to remit tax to the Kenya Revenue Authority.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RemitTaxRequest {
    pub initiator: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// Always `PayTaxToKRA`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    pub sender_identifier_type: u32,
    #[serde(rename = "RecieverIdentifierType")]
    pub receiver_identifier_type: u32,
    pub amount: u64,
    /// Short code the tax is remitted from.
    pub party_a: u64,
    /// KRA short code.
    pub party_b: u64,
    /// Payment registration number issued by KRA.
    pub account_reference: String,
    /// At most 100 characters.
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}
