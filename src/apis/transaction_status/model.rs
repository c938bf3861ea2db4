use serde::{Deserialize, Serialize};

/// Request for the status of an earlier transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionStatusRequest {
    pub initiator: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// Always `TransactionStatusQuery`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Receipt number of the transaction being queried.
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// Set instead of `transaction_id` to query by the id assigned when the
    /// request was submitted.
    #[serde(rename = "OriginatorConversationID", skip_serializing_if = "Option::is_none")]
    pub originator_conversation_id: Option<String>,
    /// Organization or customer the transaction belongs to.
    pub party_a: u64,
    /// `1` (MSISDN), `2` (till number) or `4` (organization short code).
    pub identifier_type: u32,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    /// At most 100 characters.
    pub remarks: String,
    /// At most 100 characters.
    pub occasion: String,
}
