use serde::{Deserialize, Serialize};

/// Request to reverse a completed M-Pesa transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReverseRequest {
    pub initiator: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// Always `TransactionReversal`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Receipt number of the transaction being reversed.
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    pub amount: u64,
    /// Organization that receives the reversed funds.
    pub receiver_party: u64,
    // The misspelling is the gateway's, not ours.
    #[serde(rename = "RecieverIdentifierType")]
    pub receiver_identifier_type: u32,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    /// At most 100 characters.
    pub remarks: String,
    /// At most 100 characters.
    pub occasion: String,
}
