use serde::{Deserialize, Serialize};

/// Request for the working account balance of a short code.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountBalanceRequest {
    pub initiator: String,
    /// Plaintext password of the initiator. Not serialized.
    #[serde(skip)]
    pub initiator_password: String,
    /// Filled by the dispatcher with the encrypted `initiator_password`.
    #[serde(default)]
    pub security_credential: String,
    /// Always `AccountBalance`.
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Organization short code being queried.
    pub party_a: u64,
    /// `1` (MSISDN), `2` (till number) or `4` (organization short code).
    pub identifier_type: u32,
    pub remarks: String,
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_time_out_url: String,
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}
