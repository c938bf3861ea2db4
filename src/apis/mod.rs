//! Request and response models for the Daraja APIs, grouped by API family.

use crate::{
    authenticator::Authenticator, client::Environment, credential::CredentialEncryptor,
    error::Error, operation::Operation,
};
use reqwest::header::CACHE_CONTROL;
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

pub mod account_balance;
pub mod auth;
pub mod b2b;
pub mod b2c;
pub mod c2b;
pub mod express;
pub mod qr;
pub mod reversal;
pub mod transaction_status;

pub(crate) struct DarajaClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) authenticator: Authenticator,
    pub(crate) encryptor: CredentialEncryptor,
    pub(crate) environment: Environment,
}

impl Debug for DarajaClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarajaClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl DarajaClientInner {
    /// Sends a validated, fully populated request and decodes the envelope
    /// paired with the operation.
    ///
    /// The bearer token is injected by the authentication middleware; the
    /// error-handling middleware turns gateway error envelopes into
    /// [`Error::Api`](crate::error::Error).
    pub(crate) async fn dispatch<Req, Resp>(
        &self,
        operation: Operation,
        request: &Req,
    ) -> Result<Resp, Error>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self
            .environment
            .base_url()
            .join(operation.path())
            .map_err(|e| Error::Other(e.into()))?;

        let res = self
            .client
            .request(operation.method(), url)
            .header(CACHE_CONTROL, "no-cache")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

/// Envelope returned by most write operations acknowledging that the request
/// was accepted for processing.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Default)]
pub struct ValidResponse {
    #[serde(rename = "OriginatorConversationID", default)]
    pub originator_conversation_id: String,
    #[serde(rename = "ConversationID", default)]
    pub conversation_id: String,
    #[serde(rename = "ResponseCode", default)]
    pub response_code: String,
    #[serde(rename = "ResponseDescription", default)]
    pub response_description: String,
}
