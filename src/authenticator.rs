use crate::{
    apis::auth::{Credentials, TokenResponse},
    error::Error,
    operation::Operation,
};
use reqwest::{header::CACHE_CONTROL, Url};
use reqwest_middleware::ClientWithMiddleware;

/// Fetches access tokens from the Daraja OAuth endpoint.
///
/// The gateway hands out short lived bearer tokens. This SDK requests a fresh
/// token for every outgoing call and never caches or tracks expiry, matching
/// the gateway's documented usage: token acquisition is cheap relative to the
/// operations it authorizes, and a stale token is never presented.
#[derive(Clone)]
pub(crate) struct Authenticator {
    client: ClientWithMiddleware,
    base_url: Url,
    credentials: Credentials,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.credentials.consumer_key())
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(client: ClientWithMiddleware, base_url: Url, credentials: Credentials) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    /// Requests a new access token using HTTP Basic authentication with the
    /// configured consumer key and secret.
    ///
    /// Any transport, gateway or decode failure is wrapped in
    /// [`Error::Auth`](crate::error::Error) so callers can tell an
    /// authentication failure apart from a failure of the operation itself.
    #[tracing::instrument(name = "Get Access Token", level = "debug", skip(self))]
    pub async fn get_access_token(&self) -> Result<TokenResponse, Error> {
        let url = self
            .base_url
            .join(Operation::GetToken.path())
            .map_err(|e| Error::Other(e.into()))?;

        let response = self
            .client
            .get(url)
            .basic_auth(
                self.credentials.consumer_key(),
                Some(self.credentials.consumer_secret.expose_secret()),
            )
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| Error::Auth(Box::new(e.into())))?;

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Auth(Box::new(Error::Http(e))))?;

        tracing::debug!("Got new access token");

        Ok(token)
    }
}
