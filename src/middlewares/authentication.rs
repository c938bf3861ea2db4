use crate::authenticator::Authenticator;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the access token into outgoing HTTP requests.
///
/// A fresh token is requested for every outgoing request; see
/// [`Authenticator`](crate::authenticator::Authenticator).
pub struct AuthenticationMiddleware {
    pub(crate) authenticator: Authenticator,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Request an access token from the authenticator
        let token = self.authenticator.get_access_token().await?;

        // Inject the access token as a header
        if !token.access_token.is_empty() {
            let mut header_value =
                HeaderValue::from_str(&format!("Bearer {}", token.access_token))
                    .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
            header_value.set_sensitive(true);
            req.headers_mut().insert(AUTHORIZATION, header_value);
        }

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::auth::Credentials;
    use reqwest::Url;
    use reqwest_middleware::ClientBuilder;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    static MOCK_ACCESS_TOKEN: &str = "mock-access-token";

    fn mock_authenticator(base_url: &str) -> Authenticator {
        Authenticator::new(
            reqwest::Client::new().into(),
            Url::parse(base_url).unwrap(),
            Credentials::new("mock-consumer-key", "mock-consumer-secret"),
        )
    }

    #[tokio::test]
    async fn access_token_is_attached_to_outgoing_request() {
        // Setup mock server
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth/v1/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": MOCK_ACCESS_TOKEN,
                "expires_in": "3599"
            })))
            .expect(1) // Expect exactly one call
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .and(header(
                "Authorization",
                format!("Bearer {}", MOCK_ACCESS_TOKEN).as_str(), // Match the expected token
            ))
            .respond_with(ResponseTemplate::new(200))
            .expect(1) // Expect exactly one call
            .mount(&mock_server)
            .await;

        // Setup a client using the auth middleware
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(AuthenticationMiddleware {
                authenticator: mock_authenticator(&mock_server.uri()),
            })
            .build();

        // Send a test request
        client
            .get(format!("{}/test", mock_server.uri()))
            .send()
            .await
            .unwrap();

        // Expectations are verified here before the mock server is dropped
    }
}
