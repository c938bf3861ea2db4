//! Module containing the main Daraja API client.

use crate::{
    apis::{auth::Credentials, DarajaClientInner},
    authenticator::Authenticator,
    common,
    credential::CredentialEncryptor,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// Daraja environment the client talks to.
///
/// The environment selects both the API base URL and the public key
/// certificate used to derive security credentials. For a custom base URL the
/// certificate follows the gateway convention: a URL containing `sandbox`
/// selects the sandbox certificate, anything else the production one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
    Custom { base_url: Url },
}

impl Environment {
    /// Base URL for all API requests in this environment.
    pub fn base_url(&self) -> Url {
        match self {
            Environment::Production => Url::parse(common::DEFAULT_PRODUCTION_BASE_URL).unwrap(),
            Environment::Sandbox => Url::parse(common::DEFAULT_SANDBOX_BASE_URL).unwrap(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }

    /// URL of the public key certificate used for security credentials.
    pub fn certificate_url(&self) -> Url {
        let url = if self.base_url().as_str().contains("sandbox") {
            common::SANDBOX_CERTIFICATE_URL
        } else {
            common::PRODUCTION_CERTIFICATE_URL
        };
        Url::parse(url).unwrap()
    }

    /// Builds a custom environment rooted at the given base URL.
    ///
    /// Mostly useful to point the client at a mock server in tests.
    pub fn from_base_url(base_url: Url) -> Self {
        Environment::Custom { base_url }
    }
}

/// Client for the Safaricom M-Pesa Daraja APIs.
///
/// All operations are exposed through the
/// [`MpesaApi`](crate::service::MpesaApi) trait, which this client
/// implements. Construction is cheap and the client is `Clone`: clones share
/// the same HTTP connection pool and configuration.
#[derive(Debug, Clone)]
pub struct DarajaClient {
    pub(crate) inner: Arc<DarajaClientInner>,
}

impl DarajaClient {
    /// Builds a new [`DarajaClient`](crate::client::DarajaClient) with the default configuration.
    pub fn new(credentials: Credentials) -> DarajaClient {
        DarajaClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`DarajaClient`](crate::client::DarajaClient).
    pub fn builder(credentials: Credentials) -> DarajaClientBuilder {
        DarajaClientBuilder::new(credentials)
    }
}

/// Builder for a [`DarajaClient`](crate::client::DarajaClient).
#[derive(Debug)]
pub struct DarajaClientBuilder {
    client: reqwest::Client,
    environment: Environment,
    credentials: Credentials,
    certificate_url: Option<Url>,
}

impl DarajaClientBuilder {
    /// Creates a new builder to configure a [`DarajaClient`](crate::client::DarajaClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            environment: Environment::Production,
            credentials,
            certificate_url: None,
        }
    }

    /// Consumes the builder and builds a new [`DarajaClient`](crate::client::DarajaClient).
    pub fn build(self) -> DarajaClient {
        // Client used for token acquisition and certificate fetches.
        // It must not carry the authentication middleware: the token endpoint
        // authenticates with HTTP Basic auth and the certificate endpoint is
        // public.
        let plain_client = build_client_with_middleware(self.client.clone(), None);

        let authenticator = Authenticator::new(
            plain_client.clone(),
            self.environment.base_url(),
            self.credentials,
        );

        let encryptor = CredentialEncryptor::new(
            plain_client,
            self.certificate_url
                .unwrap_or_else(|| self.environment.certificate_url()),
        );

        // Build the actual API client with per-request bearer injection
        let api_client = build_client_with_middleware(
            self.client,
            Some(AuthenticationMiddleware {
                authenticator: authenticator.clone(),
            }),
        );

        DarajaClient {
            inner: Arc::new(DarajaClientInner {
                client: api_client,
                authenticator,
                encryptor,
                environment: self.environment,
            }),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the environment to connect to.
    ///
    /// Defaults to: [`Environment::Production`](crate::client::Environment)
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the certificate URL used for security credentials.
    ///
    /// Defaults to the certificate published for the configured environment.
    pub fn with_certificate_url(mut self, certificate_url: Url) -> Self {
        self.certificate_url = Some(certificate_url);
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware)
        .with(ErrorHandlingMiddleware);

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
