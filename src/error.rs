//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the Daraja client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request field violated one of the per-operation business rules.
    ///
    /// Validation runs before anything else; a request failing validation
    /// never reaches the network.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Reqwest error: transport failures and response decode failures.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Structured error envelope returned by the Daraja gateway.
    #[error("{0}")]
    Api(#[from] ApiError),
    /// Access token acquisition failed, wrapping the underlying cause.
    #[error("authentication failed: {0}")]
    Auth(#[source] Box<Error>),
    /// Security credential generation failed.
    #[error("security credential error: {0}")]
    Crypto(#[from] CryptoError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::Http(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Daraja gateway error envelope.
///
/// The gateway reports application-level failures as
/// `{ requestId, errorCode, errorMessage }`, usually inside a non-2xx response.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the gateway.
    pub status: u16,
    /// Gateway-assigned identifier for the failed request.
    pub request_id: Option<String>,
    /// Machine-readable error code, e.g. `404.001.03`.
    pub error_code: Option<String>,
    /// Human-readable explanation of the failure.
    pub error_message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Daraja API error {}: {}: {}",
            self.status,
            self.error_code.as_deref().unwrap_or("unknown"),
            self.error_message.as_deref().unwrap_or("no message"),
        )?;

        if let Some(ref request_id) = self.request_id {
            write!(f, " (request id: {})", request_id)?;
        }

        Ok(())
    }
}

/// Failures while deriving a security credential from the gateway certificate.
#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("failed to fetch the public key certificate: {0}")]
    CertificateFetch(#[source] Box<Error>),
    /// Malformed PEM/DER, or a certificate whose public key is not RSA.
    #[error("malformed public key certificate: {0}")]
    CertificateParse(#[source] openssl::error::ErrorStack),
    #[error("RSA encryption failed: {0}")]
    Encrypt(#[source] openssl::error::ErrorStack),
}

/// First business rule violated by a request, checked in the order the rules
/// are defined for each operation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid command id {0:?}")]
    InvalidCommandId(String),
    #[error("invalid transaction type {0:?}")]
    InvalidTransactionType(String),
    #[error("invalid response type {0:?}")]
    InvalidResponseType(String),
    /// Phone numbers must be 12 digits, country code included.
    #[error("invalid phone number {0}")]
    InvalidPhoneNumber(u64),
    /// Short codes must be 5 to 7 digits.
    #[error("invalid short code {0}")]
    InvalidShortCode(u64),
    #[error("account reference longer than 12 characters")]
    InvalidAccountReference,
    #[error("transaction description longer than 13 characters")]
    InvalidTransactionDesc,
    #[error("remarks longer than 100 characters")]
    InvalidRemarks,
    #[error("occasion longer than 100 characters")]
    InvalidOccasion,
    #[error("invalid identifier type {0}")]
    InvalidIdentifierType(u32),
    #[error("invalid URL {0:?}")]
    InvalidUrl(String),
}
