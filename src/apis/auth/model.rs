use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Credentials used to authenticate against the Daraja APIs.
///
/// The consumer key and secret are issued when an app is created on the
/// Daraja portal. They are read once at SDK construction and used only for
/// access token acquisition.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) consumer_key: String,
    pub(crate) consumer_secret: Token,
}

impl Credentials {
    pub fn new<K: Into<String>, S: Into<Token>>(consumer_key: K, consumer_secret: S) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Returns a reference to the consumer key stored in this [`Credentials`](crate::apis::auth::Credentials).
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }
}

/// Successful response of an authentication request.
///
/// The gateway serializes `expires_in` as a JSON string, so it is kept
/// verbatim instead of being parsed into a number.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: String,
}

/// Wrapper for a secret string that makes it harder to accidentally expose
/// secrets and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use daraja_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`...
/// assert_eq!(token.expose_secret(), "supersecret");
///
/// // ... Or if serialized with Serde
/// let serialized = serde_json::to_string(&token).unwrap();
/// assert!(serialized.contains("supersecret"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
