use crate::error::{CryptoError, Error};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use openssl::{rsa::Padding, x509::X509};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;

/// Derives security credentials for operations acting on behalf of an
/// initiator.
///
/// The gateway publishes an X.509 certificate per environment; the
/// initiator's plaintext password is RSA-encrypted with the certificate's
/// public key and base64-encoded into the credential string. The certificate
/// is fetched anew on every call and the credential is never cached: it lives
/// only as long as the request struct it is written into.
pub(crate) struct CredentialEncryptor {
    client: ClientWithMiddleware,
    certificate_url: Url,
}

impl std::fmt::Debug for CredentialEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialEncryptor")
            .field("certificate_url", &self.certificate_url)
            .finish_non_exhaustive()
    }
}

impl CredentialEncryptor {
    pub fn new(client: ClientWithMiddleware, certificate_url: Url) -> Self {
        Self {
            client,
            certificate_url,
        }
    }

    /// Fetches the environment certificate and encrypts `initiator_password`
    /// into a base64 security credential.
    #[tracing::instrument(name = "Generate Security Credential", level = "debug", skip_all)]
    pub async fn encrypt(&self, initiator_password: &str) -> Result<String, Error> {
        let pem = self
            .client
            .get(self.certificate_url.clone())
            .send()
            .await
            .map_err(|e| CryptoError::CertificateFetch(Box::new(e.into())))?
            .bytes()
            .await
            .map_err(|e| CryptoError::CertificateFetch(Box::new(Error::Http(e))))?;

        let certificate = X509::from_pem(&pem).map_err(CryptoError::CertificateParse)?;
        let public_key = certificate
            .public_key()
            .map_err(CryptoError::CertificateParse)?;
        // Fails for certificates carrying a non-RSA key
        let rsa = public_key.rsa().map_err(CryptoError::CertificateParse)?;

        let mut ciphertext = vec![0; rsa.size() as usize];
        let len = rsa
            .public_encrypt(
                initiator_password.as_bytes(),
                &mut ciphertext,
                Padding::PKCS1,
            )
            .map_err(CryptoError::Encrypt)?;
        ciphertext.truncate(len);

        Ok(BASE64.encode(&ciphertext))
    }
}
