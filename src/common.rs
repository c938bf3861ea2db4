// Default URLs
pub static DEFAULT_PRODUCTION_BASE_URL: &str = "https://api.safaricom.co.ke";
pub static DEFAULT_SANDBOX_BASE_URL: &str = "https://sandbox.safaricom.co.ke";

// Public key certificates used to generate security credentials.
// The sandbox one is picked whenever the configured base URL contains "sandbox".
pub static PRODUCTION_CERTIFICATE_URL: &str =
    "https://developer.safaricom.co.ke/sites/default/files/cert/cert_prod/cert.cer";
pub static SANDBOX_CERTIFICATE_URL: &str =
    "https://developer.safaricom.co.ke/sites/default/files/cert/cert_sandbox/cert.cer";
