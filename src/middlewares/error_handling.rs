use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the
/// Daraja gateway into [`Error::Api`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::Api(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from the Daraja gateway.
///
/// Error envelopes carry camelCase keys, unlike the PascalCase success
/// envelopes.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorResponseBody {
    request_id: Option<String>,
    error_code: Option<String>,
    error_message: Option<String>,
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status().as_u16();

    // Parse the response body as JSON; anything unrecognizable degrades to an
    // envelope carrying only the HTTP status
    let bytes = response.bytes().await?;
    let body: ErrorResponseBody = serde_json::from_slice(&bytes).unwrap_or(ErrorResponseBody {
        request_id: None,
        error_code: None,
        error_message: None,
    });

    Ok(ApiError {
        status,
        request_id: body.request_id,
        error_code: body.error_code,
        error_message: body.error_message,
    })
}
