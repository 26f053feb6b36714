//! Shared request dispatch for endpoint functions.
//!
//! This module normalizes responses: a 2xx is handed back for the caller to
//! deserialize, anything else is read fully and converted into a typed
//! error. There is exactly one attempt per call; rate limiting and
//! transient failures are the caller's problem to surface, not to retry.

use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Header carrying the platform request id on responses.
const REQUEST_ID_HEADER: &str = "x-rh-insights-request-id";

/// Send a request and normalize the response.
///
/// Non-2xx responses become [`ClientError::ApiError`] carrying the status,
/// final URL, and the response body. When the body parses as the service's
/// error shape, the error details are joined for a cleaner message;
/// otherwise the raw body is kept.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => {
            let details: Vec<&str> = parsed
                .errors
                .iter()
                .filter_map(|e| e.detail.as_deref())
                .collect();
            if details.is_empty() {
                body
            } else {
                details.join("; ")
            }
        }
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
