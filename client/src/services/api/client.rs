//! # API Client
//!
//! Shared plumbing for every endpoint: URL building, session token
//! attachment, request logging and response interpretation.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::ErrorResponse;
use uuid::Uuid;

use crate::config::{ClientConfig, RateKeyPolicy};
use crate::core::error::{AppError, Result};
use crate::core::service::{HttpRequest, HttpResponse, HttpTransport, TokenStore};

/// Storage key holding the session token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Request header carrying the session token.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Client for the backend and third-party APIs.
///
/// Holds no session state of its own: the token is read from the
/// [`TokenStore`] each time an authenticated request is built.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
    origin_url: String,
    currency_api_url: String,
    currency_api_key: String,
    rate_key: RateKeyPolicy,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            transport,
            tokens,
            origin_url: config.origin_url.clone(),
            currency_api_url: config.currency_api_url.clone(),
            currency_api_key: config.currency_api_key.clone(),
            rate_key: config.rate_key,
        }
    }

    /// Absolute backend URL for `path` (which starts with `/`).
    pub(crate) fn backend_url(&self, path: &str) -> String {
        format!("{}{}", self.origin_url, path)
    }

    pub(crate) fn currency_api_url(&self) -> &str {
        &self.currency_api_url
    }

    pub(crate) fn currency_api_key(&self) -> &str {
        &self.currency_api_key
    }

    pub(crate) fn rate_key(&self) -> RateKeyPolicy {
        self.rate_key
    }

    /// Attach the stored session token, if any.
    ///
    /// The token is not checked; an expired one surfaces as a server error.
    pub(crate) fn authorize(&self, request: HttpRequest) -> Result<HttpRequest> {
        match self.tokens.get(ACCESS_TOKEN_KEY)? {
            Some(token) => Ok(request.with_header(ACCESS_TOKEN_HEADER, token)),
            None => {
                tracing::debug!(url = %request.url, "No session token stored, sending without one");
                Ok(request)
            }
        }
    }

    /// Send a request and map non-2xx responses to [`AppError::Server`].
    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request_id = Uuid::new_v4();
        let method = request.method;
        let url = request.url.clone();
        let start = Instant::now();

        tracing::debug!(%request_id, %method, %url, "Sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(%request_id, %method, %url, error = %e, "Request network error");
            e
        })?;

        let duration = start.elapsed();

        if response.is_success() {
            tracing::debug!(
                %request_id,
                status = response.status,
                duration_ms = duration.as_millis() as u64,
                "Request succeeded"
            );
            Ok(response)
        } else {
            let message = serde_json::from_slice::<ErrorResponse>(&response.body)
                .ok()
                .and_then(|body| body.message);

            tracing::warn!(
                %request_id,
                %method,
                %url,
                status = response.status,
                duration_ms = duration.as_millis() as u64,
                message = message.as_deref().unwrap_or(""),
                "Request failed"
            );

            Err(AppError::Server {
                status: response.status,
                message,
            })
        }
    }
}

/// Decode a successful response body against the endpoint schema.
///
/// An empty body, a whitespace-only body and JSON `null` all count as an
/// absent body. `what` names the payload in error messages.
pub(crate) fn decode_body<T: DeserializeOwned>(response: &HttpResponse, what: &str) -> Result<T> {
    let value = present_body(response, what)?;
    serde_json::from_value(value)
        .map_err(|e| AppError::malformed(format!("unexpected {} response: {}", what, e)))
}

/// Parse a successful response body, requiring it to be present.
pub(crate) fn present_body(response: &HttpResponse, what: &str) -> Result<Value> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::malformed(format!("missing {} response body", what)));
    }

    let value: Value = serde_json::from_slice(&response.body)
        .map_err(|e| AppError::malformed(format!("{} response is not valid JSON: {}", what, e)))?;

    if value.is_null() {
        return Err(AppError::malformed(format!("missing {} response body", what)));
    }

    Ok(value)
}
