//! The request executor.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FetchError, FetchOutcome, RequestSpec};

/// Optional shape of a failure body: `{ "error": "<text>" }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Sends [`RequestSpec`]s and folds every result into a [`FetchOutcome`].
///
/// One attempt per call: no retries, no timeout, no backoff.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    /// Creates a client with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Performs one round trip and decodes a success body into `T`.
    ///
    /// - no response: `Failure { status: 0, message: <transport error> }`
    /// - non-2xx: `Failure { status, message }`, where the message is the
    ///   body's string `error` field or `"HTTP Error: <status>"`
    /// - 2xx: `Success { status, payload }`, or `Failure { status, .. }` if
    ///   the body does not decode into `T`
    pub async fn request<T: DeserializeOwned>(&self, spec: &RequestSpec) -> FetchOutcome<T> {
        match self.try_request(spec).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(
                    method = %spec.method(),
                    url = %spec.url(),
                    error = %e,
                    "Request failed"
                );
                e.into()
            }
        }
    }

    async fn try_request<T: DeserializeOwned>(
        &self,
        spec: &RequestSpec,
    ) -> Result<FetchOutcome<T>, FetchError> {
        let headers = spec.header_map()?;
        let body = spec.encoded_body()?;

        tracing::debug!(method = %spec.method(), url = %spec.url(), "Sending request");
        let mut builder = self
            .http
            .request(spec.method().to_reqwest(), spec.url())
            .headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::transport(&e))?;
        let status = response.status();
        let code = status.as_u16();
        tracing::debug!(status = code, url = %spec.url(), "Received response");

        let bytes = response.bytes().await.map_err(|e| FetchError::Decode {
            status: code,
            message: FetchError::transport(&e).to_string(),
        });

        if !status.is_success() {
            // An unreadable or non-JSON error body only changes the message.
            let message = bytes
                .ok()
                .and_then(|bytes| serde_json::from_slice::<ErrorBody>(&bytes).ok())
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP Error: {code}"));
            return Ok(FetchOutcome::Failure {
                status: code,
                message,
            });
        }

        let bytes = bytes?;
        let payload = decode_body::<T>(&bytes).map_err(|message| FetchError::Decode {
            status: code,
            message,
        })?;

        Ok(FetchOutcome::Success {
            status: code,
            payload,
        })
    }
}

/// Decodes a success body. An empty body stands for JSON `null`, so only
/// payload types that accept `null` (`Value`, `Option<_>`, `()`) succeed.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
    if bytes.is_empty() {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| format!("empty body ({e})"));
    }
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

/// Sends `spec` with a fresh default client.
pub async fn request<T: DeserializeOwned>(spec: &RequestSpec) -> FetchOutcome<T> {
    FetchClient::new().request(spec).await
}
