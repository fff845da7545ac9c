//! TypeScriptEx Fetch
//!
//! A small typed HTTP wrapper. Every request, whatever happens on the wire,
//! resolves to exactly one [`FetchOutcome`]: `Success` with the decoded
//! payload, or `Failure` with a status code and a message. Nothing is
//! returned as an `Err` and nothing panics past [`FetchClient::request`].
//!
//! # Example
//!
//! ```no_run
//! use tsex_fetch::{FetchClient, FetchOutcome, RequestSpec};
//!
//! # async fn example() {
//! let client = FetchClient::new();
//! let spec = RequestSpec::get("https://jsonplaceholder.typicode.com/posts/1");
//!
//! match client.request::<serde_json::Value>(&spec).await {
//!     FetchOutcome::Success { status, payload } => println!("{status}: {payload}"),
//!     FetchOutcome::Failure { status, message } => println!("{status}: {message}"),
//! }
//! # }
//! ```

mod client;
pub mod posts;

pub use client::{request, FetchClient};
pub use posts::{describe_posts, NewPost, Post, PostsClient, DEFAULT_BASE_URL};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use thiserror::Error;

/// Content type sent with every request unless the caller overrides it.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Message used when a transport error carries no description.
pub const UNKNOWN_FETCH_ERROR: &str = "Unknown fetch error (network?)";

// ============================================================================
// Error Types
// ============================================================================

/// Internal failure reasons, converted into [`FetchOutcome::Failure`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// No response was received (DNS, connection, invalid URL).
    #[error("{0}")]
    Transport(String),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Body(String),

    /// A success response whose body did not decode into the expected type.
    #[error("Invalid response body: {message}")]
    Decode {
        /// The response status code.
        status: u16,
        /// The decoding error.
        message: String,
    },
}

impl FetchError {
    /// Builds a transport error from a `reqwest` error, including its causes.
    #[must_use]
    pub fn transport(err: &reqwest::Error) -> Self {
        Self::Transport(error_chain(err))
    }

    /// The status code reported for this failure; 0 when no response was
    /// received.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Decode { status, .. } => *status,
            Self::Transport(_) | Self::InvalidHeader { .. } | Self::Body(_) => 0,
        }
    }
}

/// Joins an error and its sources with `": "`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !parts.iter().any(|part| part.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.retain(|part| !part.is_empty());

    if parts.is_empty() {
        UNKNOWN_FETCH_ERROR.to_string()
    } else {
        parts.join(": ")
    }
}

// ============================================================================
// FetchOutcome
// ============================================================================

/// The result of one HTTP round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    /// A 2xx response whose body decoded into `T`.
    Success {
        /// The response status code.
        status: u16,
        /// The decoded body.
        payload: T,
    },
    /// Anything else.
    Failure {
        /// The response status code, or 0 if no response was received.
        status: u16,
        /// What went wrong.
        message: String,
    },
}

impl<T> FetchOutcome<T> {
    /// Creates a `Failure` outcome.
    #[must_use]
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            message: message.into(),
        }
    }

    /// Returns `true` for `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The status code of either variant.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    /// The payload, if successful.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Success { payload, .. } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// The failure message, if failed.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// Converts into a `Result` of the payload and `(status, message)`.
    ///
    /// # Errors
    ///
    /// Returns `(status, message)` for a `Failure`.
    pub fn into_result(self) -> Result<T, (u16, String)> {
        match self {
            Self::Success { payload, .. } => Ok(payload),
            Self::Failure { status, message } => Err((status, message)),
        }
    }
}

impl<T> From<FetchError> for FetchOutcome<T> {
    fn from(err: FetchError) -> Self {
        Self::failure(err.status(), err.to_string())
    }
}

// ============================================================================
// RequestSpec
// ============================================================================

/// HTTP methods supported by [`RequestSpec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET` (default).
    #[default]
    Get,
    /// `POST`.
    Post,
    /// `PUT`.
    Put,
    /// `PATCH`.
    Patch,
    /// `DELETE`.
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    url: String,
    method: HttpMethod,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    body_error: Option<String>,
}

impl RequestSpec {
    /// A `GET` request for `url` with no extra headers and no body.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::default(),
            headers: Vec::new(),
            body: None,
            body_error: None,
        }
    }

    /// Shorthand for [`RequestSpec::new`].
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    /// A `POST` request for `url`.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(url).with_method(HttpMethod::Post)
    }

    /// Sets the method.
    #[must_use]
    pub const fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header. Later headers replace earlier ones with the same
    /// (case-insensitive) name, including the JSON content-type default.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a JSON body from any serializable value.
    ///
    /// A value that fails to serialize makes the request resolve to a
    /// `Failure` with status 0 without anything being sent.
    #[must_use]
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = Some(value);
                self.body_error = None;
            }
            Err(e) => {
                self.body = None;
                self.body_error = Some(e.to_string());
            }
        }
        self
    }

    /// The target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Headers as they will be sent: the JSON content-type default
    /// overlaid with the caller's headers, caller winning on collision.
    #[must_use]
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let mut merged = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        for (name, value) in &self.headers {
            merged.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            merged.push((name.clone(), value.clone()));
        }
        merged
    }

    fn header_map(&self) -> Result<HeaderMap, FetchError> {
        let mut map = HeaderMap::new();
        for (name, value) in self.merged_headers() {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    /// The serialized body; `None` when absent or JSON `null`.
    fn encoded_body(&self) -> Result<Option<String>, FetchError> {
        if let Some(reason) = &self.body_error {
            return Err(FetchError::Body(reason.clone()));
        }
        match &self.body {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => serde_json::to_string(value)
                .map(Some)
                .map_err(|e| FetchError::Body(e.to_string())),
        }
    }
}
