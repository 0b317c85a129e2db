//! HTTP transport.
//!
//! The controller hands a fully built [`SubmitRequest`] to an [`HttpClient`]
//! and waits for the raw response. [`ReqwestClient`] is the bundled
//! implementation.

mod reqwest_client;

pub use reqwest_client::ReqwestClient;

use async_trait::async_trait;

use crate::error::TransportError;

/// A form submission ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    /// HTTP method, e.g. `POST`.
    pub method: String,
    /// Endpoint, absolute or relative to the client's base URL.
    pub action: String,
    /// Encoded form body.
    pub body: String,
    /// Value of the `Content-type` header.
    pub content_type: String,
    /// Whether the client may complete the request without blocking the
    /// caller. `false` is the legacy synchronous mode.
    pub asynchronous: bool,
}

/// Raw response handed back by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status of the response.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// An asynchronous HTTP client.
///
/// Implementations send exactly one request per call. Retries, timeouts and
/// cancellation are out of scope; a future that never resolves leaves the
/// caller waiting.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use pigeon_lib::error::TransportError;
/// use pigeon_lib::transport::{HttpClient, SubmitRequest, TransportResponse};
///
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl HttpClient for AlwaysOk {
///     async fn send(&self, _request: SubmitRequest) -> Result<TransportResponse, TransportError> {
///         Ok(TransportResponse::new(200, r#"{"status_code": 200}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends `request` and returns the response once it completes.
    async fn send(&self, request: SubmitRequest) -> Result<TransportResponse, TransportError>;
}
