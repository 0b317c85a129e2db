//! Transport error types

/// Errors that can occur while handing a request to an HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request method is not a valid HTTP method.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The action could not be resolved to a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network error while sending the request or reading the response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other client-specific failure.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Creates a client-specific error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
