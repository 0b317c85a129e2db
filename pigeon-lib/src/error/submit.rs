//! Submission failure types

use super::TransportError;

/// Why a submission ended on the error path.
#[derive(Debug, thiserror::Error)]
pub enum SubmitFailure {
    /// The endpoint reported a failing `status_code` (400 or 500).
    #[error("Endpoint reported status {0}")]
    Status(i64),

    /// The response body could not be decoded.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the decode error.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitFailure {
    /// Creates a malformed response failure with the raw body.
    pub fn malformed(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Returns the reported status code if the endpoint answered with one.
    pub fn status_code(&self) -> Option<i64> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
