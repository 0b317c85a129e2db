//! Configuration error types

/// Errors raised while constructing a [`SubmissionConfig`](crate::SubmissionConfig)
/// or binding a [`Pigeon`](crate::Pigeon) to its form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required option was absent or empty.
    #[error(
        "The '{field}' field is invalid. For the object to instantiate successfully, \
         the initializer requires a '{field}' field."
    )]
    MissingField { field: &'static str },

    /// The configured method is not a valid HTTP method token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The form selector could not be parsed.
    #[error("Invalid form selector: {0:?}")]
    InvalidSelector(String),

    /// No form matched the selector.
    #[error("No form matches selector {0:?}")]
    FormNotFound(String),
}

impl ConfigError {
    /// Creates a new missing field error.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
