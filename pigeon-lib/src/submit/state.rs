use std::fmt;

/// Where a submission attempt currently stands.
///
/// ```text
/// Idle → Validating → Rejected
///                   → Serializing → Sending → AwaitingResponse → Succeeded | Failed
/// ```
///
/// `Rejected`, `Succeeded` and `Failed` end an attempt; the controller then
/// returns to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionState {
    /// Ready for a submit request.
    #[default]
    Idle,
    /// Running the validation pass.
    Validating,
    /// Validation failed; failures are being prompted.
    Rejected,
    /// Encoding the form body.
    Serializing,
    /// Handing the request to the HTTP client.
    Sending,
    /// Waiting for the HTTP client to complete.
    AwaitingResponse,
    /// The endpoint accepted the submission.
    Succeeded,
    /// The endpoint or the transport reported an error.
    Failed,
}

impl SubmissionState {
    /// Returns `true` for the states that end an attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Succeeded | Self::Failed)
    }

    /// Returns `true` while an attempt is running.
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Rejected => "rejected",
            Self::Serializing => "serializing",
            Self::Sending => "sending",
            Self::AwaitingResponse => "awaiting response",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
