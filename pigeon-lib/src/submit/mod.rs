//! Submission controller.
//!
//! [`Pigeon`] ties the pieces together: validate the bound form, prompt for
//! every failure, or encode the form, send it, and report the endpoint's
//! verdict through the configured handlers.
//!
//! # Example
//!
//! ```ignore
//! use pigeon_lib::{Pigeon, SubmissionConfig};
//! use pigeon_lib::transport::ReqwestClient;
//!
//! let config = SubmissionConfig::builder()
//!     .form_element("#contact")
//!     .prompt(|field, message| eprintln!("{}: {}", field.name, message))
//!     .build()?;
//!
//! let pigeon = Pigeon::new(config, &document, ReqwestClient::with_base_url("https://example.com")?)?;
//! let outcome = pigeon.submit().await;
//! ```

mod config;
mod response;
mod state;

pub use config::ErrorHandler;
pub use config::PromptHandler;
pub use config::SubmissionConfig;
pub use config::SubmissionConfigBuilder;
pub use config::SubmissionSettings;
pub use config::SuccessHandler;
pub use response::Verdict;
pub use response::interpret;
pub use state::SubmissionState;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::watch;

use crate::error::ConfigError;
use crate::error::SubmitFailure;
use crate::form::FieldDescriptor;
use crate::form::FormAccessor;
use crate::form::FormLocator;
use crate::serialize;
use crate::transport::HttpClient;
use crate::transport::SubmitRequest;
use crate::validation;
use crate::validation::ValidationResult;

/// A request to submit the form, usually raised by a submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    /// Name of the control that raised the event, if known.
    pub source: Option<String>,
}

impl SubmitEvent {
    /// Creates an event with no known source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an event raised by the named control.
    pub fn from_control(name: impl Into<String>) -> Self {
        Self {
            source: Some(name.into()),
        }
    }
}

/// How a submission attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationResult),
    /// The endpoint accepted the submission.
    Succeeded {
        /// The `status_code` reported in the response body.
        status_code: i64,
    },
    /// The endpoint rejected the submission or it never arrived.
    Failed(SubmitFailure),
}

impl SubmitOutcome {
    /// Returns `true` if the endpoint accepted the submission.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns `true` if validation stopped the attempt.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Validates a bound form and submits it.
///
/// Each call to [`submit`](Pigeon::submit) is one attempt: nothing is
/// retried, cancelled or timed out. Field values are read from the form at
/// the start of every attempt.
pub struct Pigeon {
    config: SubmissionConfig,
    form: Arc<dyn FormAccessor>,
    client: Arc<dyn HttpClient>,
    state: watch::Sender<SubmissionState>,
}

impl Pigeon {
    /// Binds to the form named by the configuration's selector.
    ///
    /// Fails with [`ConfigError::FormNotFound`] when the locator has no
    /// matching form.
    pub fn new<C>(config: SubmissionConfig, locator: &dyn FormLocator, client: C) -> Result<Self, ConfigError>
    where
        C: HttpClient + 'static,
    {
        let selector = config.form_element();
        let form = locator.locate(selector).ok_or_else(|| {
            let err = ConfigError::FormNotFound(selector.to_string());
            log::error!("{}", err);
            err
        })?;

        Ok(Self::with_form(config, form, Arc::new(client)))
    }

    /// Binds to an already resolved form.
    pub fn with_form(config: SubmissionConfig, form: Arc<dyn FormAccessor>, client: Arc<dyn HttpClient>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            config,
            form,
            client,
            state,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SubmissionConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Receiver notified on every state change.
    pub fn watch_state(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Names of the form's submit controls, for wiring up [`SubmitEvent`]s.
    pub fn submit_controls(&self) -> Vec<String> {
        self.form
            .fields()
            .into_iter()
            .filter(|field| field.is_submit())
            .map(|field| field.name)
            .collect()
    }

    /// Runs a validation pass without submitting.
    ///
    /// Clears the error marker from every field but does not add any.
    pub fn validate(&self) -> ValidationResult {
        validation::validate(self.form.as_ref(), self.config.error_class())
    }

    /// Performs one submission attempt.
    pub async fn submit(&self) -> SubmitOutcome {
        let current = self.state();
        if current.is_busy() {
            log::warn!("Submit requested while {}; starting another attempt", current);
        }
        self.transition(SubmissionState::Validating);

        let marker = self.config.error_class();
        let (fields, result) = validation::validate_snapshot(self.form.as_ref(), marker);

        if result.is_invalid() {
            self.transition(SubmissionState::Rejected);
            for failure in result.failures() {
                self.form.add_marker(&failure.field, marker);
                self.config.prompt(&failure.field, &failure.message);
            }
            self.transition(SubmissionState::Idle);
            return SubmitOutcome::Rejected(result);
        }

        self.transition(SubmissionState::Serializing);
        let body = serialize::serialize(&fields);

        self.transition(SubmissionState::Sending);
        let request = SubmitRequest {
            method: self.config.method().to_string(),
            action: self.config.action().to_string(),
            body,
            content_type: serialize::FORM_CONTENT_TYPE.to_string(),
            asynchronous: self.config.asynchronous(),
        };

        self.transition(SubmissionState::AwaitingResponse);
        let verdict = match self.client.send(request).await {
            Ok(response) => {
                log::debug!("Response received with HTTP status {}", response.status);
                interpret(&response.body)
            }
            Err(e) => Err(SubmitFailure::from(e)),
        };

        let outcome = match verdict {
            Ok(Verdict::Success(status_code)) => {
                self.transition(SubmissionState::Succeeded);
                self.config.succeed();
                SubmitOutcome::Succeeded { status_code }
            }
            Ok(Verdict::Error(status_code)) => self.fail(&fields, SubmitFailure::Status(status_code)),
            Err(failure) => self.fail(&fields, failure),
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    /// Performs one attempt per received event until the sender side closes.
    ///
    /// Returns the number of attempts made. Events arriving while an attempt
    /// is in flight wait for it to finish.
    pub async fn run(&self, mut events: mpsc::Receiver<SubmitEvent>) -> usize {
        let mut attempts = 0;
        while let Some(event) = events.recv().await {
            log::debug!("Submit requested by {:?}", event.source);
            self.submit().await;
            attempts += 1;
        }
        attempts
    }

    fn fail(&self, fields: &[FieldDescriptor], failure: SubmitFailure) -> SubmitOutcome {
        log::warn!("Submission failed: {}", failure);
        self.transition(SubmissionState::Failed);
        self.config.fail(fields);
        SubmitOutcome::Failed(failure)
    }

    fn transition(&self, next: SubmissionState) {
        let previous = self.state.send_replace(next);
        if next.is_terminal() {
            log::info!("Submission {}", next);
        } else {
            log::debug!("Submission state {} -> {}", previous, next);
        }
    }
}
