//! Submission configuration

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::form::FieldDescriptor;
use crate::form::FormSelector;

/// Called once per validation failure with the field and its message.
pub type PromptHandler = Arc<dyn Fn(&FieldDescriptor, &str) + Send + Sync>;

/// Called when the endpoint accepts a submission.
pub type SuccessHandler = Arc<dyn Fn() + Send + Sync>;

/// Called with the submitted fields when a submission fails.
pub type ErrorHandler = Arc<dyn Fn(&[FieldDescriptor]) + Send + Sync>;

/// Plain-data part of the configuration.
///
/// Deserializable so hosts can keep it in a config file. Missing keys take
/// their defaults.
///
/// # Example
///
/// ```
/// use pigeon_lib::submit::SubmissionSettings;
///
/// let settings: SubmissionSettings =
///     serde_json::from_str(r##"{"action": "/feedback", "form_element": "#feedback"}"##).unwrap();
/// assert_eq!(settings.method, "POST");
/// assert_eq!(settings.action, "/feedback");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
    /// HTTP method.
    ///
    /// Default: `POST`
    pub method: String,

    /// Endpoint the form is sent to.
    ///
    /// Default: `/contact`
    pub action: String,

    /// Whether the request may complete without blocking the caller.
    ///
    /// Default: `true`
    #[serde(alias = "async")]
    pub asynchronous: bool,

    /// Marker applied to fields that fail validation.
    ///
    /// Default: `error`
    #[serde(alias = "errorClass")]
    pub error_class: String,

    /// Selector of the bound form. Required.
    #[serde(alias = "formElement")]
    pub form_element: Option<String>,
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            action: "/contact".to_string(),
            asynchronous: true,
            error_class: "error".to_string(),
            form_element: None,
        }
    }
}

/// Immutable configuration of a [`Pigeon`](crate::Pigeon).
///
/// Built with [`SubmissionConfig::builder`].
#[derive(Clone)]
pub struct SubmissionConfig {
    method: String,
    action: String,
    asynchronous: bool,
    error_class: String,
    form_element: FormSelector,
    prompt: PromptHandler,
    on_success: SuccessHandler,
    on_error: ErrorHandler,
}

impl SubmissionConfig {
    /// Creates a builder with default settings.
    pub fn builder() -> SubmissionConfigBuilder {
        SubmissionConfigBuilder::new()
    }

    /// HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Endpoint.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Whether the legacy synchronous mode is off.
    pub fn asynchronous(&self) -> bool {
        self.asynchronous
    }

    /// Marker for failing fields.
    pub fn error_class(&self) -> &str {
        &self.error_class
    }

    /// Selector of the bound form.
    pub fn form_element(&self) -> &FormSelector {
        &self.form_element
    }

    pub(crate) fn prompt(&self, field: &FieldDescriptor, message: &str) {
        (self.prompt)(field, message)
    }

    pub(crate) fn succeed(&self) {
        (self.on_success)()
    }

    pub(crate) fn fail(&self, fields: &[FieldDescriptor]) {
        (self.on_error)(fields)
    }
}

impl fmt::Debug for SubmissionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionConfig")
            .field("method", &self.method)
            .field("action", &self.action)
            .field("asynchronous", &self.asynchronous)
            .field("error_class", &self.error_class)
            .field("form_element", &self.form_element)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SubmissionConfig`].
///
/// `prompt` and `form_element` are required; everything else has a
/// default.
///
/// # Example
///
/// ```
/// use pigeon_lib::SubmissionConfig;
///
/// let config = SubmissionConfig::builder()
///     .form_element("#contact")
///     .prompt(|field, message| eprintln!("{}: {}", field.name, message))
///     .on_success(|| println!("sent"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.method(), "POST");
/// assert_eq!(config.action(), "/contact");
/// ```
pub struct SubmissionConfigBuilder {
    settings: SubmissionSettings,
    prompt: Option<PromptHandler>,
    on_success: Option<SuccessHandler>,
    on_error: Option<ErrorHandler>,
}

impl SubmissionConfigBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            settings: SubmissionSettings::default(),
            prompt: None,
            on_success: None,
            on_error: None,
        }
    }

    /// Replaces all plain settings at once.
    pub fn settings(mut self, settings: SubmissionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.settings.method = method.into();
        self
    }

    /// Sets the endpoint.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.settings.action = action.into();
        self
    }

    /// Allows or forbids blocking the caller while sending.
    pub fn asynchronous(mut self, asynchronous: bool) -> Self {
        self.settings.asynchronous = asynchronous;
        self
    }

    /// Sets the marker applied to failing fields.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.settings.error_class = class.into();
        self
    }

    /// Sets the selector of the bound form.
    pub fn form_element(mut self, selector: impl Into<String>) -> Self {
        self.settings.form_element = Some(selector.into());
        self
    }

    /// Sets the failure prompt.
    pub fn prompt<F>(mut self, prompt: F) -> Self
    where
        F: Fn(&FieldDescriptor, &str) + Send + Sync + 'static,
    {
        self.prompt = Some(Arc::new(prompt));
        self
    }

    /// Sets the success handler.
    pub fn on_success<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_success = Some(Arc::new(handler));
        self
    }

    /// Sets the error handler.
    pub fn on_error<F>(mut self, handler: F) -> Self
    where
        F: Fn(&[FieldDescriptor]) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(handler));
        self
    }

    /// Validates the options and builds the configuration.
    ///
    /// Fails when `method`, `action` or `form_element` is empty, or no
    /// prompt was given. The failure is also logged.
    pub fn build(self) -> Result<SubmissionConfig, ConfigError> {
        self.try_build().inspect_err(|e| log::error!("{}", e))
    }

    fn try_build(self) -> Result<SubmissionConfig, ConfigError> {
        let SubmissionSettings {
            method,
            action,
            asynchronous,
            error_class,
            form_element,
        } = self.settings;

        let method = method.trim().to_string();
        if method.is_empty() {
            return Err(ConfigError::missing("method"));
        }
        if reqwest::Method::from_bytes(method.as_bytes()).is_err() {
            return Err(ConfigError::InvalidMethod(method));
        }

        let action = action.trim().to_string();
        if action.is_empty() {
            return Err(ConfigError::missing("action"));
        }

        let prompt = self.prompt.ok_or(ConfigError::missing("prompt"))?;

        let form_element = match form_element.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::missing("formElement")),
            Some(selector) => FormSelector::parse(selector)?,
        };

        Ok(SubmissionConfig {
            method,
            action,
            asynchronous,
            error_class,
            form_element,
            prompt,
            on_success: self.on_success.unwrap_or_else(|| Arc::new(default_success)),
            on_error: self.on_error.unwrap_or_else(|| Arc::new(default_error)),
        })
    }
}

impl Default for SubmissionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_success() {
    log::info!("Form submitted successfully.");
}

fn default_error(fields: &[FieldDescriptor]) {
    log::warn!(
        "There were errors in submitting the form ({} fields).",
        fields.len()
    );
}
