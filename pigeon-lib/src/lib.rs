//! Pigeon form library
//!
//! Declarative validation and asynchronous submission for HTML-like forms.
//! Fields carry a rule spec such as `"required;max-len:40"`; the controller
//! validates them, prompts on failures, and otherwise posts the form as an
//! `application/x-www-form-urlencoded` body.

pub mod error;
pub mod form;
pub mod rules;
pub mod serialize;
pub mod submit;
pub mod transport;
pub mod validation;

pub use form::FieldDescriptor;
pub use form::FieldKind;
pub use form::FormAccessor;
pub use form::FormLocator;
pub use submit::Pigeon;
pub use submit::SubmissionConfig;
pub use submit::SubmitOutcome;
pub use validation::ValidationResult;
