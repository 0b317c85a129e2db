//! Validation passes over a form.

use super::ValidationFailure;
use super::ValidationResult;
use crate::form::FieldDescriptor;
use crate::form::FormAccessor;
use crate::rules;

/// Validates the current contents of `form`.
///
/// Clears `marker` from every field before checking, so markers left by an
/// earlier pass never outlive it. Values are read once, at the start of the
/// pass.
pub fn validate(form: &dyn FormAccessor, marker: &str) -> ValidationResult {
    validate_snapshot(form, marker).1
}

/// Same as [`validate`], also returning the field snapshot the pass ran on.
pub fn validate_snapshot(form: &dyn FormAccessor, marker: &str) -> (Vec<FieldDescriptor>, ValidationResult) {
    let fields = form.fields();
    for field in &fields {
        form.clear_marker(field, marker);
    }
    let result = validate_fields(&fields);
    (fields, result)
}

/// Validates a snapshot of fields without touching any markers.
pub fn validate_fields(fields: &[FieldDescriptor]) -> ValidationResult {
    let mut failures = Vec::new();

    for field in fields {
        let Some(spec) = field.rules.as_deref() else {
            continue;
        };

        for rule in rules::parse(spec) {
            if let Err(message) = rule.evaluate(&field.name, &field.value) {
                failures.push(ValidationFailure {
                    field: field.clone(),
                    rule: rule.name,
                    message,
                });
            }
        }
    }

    log::debug!(
        "Validated {} fields, {} failures",
        fields.len(),
        failures.len()
    );

    ValidationResult::from_failures(failures)
}
