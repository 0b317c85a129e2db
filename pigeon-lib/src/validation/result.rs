use std::fmt;

use crate::form::FieldDescriptor;
use crate::rules::RuleName;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Snapshot of the offending field.
    pub field: FieldDescriptor,
    /// The rule that failed.
    pub rule: RuleName,
    /// Message for the user.
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.rule)
    }
}

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// No rule failed.
    #[default]
    Valid,
    /// One or more rules failed, in field then clause order.
    Invalid(Vec<ValidationFailure>),
}

impl ValidationResult {
    /// Builds a result from collected failures. An empty list is `Valid`.
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        if failures.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(failures)
        }
    }

    /// Check if every rule passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any rule failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All failures, in order.
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failures) => failures,
        }
    }

    /// The first failure, if any.
    pub fn first_failure(&self) -> Option<&ValidationFailure> {
        self.failures().first()
    }

    /// Failures belonging to the field called `name`.
    pub fn failures_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ValidationFailure> + 'a {
        self.failures().iter().filter(move |f| f.field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        let result = ValidationResult::from_failures(Vec::new());
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
        assert!(result.first_failure().is_none());
    }

    #[test]
    fn test_failures_for() {
        let failure = |name: &str, rule| ValidationFailure {
            field: FieldDescriptor::text(name, ""),
            rule,
            message: format!("{} failed", name),
        };
        let result = ValidationResult::from_failures(vec![
            failure("a", RuleName::Required),
            failure("b", RuleName::Required),
            failure("a", RuleName::MinLen),
        ]);

        assert!(result.is_invalid());
        let rules: Vec<_> = result.failures_for("a").map(|f| f.rule).collect();
        assert_eq!(rules, vec![RuleName::Required, RuleName::MinLen]);
    }
}
