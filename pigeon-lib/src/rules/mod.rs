//! Validation rules.
//!
//! A field's rule spec is a `;`-separated list of clauses, each `name` or
//! `name:argument`:
//!
//! ```text
//! required;min-len:3;max-len:40;only-alphabets
//! ```
//!
//! [`parse`] turns the spec into [`ParsedRule`]s and [`ParsedRule::evaluate`]
//! checks a value against one of them.

mod evaluate;
mod parser;

pub use evaluate::luhn_valid;
pub use parser::parse;

use std::fmt;

/// The rules understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// Value must be non-empty.
    Required,
    /// Value length must not exceed the argument.
    MaxLen,
    /// Value length must reach the argument.
    MinLen,
    /// ASCII digits only.
    Digits,
    /// ASCII digits and spaces only.
    DigitsSpace,
    /// ASCII letters and spaces only.
    OnlyAlphabets,
    /// Contains both `@` and `.`.
    Email,
    /// `http://`, `https://` or `ftp://` followed by something with a `.`.
    Url,
    /// ASCII letters, digits and spaces only.
    Alphanumeric,
    /// Up to ten digits, or `+` and twelve digits.
    Phone,
    /// Up to sixteen digits passing the Luhn checksum.
    CreditCard,
}

impl RuleName {
    /// Every rule, in declaration order.
    pub const ALL: [RuleName; 11] = [
        Self::Required,
        Self::MaxLen,
        Self::MinLen,
        Self::Digits,
        Self::DigitsSpace,
        Self::OnlyAlphabets,
        Self::Email,
        Self::Url,
        Self::Alphanumeric,
        Self::Phone,
        Self::CreditCard,
    ];

    /// Looks a rule up by its spec name. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(name))
    }

    /// The name used in rule specs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MaxLen => "max-len",
            Self::MinLen => "min-len",
            Self::Digits => "digits",
            Self::DigitsSpace => "digits-space",
            Self::OnlyAlphabets => "only-alphabets",
            Self::Email => "email",
            Self::Url => "url",
            Self::Alphanumeric => "alphanumeric",
            Self::Phone => "phone",
            Self::CreditCard => "credit-card",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clause of a rule spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// Which rule to apply.
    pub name: RuleName,
    /// Trimmed argument, for `max-len` and `min-len`.
    pub argument: Option<String>,
}

impl ParsedRule {
    /// Creates a rule without an argument.
    pub fn new(name: RuleName) -> Self {
        Self {
            name,
            argument: None,
        }
    }

    /// Creates a rule with an argument.
    pub fn with_argument(name: RuleName, argument: impl Into<String>) -> Self {
        Self {
            name,
            argument: Some(argument.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(RuleName::from_name("MAX-LEN"), Some(RuleName::MaxLen));
        assert_eq!(RuleName::from_name(" credit-card "), Some(RuleName::CreditCard));
        assert_eq!(RuleName::from_name("zip"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for rule in RuleName::ALL {
            assert_eq!(RuleName::from_name(rule.as_str()), Some(rule));
        }
    }
}
