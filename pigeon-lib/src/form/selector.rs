//! Form selectors and lookup

use std::fmt;
use std::sync::Arc;

use super::FormAccessor;
use crate::error::ConfigError;

/// A parsed form selector.
///
/// - `#contact` looks a form up by id
/// - `.signup` takes the first form carrying the class
/// - anything else takes the first form with that tag name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSelector {
    /// Lookup by identifier.
    Id(String),
    /// Lookup by class, first match wins.
    Class(String),
    /// Lookup by tag name, first match wins.
    Tag(String),
}

impl FormSelector {
    /// Parses a selector string.
    pub fn parse(selector: &str) -> Result<Self, ConfigError> {
        let selector = selector.trim();
        let parsed = if let Some(id) = selector.strip_prefix('#') {
            Self::Id(id.to_string())
        } else if let Some(class) = selector.strip_prefix('.') {
            Self::Class(class.to_string())
        } else {
            Self::Tag(selector.to_string())
        };

        if parsed.name().is_empty() {
            return Err(ConfigError::InvalidSelector(selector.to_string()));
        }
        Ok(parsed)
    }

    /// The id, class, or tag this selector looks for.
    pub fn name(&self) -> &str {
        match self {
            Self::Id(name) | Self::Class(name) | Self::Tag(name) => name,
        }
    }
}

impl fmt::Display for FormSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{}", id),
            Self::Class(class) => write!(f, ".{}", class),
            Self::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Resolves selectors to bound forms.
pub trait FormLocator {
    /// Returns the form matching `selector`, if any.
    fn locate(&self, selector: &FormSelector) -> Option<Arc<dyn FormAccessor>>;
}
