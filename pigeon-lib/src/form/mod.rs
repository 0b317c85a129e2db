//! Form fields and the traits used to reach them.
//!
//! The core never touches a real UI. A host exposes its form through
//! [`FormAccessor`] and lets the controller find it through [`FormLocator`].

mod memory;
mod selector;

pub use memory::MemoryDocument;
pub use memory::MemoryForm;
pub use selector::FormLocator;
pub use selector::FormSelector;

use serde::Deserialize;

/// Kind of an input, derived from its `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    /// A text-like input.
    #[default]
    Text,
    /// A submit control. Never serialized.
    Submit,
    /// Any other input type.
    Other,
}

impl FieldKind {
    /// Maps a `type` attribute to a kind, ignoring case.
    pub fn from_type(ty: &str) -> Self {
        let ty = ty.trim();
        if ty.eq_ignore_ascii_case("submit") {
            Self::Submit
        } else if ty.eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Other
        }
    }
}

impl From<String> for FieldKind {
    fn from(ty: String) -> Self {
        Self::from_type(&ty)
    }
}

/// Snapshot of one input in the bound form.
///
/// Values are copied out of the accessor at the start of every pass, so a
/// descriptor never changes while it is being validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    /// The input's `name`.
    pub name: String,
    /// Current value.
    #[serde(default)]
    pub value: String,
    /// Input kind.
    #[serde(default, rename = "type")]
    pub kind: FieldKind,
    /// Raw rule spec, e.g. `"required;max-len:40"`.
    #[serde(default)]
    pub rules: Option<String>,
}

impl FieldDescriptor {
    /// Creates a text field without rules.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Text,
            rules: None,
        }
    }

    /// Creates a submit control.
    pub fn submit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            kind: FieldKind::Submit,
            rules: None,
        }
    }

    /// Attaches a rule spec.
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Sets the kind.
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns `true` for submit controls.
    pub fn is_submit(&self) -> bool {
        self.kind == FieldKind::Submit
    }
}

/// Access to a bound form.
///
/// Implementations own the real inputs. The controller only reads ordered
/// snapshots and asks for error markers to be added or removed.
pub trait FormAccessor: Send + Sync {
    /// Ordered snapshot of every input in the form.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Flag `field` with the `marker` class.
    fn add_marker(&self, field: &FieldDescriptor, marker: &str);

    /// Remove the `marker` class from `field`, if present.
    fn clear_marker(&self, field: &FieldDescriptor, marker: &str);
}
