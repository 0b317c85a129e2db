//! In-memory forms.
//!
//! Used by hosts without a real UI (the CLI loads them from JSON) and by
//! tests. Markers are tracked per field name.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use serde::Deserialize;

use super::FieldDescriptor;
use super::FormAccessor;
use super::FormLocator;
use super::FormSelector;

/// A form held in memory.
#[derive(Debug)]
pub struct MemoryForm {
    id: Option<String>,
    classes: Vec<String>,
    tag: String,
    fields: RwLock<Vec<FieldDescriptor>>,
    markers: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl MemoryForm {
    /// Creates an empty `<form>` with no id or classes.
    pub fn new() -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            tag: default_tag(),
            fields: RwLock::default(),
            markers: RwLock::default(),
        }
    }

    /// Sets the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the tag name.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Appends a field.
    pub fn with_field(self, field: FieldDescriptor) -> Self {
        self.fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(field);
        self
    }

    /// Updates the value of every field called `name`.
    ///
    /// Returns `false` when no field has that name.
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        let mut fields = self.fields.write().unwrap_or_else(PoisonError::into_inner);
        let mut found = false;
        for field in fields.iter_mut().filter(|f| f.name == name) {
            field.value = value.clone();
            found = true;
        }
        found
    }

    /// Returns `true` if the field called `name` carries `marker`.
    pub fn has_marker(&self, name: &str, marker: &str) -> bool {
        self.markers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .is_some_and(|set| set.contains(marker))
    }

    /// Names of every field currently carrying `marker`, sorted.
    pub fn marked_fields(&self, marker: &str) -> Vec<String> {
        let markers = self.markers.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = markers
            .iter()
            .filter(|(_, set)| set.contains(marker))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    fn matches(&self, selector: &FormSelector) -> bool {
        match selector {
            FormSelector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            FormSelector::Class(class) => self.classes.iter().any(|c| c == class),
            FormSelector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
        }
    }
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormAccessor for MemoryForm {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn add_marker(&self, field: &FieldDescriptor, marker: &str) {
        self.markers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(field.name.clone())
            .or_default()
            .insert(marker.to_string());
    }

    fn clear_marker(&self, field: &FieldDescriptor, marker: &str) {
        let mut markers = self.markers.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = markers.get_mut(&field.name) {
            set.remove(marker);
            if set.is_empty() {
                markers.remove(&field.name);
            }
        }
    }
}

/// JSON shape of a form inside a [`MemoryDocument`].
#[derive(Debug, Deserialize)]
struct FormDefinition {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default = "default_tag")]
    tag: String,
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

fn default_tag() -> String {
    "form".to_string()
}

impl From<FormDefinition> for MemoryForm {
    fn from(def: FormDefinition) -> Self {
        Self {
            id: def.id,
            classes: def.classes,
            tag: def.tag,
            fields: RwLock::new(def.fields),
            markers: RwLock::default(),
        }
    }
}

/// An ordered collection of in-memory forms, searchable by selector.
///
/// # Example
///
/// ```
/// use pigeon_lib::form::{FormLocator, FormSelector, MemoryDocument};
///
/// let doc = MemoryDocument::from_json(r#"{"forms": [{"id": "contact", "fields": []}]}"#).unwrap();
/// let selector = FormSelector::parse("#contact").unwrap();
/// assert!(doc.locate(&selector).is_some());
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    forms: Vec<Arc<MemoryForm>>,
}

#[derive(Deserialize)]
struct DocumentDefinition {
    #[serde(default)]
    forms: Vec<FormDefinition>,
}

impl MemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document of the form `{"forms": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let def: DocumentDefinition = serde_json::from_str(json)?;
        Ok(Self {
            forms: def
                .forms
                .into_iter()
                .map(|f| Arc::new(MemoryForm::from(f)))
                .collect(),
        })
    }

    /// Appends a form and returns a handle to it.
    pub fn insert(&mut self, form: MemoryForm) -> Arc<MemoryForm> {
        let form = Arc::new(form);
        self.forms.push(Arc::clone(&form));
        form
    }

    /// Concrete handle to the form matching `selector`.
    pub fn find(&self, selector: &FormSelector) -> Option<Arc<MemoryForm>> {
        self.forms.iter().find(|f| f.matches(selector)).cloned()
    }
}

impl FormLocator for MemoryDocument {
    fn locate(&self, selector: &FormSelector) -> Option<Arc<dyn FormAccessor>> {
        self.find(selector).map(|f| f as Arc<dyn FormAccessor>)
    }
}
