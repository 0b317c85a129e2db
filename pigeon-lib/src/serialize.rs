//! Form body encoding

use crate::form::FieldDescriptor;

/// Content type of the bodies produced by [`serialize`].
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encodes every non-submit field as `name=value` pairs joined by `&`.
///
/// Names and values are percent-encoded. Empty names or values still
/// contribute a pair.
pub fn serialize(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .filter(|field| !field.is_submit())
        .map(|field| {
            format!(
                "{}={}",
                urlencoding::encode(&field.name),
                urlencoding::encode(&field.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
