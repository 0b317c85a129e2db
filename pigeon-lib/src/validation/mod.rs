//! Form validation.
//!
//! Every field's rule spec is parsed afresh and each clause is evaluated in
//! order. Validation never stops early: a field breaking three rules yields
//! three failures.
//!
//! # Example
//!
//! ```
//! use pigeon_lib::FieldDescriptor;
//! use pigeon_lib::validation::validate_fields;
//!
//! let fields = vec![
//!     FieldDescriptor::text("name", "").with_rules("required;min-len:2"),
//!     FieldDescriptor::text("email", "ada@example.com").with_rules("email"),
//! ];
//!
//! let result = validate_fields(&fields);
//! assert_eq!(result.failures().len(), 2);
//! assert_eq!(result.failures()[0].message, "\"name\" is required.");
//! ```

mod engine;
mod result;

pub use engine::validate;
pub use engine::validate_fields;
pub use engine::validate_snapshot;
pub use result::ValidationFailure;
pub use result::ValidationResult;
