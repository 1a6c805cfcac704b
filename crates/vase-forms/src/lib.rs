//! Field registry and validation engine for vase
//!
//! This crate provides the headless half of a form: typed field records
//! derived from declarative control descriptions, a category-keyed regex
//! table, and a validation engine that judges single fields or a whole
//! field list. Presentation concerns (class toggling, focus, fades) stay
//! with the caller; the engine only reports what is wrong and where.

pub mod field;
pub mod patterns;
pub mod registry;
pub mod validation;

pub use field::{FieldDescriptor, FieldKind, FieldSource, FieldValue, FormSnapshot, InputType, Role};
pub use patterns::{PatternError, PatternTable};
pub use registry::FieldRegistry;
pub use validation::{DEFAULT_WRONG_INPUT_TEXT, FieldCheck, FormValidator, ValidationReport};
