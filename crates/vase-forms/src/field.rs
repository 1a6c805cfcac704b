//! Field model shared by the registry and the validation engine

use serde::Deserialize;
use std::collections::HashMap;

/// Role a control plays in the form, as declared in the markup the core
/// does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// An ordinary input carrying user data
	Field,
	/// A consent control (checkbox or radio) that gates submission
	Agreement,
	/// A presentation-only status container; skipped by the registry
	Status,
}

/// Native input type of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
	Text,
	Tel,
	Email,
	Select,
	TextArea,
	Checkbox,
	Radio,
	Other(String),
}

impl InputType {
	/// Parse a markup-declared type string.
	///
	/// Unrecognized types are preserved as [`InputType::Other`] rather than
	/// rejected; validation falls back to the generic text rules for them.
	///
	/// # Examples
	///
	/// ```
	/// use vase_forms::InputType;
	///
	/// assert_eq!(InputType::parse("tel"), InputType::Tel);
	/// assert_eq!(InputType::parse("color"), InputType::Other("color".to_string()));
	/// ```
	pub fn parse(raw: &str) -> Self {
		match raw {
			"" | "text" => InputType::Text,
			"tel" => InputType::Tel,
			"email" => InputType::Email,
			"select" => InputType::Select,
			"textarea" => InputType::TextArea,
			"checkbox" => InputType::Checkbox,
			"radio" => InputType::Radio,
			other => InputType::Other(other.to_string()),
		}
	}

	/// Whether this control carries a checked state instead of a text value.
	pub fn is_checkable(&self) -> bool {
		matches!(self, InputType::Checkbox | InputType::Radio)
	}
}

/// Declarative description of one form control, read at initialization
/// from attributes the core does not own.
///
/// Deserializable so a whole form can be described as JSON produced by
/// whatever scrapes the markup.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSource {
	pub role: Role,
	pub name: String,
	/// Native control type (`tel`, `email`, `checkbox`, ...)
	#[serde(rename = "type", default)]
	pub input_type: String,
	/// Explicit pattern category; when absent the registry derives one
	/// from the control type
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub required: bool,
	#[serde(default)]
	pub max_length: Option<usize>,
	/// Custom per-field error text shown instead of the default
	#[serde(default)]
	pub error_text: Option<String>,
}

/// Which of the two validated lists a descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	Field,
	Agreement,
}

/// Typed field record produced by the registry.
///
/// Immutable after construction; `index` is the declaration-order position
/// within its list and is the only ordering signal the engine keeps, so
/// "first failing field" is well defined without a markup tree.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
	pub kind: FieldKind,
	pub name: String,
	pub input_type: InputType,
	pub category: Option<String>,
	pub required: bool,
	pub max_length: Option<usize>,
	pub error_text: Option<String>,
	pub index: usize,
}

/// Current value of one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
	/// Text-like controls, including selects (the selected value, empty
	/// when nothing is selected)
	Text(String),
	/// Checkable controls
	Checked(bool),
}

impl FieldValue {
	/// The value an absent control contributes: unchecked for checkable
	/// types, empty text otherwise.
	pub fn absent_for(input_type: &InputType) -> Self {
		if input_type.is_checkable() {
			FieldValue::Checked(false)
		} else {
			FieldValue::Text(String::new())
		}
	}
}

/// Point-in-time capture of every control's value, keyed by control name.
///
/// # Examples
///
/// ```
/// use vase_forms::{FieldValue, FormSnapshot};
///
/// let mut snapshot = FormSnapshot::new();
/// snapshot.set_text("email", "a@b.com");
/// snapshot.set_checked("terms", true);
/// assert_eq!(snapshot.get("email"), Some(&FieldValue::Text("a@b.com".to_string())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
	values: HashMap<String, FieldValue>,
}

impl FormSnapshot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), FieldValue::Text(value.into()));
	}

	pub fn set_checked(&mut self, name: impl Into<String>, checked: bool) {
		self.values.insert(name.into(), FieldValue::Checked(checked));
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.values.get(name)
	}

	/// Value for a descriptor, substituting the absent-control default
	/// when the snapshot has no entry.
	pub fn value_for(&self, field: &FieldDescriptor) -> FieldValue {
		self.values
			.get(&field.name)
			.cloned()
			.unwrap_or_else(|| FieldValue::absent_for(&field.input_type))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
