//! Validation engine
//!
//! Judges single fields or whole field lists against the pattern table.
//! The engine is headless: it reports per-field verdicts and messages and
//! leaves class toggling, focus moves and fades to the presentation layer.

use crate::field::{FieldDescriptor, FieldValue, FormSnapshot, InputType};
use crate::patterns::PatternTable;

/// Default per-field message when the descriptor carries no custom text.
pub const DEFAULT_WRONG_INPUT_TEXT: &str = "Wrong input";

/// Verdict for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
	pub valid: bool,
	/// Declaration-order position within the field's list
	pub index: usize,
	pub name: String,
	/// Error text to surface next to the control; `None` when valid
	pub message: Option<String>,
}

/// Verdict for a whole field list.
///
/// `checks` holds one entry per field in declaration order, so failures and
/// the first failing field (the focus target) are recoverable without any
/// positional data beyond the registry's own ordering.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
	checks: Vec<FieldCheck>,
	cleared: bool,
}

impl ValidationReport {
	/// Logical AND over every individual check.
	pub fn is_valid(&self) -> bool {
		self.checks.iter().all(|check| check.valid)
	}

	/// Whether this report only resets validity markers (post-reset mode)
	/// rather than judging correctness.
	pub fn is_cleared(&self) -> bool {
		self.cleared
	}

	pub fn checks(&self) -> &[FieldCheck] {
		&self.checks
	}

	/// Failing checks in declaration order.
	pub fn failures(&self) -> impl Iterator<Item = &FieldCheck> {
		self.checks.iter().filter(|check| !check.valid)
	}

	/// The failure whose field appears first in the list order, if any;
	/// callers use it to move focus.
	pub fn first_failure(&self) -> Option<&FieldCheck> {
		self.failures().next()
	}
}

/// Field validation engine bound to one pattern table.
///
/// # Examples
///
/// ```
/// use vase_forms::{FieldRegistry, FieldSource, FormSnapshot, FormValidator};
///
/// let sources: Vec<FieldSource> = serde_json::from_str(
///     r#"[{"role": "field", "name": "email", "type": "email", "required": true}]"#,
/// )
/// .unwrap();
/// let registry = FieldRegistry::build(&sources);
/// let validator = FormValidator::new();
///
/// let mut snapshot = FormSnapshot::new();
/// snapshot.set_text("email", "a@b.com");
/// assert!(validator.validate_all(registry.fields(), &snapshot).is_valid());
///
/// snapshot.set_text("email", "not-an-email");
/// assert!(!validator.validate_all(registry.fields(), &snapshot).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct FormValidator {
	patterns: PatternTable,
	wrong_input_text: String,
}

impl Default for FormValidator {
	fn default() -> Self {
		Self {
			patterns: PatternTable::default(),
			wrong_input_text: DEFAULT_WRONG_INPUT_TEXT.to_string(),
		}
	}
}

impl FormValidator {
	/// Engine over the default pattern table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Engine over a caller-supplied pattern table.
	pub fn with_patterns(patterns: PatternTable) -> Self {
		Self {
			patterns,
			..Self::default()
		}
	}

	/// Replace the fallback error text used when a descriptor carries no
	/// custom one.
	pub fn with_wrong_input_text(mut self, text: impl Into<String>) -> Self {
		self.wrong_input_text = text.into();
		self
	}

	pub fn patterns(&self) -> &PatternTable {
		&self.patterns
	}

	/// Judge a single field against its current value.
	///
	/// Checkable controls are valid unless required and unchecked; selects
	/// are valid unless required and empty; text-like controls must match
	/// their category pattern whenever they are required or non-empty, with
	/// an absent or unknown category failing closed. An optional blank
	/// value always passes. A value of the wrong shape for the control
	/// fails whenever the field is required.
	pub fn validate_field(&self, field: &FieldDescriptor, value: &FieldValue) -> FieldCheck {
		let valid = match &field.input_type {
			InputType::Checkbox => match value {
				FieldValue::Checked(checked) => !field.required || *checked,
				FieldValue::Text(_) => !field.required,
			},
			InputType::Select => match value {
				FieldValue::Text(selected) => !field.required || !selected.is_empty(),
				FieldValue::Checked(_) => !field.required,
			},
			_ => self.check_text(field, value),
		};

		FieldCheck {
			valid,
			index: field.index,
			name: field.name.clone(),
			message: if valid { None } else { Some(self.message_for(field)) },
		}
	}

	fn check_text(&self, field: &FieldDescriptor, value: &FieldValue) -> bool {
		let text = match value {
			FieldValue::Text(text) => text,
			// wrong value shape for a text control
			FieldValue::Checked(_) => return !field.required,
		};

		if text.is_empty() {
			// optional-and-blank passes; required-and-blank never does,
			// even when the category pattern happens to match ""
			return !field.required;
		}

		if let Some(max) = field.max_length
			&& text.chars().count() > max
		{
			return false;
		}

		match &field.category {
			Some(category) => self.patterns.matches(category, text),
			None => false,
		}
	}

	fn message_for(&self, field: &FieldDescriptor) -> String {
		field
			.error_text
			.clone()
			.unwrap_or_else(|| self.wrong_input_text.clone())
	}

	/// Judge every field in the list; the overall verdict is the logical
	/// AND of the individual ones. Failures keep declaration order.
	pub fn validate_all(&self, fields: &[FieldDescriptor], snapshot: &FormSnapshot) -> ValidationReport {
		let checks: Vec<FieldCheck> = fields
			.iter()
			.map(|field| self.validate_field(field, &snapshot.value_for(field)))
			.collect();

		let failed = checks.iter().filter(|check| !check.valid).count();
		if failed > 0 {
			tracing::debug!(failed, total = checks.len(), "form validation failed");
		}

		ValidationReport {
			checks,
			cleared: false,
		}
	}

	/// Produce a report that resets validity markers without judging
	/// correctness; used after a form reset.
	pub fn clear_report(&self, fields: &[FieldDescriptor]) -> ValidationReport {
		let checks = fields
			.iter()
			.map(|field| FieldCheck {
				valid: true,
				index: field.index,
				name: field.name.clone(),
				message: None,
			})
			.collect();

		ValidationReport {
			checks,
			cleared: true,
		}
	}
}
