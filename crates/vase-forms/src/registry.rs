//! Field registry
//!
//! Built once per form instance from the declarative control descriptions;
//! pure derivation with no side effects, so it can be rebuilt after a form
//! reset.

use crate::field::{FieldDescriptor, FieldKind, FieldSource, InputType, Role};

/// Typed field records for one form instance, split into the two lists the
/// engine validates separately: data fields and agreements.
///
/// # Examples
///
/// ```
/// use vase_forms::{FieldRegistry, FieldSource};
///
/// let sources: Vec<FieldSource> = serde_json::from_str(
///     r#"[
///         {"role": "field", "name": "phone", "type": "tel", "required": true},
///         {"role": "agreement", "name": "terms", "type": "checkbox", "required": true},
///         {"role": "status", "name": "status", "type": ""}
///     ]"#,
/// )
/// .unwrap();
///
/// let registry = FieldRegistry::build(&sources);
/// assert_eq!(registry.fields().len(), 1);
/// assert_eq!(registry.agreements().len(), 1);
/// assert_eq!(registry.fields()[0].category.as_deref(), Some("phone"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
	fields: Vec<FieldDescriptor>,
	agreements: Vec<FieldDescriptor>,
}

impl FieldRegistry {
	/// Derive descriptors from the declarative sources.
	///
	/// Category fallback when no explicit declaration is present: ordinary
	/// fields map `tel` to `phone` and `email` to `email`, everything else
	/// to the generic `alpha` category; agreements map `checkbox` and
	/// `radio` to the same-named categories and anything else to none.
	/// Status controls are recognized and skipped. Each list is indexed in
	/// declaration order.
	pub fn build(sources: &[FieldSource]) -> Self {
		let mut registry = Self::default();

		for source in sources {
			let kind = match source.role {
				Role::Field => FieldKind::Field,
				Role::Agreement => FieldKind::Agreement,
				Role::Status => continue,
			};
			let input_type = InputType::parse(&source.input_type);
			let category = source
				.category
				.clone()
				.or_else(|| derive_category(kind, &input_type));

			let list = match kind {
				FieldKind::Field => &mut registry.fields,
				FieldKind::Agreement => &mut registry.agreements,
			};
			list.push(FieldDescriptor {
				kind,
				name: source.name.clone(),
				input_type,
				category,
				required: source.required,
				max_length: source.max_length,
				error_text: source.error_text.clone(),
				index: list.len(),
			});
		}

		tracing::debug!(
			fields = registry.fields.len(),
			agreements = registry.agreements.len(),
			"field registry built"
		);
		registry
	}

	/// Data fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Agreement controls in declaration order.
	pub fn agreements(&self) -> &[FieldDescriptor] {
		&self.agreements
	}

	/// Look up any descriptor by control name, fields before agreements.
	pub fn by_name(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields
			.iter()
			.chain(self.agreements.iter())
			.find(|field| field.name == name)
	}
}

fn derive_category(kind: FieldKind, input_type: &InputType) -> Option<String> {
	let category = match kind {
		FieldKind::Field => match input_type {
			InputType::Tel => "phone",
			InputType::Email => "email",
			_ => "alpha",
		},
		FieldKind::Agreement => match input_type {
			InputType::Checkbox => "checkbox",
			InputType::Radio => "radio",
			_ => return None,
		},
	};
	Some(category.to_string())
}
