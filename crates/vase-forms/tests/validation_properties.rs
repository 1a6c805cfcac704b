//! Property tests for the validation engine's contractual guarantees.

use proptest::prelude::*;
use vase_forms::{
	FieldDescriptor, FieldKind, FieldValue, FormSnapshot, FormValidator, InputType,
};

fn text_field(name: &str, category: Option<String>, required: bool, index: usize) -> FieldDescriptor {
	FieldDescriptor {
		kind: FieldKind::Field,
		name: name.to_string(),
		input_type: InputType::Text,
		category,
		required,
		max_length: None,
		error_text: None,
		index,
	}
}

proptest! {
	/// An optional text field with a blank value is valid for every
	/// category, known or not.
	#[test]
	fn optional_blank_always_valid(category in proptest::option::of("[a-z]{0,12}")) {
		let validator = FormValidator::new();
		let field = text_field("f", category, false, 0);
		let check = validator.validate_field(&field, &FieldValue::Text(String::new()));
		prop_assert!(check.valid);
	}

	/// A required text field with a blank value is invalid for every
	/// category, known or not.
	#[test]
	fn required_blank_always_invalid(category in proptest::option::of("[a-z]{0,12}")) {
		let validator = FormValidator::new();
		let field = text_field("f", category, true, 0);
		let check = validator.validate_field(&field, &FieldValue::Text(String::new()));
		prop_assert!(!check.valid);
	}

	/// Categories absent from the table are always invalid once the
	/// required-or-nonempty branch is reached.
	#[test]
	fn unknown_category_fails_closed(value in "[a-zA-Z0-9 ]{1,24}") {
		let validator = FormValidator::new();
		let field = text_field("f", Some("no-such-category".to_string()), true, 0);
		let check = validator.validate_field(&field, &FieldValue::Text(value));
		prop_assert!(!check.valid);
	}

	/// `validate_all` is exactly the AND-reduction of the per-field calls,
	/// and failures keep declaration order.
	#[test]
	fn validate_all_matches_per_field_and(
		cases in proptest::collection::vec(
			(any::<bool>(), "[a-z ]{0,16}", prop_oneof![Just("alpha"), Just("email"), Just("bogus")]),
			0..8,
		)
	) {
		let validator = FormValidator::new();
		let mut snapshot = FormSnapshot::new();
		let mut fields = Vec::new();

		for (i, (required, value, category)) in cases.iter().enumerate() {
			let name = format!("field_{i}");
			fields.push(text_field(&name, Some(category.to_string()), *required, i));
			snapshot.set_text(name, value.clone());
		}

		let report = validator.validate_all(&fields, &snapshot);

		let per_field: Vec<bool> = fields
			.iter()
			.map(|f| validator.validate_field(f, &snapshot.value_for(f)).valid)
			.collect();

		prop_assert_eq!(report.is_valid(), per_field.iter().all(|v| *v));

		let expected_failures: Vec<usize> = per_field
			.iter()
			.enumerate()
			.filter(|(_, valid)| !**valid)
			.map(|(i, _)| i)
			.collect();
		let actual_failures: Vec<usize> = report.failures().map(|c| c.index).collect();
		prop_assert_eq!(actual_failures, expected_failures);
	}
}
