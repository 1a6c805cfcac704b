//! Outgoing payload assembly
//!
//! The payload is an ordered list of key/value pairs: the serialized form
//! fields, then any configured extra params, with the name-remapping
//! dictionary applied last. Remapping is a structured key rename, not text
//! substitution, so one field name being a substring of another cannot
//! corrupt the body.

use crate::config::{Param, Rename};
use vase_forms::{FieldDescriptor, FieldValue, FormSnapshot};

/// Value submitted for a checked checkable control, matching what a plain
/// form post sends.
const CHECKED_VALUE: &str = "on";

/// Ordered key/value payload, encodable as
/// `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
	pairs: Vec<(String, String)>,
}

impl Payload {
	pub fn new() -> Self {
		Self::default()
	}

	/// Serialize the given descriptors from a snapshot, in declaration
	/// order. Text values are included even when empty; checkable controls
	/// contribute a pair only while checked, as a plain form post would.
	pub fn from_form(fields: &[FieldDescriptor], snapshot: &FormSnapshot) -> Self {
		let mut payload = Self::new();
		for field in fields {
			match snapshot.value_for(field) {
				FieldValue::Text(text) => payload.push(&field.name, text),
				FieldValue::Checked(true) => payload.push(&field.name, CHECKED_VALUE),
				FieldValue::Checked(false) => {}
			}
		}
		payload
	}

	pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.pairs.push((name.into(), value.into()));
	}

	/// Append the configured extra params after the form fields.
	pub fn extend_params(&mut self, params: &[Param]) {
		for param in params {
			self.push(param.name.clone(), param.value.clone());
		}
	}

	/// Apply the name-remapping dictionary in its defined order.
	///
	/// Each payload pair is renamed at most once: a later dictionary entry
	/// never sees a key already rewritten by an earlier one, so a rename
	/// chain (`a -> b`, `b -> c`) moves every key one step instead of
	/// collapsing `a` into `c`.
	pub fn rename(&mut self, dictionary: &[Rename]) {
		let mut renamed = vec![false; self.pairs.len()];
		for entry in dictionary {
			for (i, (name, _)) in self.pairs.iter_mut().enumerate() {
				if !renamed[i] && *name == entry.from {
					*name = entry.to.clone();
					renamed[i] = true;
				}
			}
		}
	}

	/// Encode as `application/x-www-form-urlencoded`.
	///
	/// # Examples
	///
	/// ```
	/// use vase_client::Payload;
	///
	/// let mut payload = Payload::new();
	/// payload.push("name", "Anna Nowak");
	/// payload.push("api_key", "k&v");
	/// assert_eq!(payload.encode(), "name=Anna+Nowak&api_key=k%26v");
	/// ```
	pub fn encode(&self) -> String {
		serde_urlencoded::to_string(&self.pairs)
			.expect("urlencoded encoding of string pairs cannot fail")
	}

	pub fn pairs(&self) -> &[(String, String)] {
		&self.pairs
	}

	/// First value for a key, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vase_forms::{FieldRegistry, FieldSource};

	fn registry() -> FieldRegistry {
		let sources: Vec<FieldSource> = serde_json::from_str(
			r#"[
				{"role": "field", "name": "first_name", "type": "text"},
				{"role": "field", "name": "phone", "type": "tel"},
				{"role": "agreement", "name": "terms", "type": "checkbox"}
			]"#,
		)
		.unwrap();
		FieldRegistry::build(&sources)
	}

	#[rstest]
	fn test_from_form_keeps_declaration_order_and_skips_unchecked() {
		// Arrange
		let registry = registry();
		let mut snapshot = FormSnapshot::new();
		snapshot.set_text("phone", "123-456-789");
		snapshot.set_text("first_name", "Anna");
		snapshot.set_checked("terms", false);

		// Act
		let mut payload = Payload::from_form(registry.fields(), &snapshot);
		for agreement in [Payload::from_form(registry.agreements(), &snapshot)] {
			for (name, value) in agreement.pairs() {
				payload.push(name, value);
			}
		}

		// Assert: declaration order, unchecked agreement omitted
		assert_eq!(
			payload.pairs(),
			&[
				("first_name".to_string(), "Anna".to_string()),
				("phone".to_string(), "123-456-789".to_string()),
			]
		);
	}

	#[rstest]
	fn test_checked_agreement_contributes_on() {
		let registry = registry();
		let mut snapshot = FormSnapshot::new();
		snapshot.set_checked("terms", true);

		let payload = Payload::from_form(registry.agreements(), &snapshot);
		assert_eq!(payload.get("terms"), Some("on"));
	}

	#[rstest]
	fn test_extend_params_appends_in_order() {
		let mut payload = Payload::new();
		payload.push("a", "1");
		payload.extend_params(&[Param::new("api_key", "k"), Param::new("src", "web")]);

		let keys: Vec<&str> = payload.pairs().iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["a", "api_key", "src"]);
	}

	#[rstest]
	fn test_rename_is_exact_key_match_not_substring() {
		// Arrange: "phone" is a substring of "phone_home"
		let mut payload = Payload::new();
		payload.push("phone", "1");
		payload.push("phone_home", "2");

		// Act
		payload.rename(&[Rename::new("phone", "tel")]);

		// Assert
		assert_eq!(payload.get("tel"), Some("1"));
		assert_eq!(payload.get("phone_home"), Some("2"));
		assert_eq!(payload.get("phone"), None);
	}

	#[rstest]
	fn test_rename_chain_moves_each_key_one_step() {
		// a -> b, b -> c must not collapse a into c
		let mut payload = Payload::new();
		payload.push("a", "1");
		payload.push("b", "2");

		payload.rename(&[Rename::new("a", "b"), Rename::new("b", "c")]);

		let pairs = payload.pairs();
		assert_eq!(pairs[0], ("b".to_string(), "1".to_string()));
		assert_eq!(pairs[1], ("c".to_string(), "2".to_string()));
	}

	#[rstest]
	fn test_rename_applies_to_every_matching_pair() {
		let mut payload = Payload::new();
		payload.push("tag", "x");
		payload.push("tag", "y");

		payload.rename(&[Rename::new("tag", "label")]);

		assert_eq!(
			payload.pairs(),
			&[
				("label".to_string(), "x".to_string()),
				("label".to_string(), "y".to_string()),
			]
		);
	}

	#[rstest]
	fn test_encode_urlencodes_reserved_characters() {
		let mut payload = Payload::new();
		payload.push("note", "a&b=c");
		payload.push("empty", "");
		assert_eq!(payload.encode(), "note=a%26b%3Dc&empty=");
	}
}
