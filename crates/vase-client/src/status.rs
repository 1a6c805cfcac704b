//! User-visible status messages
//!
//! The engine never touches a status container directly; it records
//! messages and lets the presentation layer render them.

use serde_json::Value;

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
	Info,
	Success,
	Error,
}

/// One message destined for the form's status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
	pub text: String,
	pub level: StatusLevel,
}

impl StatusMessage {
	pub fn info(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			level: StatusLevel::Info,
		}
	}

	pub fn success(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			level: StatusLevel::Success,
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			level: StatusLevel::Error,
		}
	}
}

/// Extract the user-visible message under `key` from a response body.
///
/// The API may return a single string or an ordered sequence of strings;
/// a sequence is joined with `", "`. Non-string content is ignored.
pub fn response_message(body: &Value, key: &str) -> Option<String> {
	match body.get(key)? {
		Value::String(message) => Some(message.clone()),
		Value::Array(parts) => {
			let parts: Vec<&str> = parts.iter().filter_map(Value::as_str).collect();
			if parts.is_empty() {
				None
			} else {
				Some(parts.join(", "))
			}
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_response_message_string() {
		let body = json!({"message": "bad key"});
		assert_eq!(response_message(&body, "message").as_deref(), Some("bad key"));
	}

	#[rstest]
	fn test_response_message_sequence_joined() {
		let body = json!({"message": ["first", "second"]});
		assert_eq!(response_message(&body, "message").as_deref(), Some("first, second"));
	}

	#[rstest]
	fn test_response_message_absent_or_nonstring() {
		assert_eq!(response_message(&json!({}), "message"), None);
		assert_eq!(response_message(&json!({"message": 42}), "message"), None);
		assert_eq!(response_message(&json!({"message": []}), "message"), None);
		assert_eq!(response_message(&json!({"message": [1, 2]}), "message"), None);
	}
}
