//! Submission configuration

use serde::Deserialize;
use vase_forms::DEFAULT_WRONG_INPUT_TEXT;

/// HTTP method for the submission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
	Get,
	#[default]
	Post,
}

/// Extra key/value pair appended to the serialized form body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
	pub name: String,
	pub value: String,
}

impl Param {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// One entry of the name-remapping dictionary: a raw form field name and
/// the API field name it is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rename {
	pub from: String,
	pub to: String,
}

impl Rename {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// The response field/value pair treated as the authoritative indicator of
/// API-level success, distinct from transport-level success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuccessMarker {
	pub key: String,
	pub value: String,
}

impl Default for SuccessMarker {
	fn default() -> Self {
		Self {
			key: "result".to_string(),
			value: "success".to_string(),
		}
	}
}

/// User-visible texts: the per-field fallback error message and the three
/// submission status lines. `wrong_input` seeds the session's validator as
/// the message for fields without their own `error_text`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextVars {
	pub wrong_input: String,
	pub status_sending: String,
	pub status_success: String,
	pub status_error: String,
}

impl Default for TextVars {
	fn default() -> Self {
		Self {
			wrong_input: DEFAULT_WRONG_INPUT_TEXT.to_string(),
			status_sending: "Sending form...".to_string(),
			status_success: "Form sent successfully".to_string(),
			status_error: "Server encountered an error".to_string(),
		}
	}
}

/// Everything the submission engine needs to know about the endpoint.
///
/// Deserializable so the whole submission contract can live next to the
/// field declarations; every part has a default except the URL.
///
/// # Examples
///
/// ```
/// use vase_client::{FormMethod, SubmitConfig};
///
/// let config: SubmitConfig = serde_json::from_str(
///     r#"{"url": "https://api.example.com/contact", "extra_params": [{"name": "api_key", "value": "k"}]}"#,
/// )
/// .unwrap();
/// assert_eq!(config.method, FormMethod::Post);
/// assert_eq!(config.success.key, "result");
/// assert!(config.message_key.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitConfig {
	pub url: String,
	#[serde(default)]
	pub method: FormMethod,
	#[serde(default)]
	pub extra_params: Vec<Param>,
	#[serde(default)]
	pub rename: Vec<Rename>,
	#[serde(default)]
	pub success: SuccessMarker,
	/// Response body key carrying a user-visible message (string or
	/// sequence of strings); no message is surfaced when unset
	#[serde(default)]
	pub message_key: Option<String>,
	/// Send the `X-Requested-With` header with the request
	#[serde(default = "default_send_headers")]
	pub send_headers: bool,
	#[serde(default)]
	pub text: TextVars,
}

fn default_send_headers() -> bool {
	true
}

impl SubmitConfig {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			method: FormMethod::default(),
			extra_params: Vec::new(),
			rename: Vec::new(),
			success: SuccessMarker::default(),
			message_key: None,
			send_headers: true,
			text: TextVars::default(),
		}
	}

	pub fn with_method(mut self, method: FormMethod) -> Self {
		self.method = method;
		self
	}

	pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra_params.push(Param::new(name, value));
		self
	}

	pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
		self.rename.push(Rename::new(from, to));
		self
	}

	pub fn with_success_marker(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.success = SuccessMarker {
			key: key.into(),
			value: value.into(),
		};
		self
	}

	pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
		self.message_key = Some(key.into());
		self
	}
}
