//! Submission session
//!
//! One `FormSession` per form instance: it owns the field registry, the
//! validator, the submission config, the callbacks and the single-flight
//! flag. Nothing here is process-wide, so two forms on the same page never
//! share state.

use crate::config::SubmitConfig;
use crate::payload::Payload;
use crate::status::{StatusMessage, response_message};
use crate::transport::{SubmitRequest, Transport, TransportError};
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use vase_forms::{FieldCheck, FieldRegistry, FormSnapshot, FormValidator, ValidationReport};

type Callback = Box<dyn Fn(&Value) + Send + Sync>;

/// Terminal result of one submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
	/// Transport succeeded and the response carried the success marker
	Success { response: Value },
	/// One or both field lists failed validation; no request was issued
	ValidationFailed {
		fields: ValidationReport,
		agreements: ValidationReport,
	},
	/// Another submission from this session is still outstanding; the
	/// attempt was dropped, not queued
	AlreadyInFlight,
	/// Transport succeeded but the response lacked the success marker
	ApplicationError {
		response: Value,
		message: Option<String>,
	},
	/// Network or server failure; no response body guarantees
	Transport { source: TransportError },
}

impl SubmitOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, SubmitOutcome::Success { .. })
	}
}

// Releases the single-flight flag on every exit path, panics included.
struct FlightGuard<'a> {
	flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
	fn claim(flag: &'a AtomicBool) -> Option<Self> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| Self { flag })
	}
}

impl Drop for FlightGuard<'_> {
	fn drop(&mut self) {
		self.flag.store(false, Ordering::Release);
	}
}

/// Validation and submission state machine for one form instance.
///
/// # Examples
///
/// ```no_run
/// use vase_client::{FormSession, HttpTransport, SubmitConfig};
/// use vase_forms::{FieldRegistry, FieldSource, FormSnapshot};
///
/// # async fn run() {
/// let sources: Vec<FieldSource> = serde_json::from_str(
///     r#"[{"role": "field", "name": "email", "type": "email", "required": true}]"#,
/// )
/// .unwrap();
/// let session = FormSession::new(
///     FieldRegistry::build(&sources),
///     SubmitConfig::new("https://api.example.com/contact").with_message_key("message"),
/// )
/// .on_success(|response| println!("sent: {response}"));
///
/// let mut snapshot = FormSnapshot::new();
/// snapshot.set_text("email", "a@b.com");
///
/// let outcome = session.submit(&snapshot, &HttpTransport::new()).await;
/// assert!(outcome.is_success());
/// # }
/// ```
pub struct FormSession {
	registry: FieldRegistry,
	validator: FormValidator,
	config: SubmitConfig,
	on_success: Option<Callback>,
	on_error: Option<Callback>,
	in_flight: AtomicBool,
	status_log: Mutex<Vec<StatusMessage>>,
}

impl FormSession {
	pub fn new(registry: FieldRegistry, config: SubmitConfig) -> Self {
		let validator = FormValidator::new().with_wrong_input_text(config.text.wrong_input.clone());
		Self {
			registry,
			validator,
			config,
			on_success: None,
			on_error: None,
			in_flight: AtomicBool::new(false),
			status_log: Mutex::new(Vec::new()),
		}
	}

	/// Replace the default validator (e.g. to carry a custom pattern
	/// table). The replacement's own fallback error text applies, not the
	/// config's `text.wrong_input`.
	pub fn with_validator(mut self, validator: FormValidator) -> Self {
		self.validator = validator;
		self
	}

	/// Completion handler invoked with the response body on API-level
	/// success.
	pub fn on_success(mut self, callback: impl Fn(&Value) + Send + Sync + 'static) -> Self {
		self.on_success = Some(Box::new(callback));
		self
	}

	/// Completion handler invoked on application or transport errors; the
	/// response body is `Value::Null` when the transport failed.
	pub fn on_error(mut self, callback: impl Fn(&Value) + Send + Sync + 'static) -> Self {
		self.on_error = Some(Box::new(callback));
		self
	}

	pub fn registry(&self) -> &FieldRegistry {
		&self.registry
	}

	pub fn config(&self) -> &SubmitConfig {
		&self.config
	}

	/// Whether a submission from this session is currently outstanding.
	pub fn in_flight(&self) -> bool {
		self.in_flight.load(Ordering::Acquire)
	}

	/// Live validation for the data fields, as wired to input events.
	pub fn validate_fields(&self, snapshot: &FormSnapshot) -> ValidationReport {
		self.validator.validate_all(self.registry.fields(), snapshot)
	}

	/// Live validation for the agreements, as wired to change events.
	pub fn validate_agreements(&self, snapshot: &FormSnapshot) -> ValidationReport {
		self.validator.validate_all(self.registry.agreements(), snapshot)
	}

	/// Validate a single control by name, for per-control live feedback.
	pub fn validate_control(&self, name: &str, snapshot: &FormSnapshot) -> Option<FieldCheck> {
		let field = self.registry.by_name(name)?;
		Some(self.validator.validate_field(field, &snapshot.value_for(field)))
	}

	/// Reports that reset validity markers after a form reset, without
	/// judging the (now empty) values.
	pub fn reset(&self) -> (ValidationReport, ValidationReport) {
		self.status_log.lock().expect("status log lock poisoned").clear();
		(
			self.validator.clear_report(self.registry.fields()),
			self.validator.clear_report(self.registry.agreements()),
		)
	}

	/// Drain the status messages accumulated since the last call, oldest
	/// first; the presentation layer renders them.
	pub fn take_statuses(&self) -> Vec<StatusMessage> {
		std::mem::take(&mut *self.status_log.lock().expect("status log lock poisoned"))
	}

	fn push_status(&self, message: StatusMessage) {
		self.status_log.lock().expect("status log lock poisoned").push(message);
	}

	/// Run one submission attempt to its terminal outcome.
	///
	/// Checks the single-flight flag, validates both field lists, builds
	/// the payload (form fields, extra params, name remap), issues the
	/// request and dispatches on the success marker. The flag is reset on
	/// every terminal path before control returns.
	pub async fn submit(&self, snapshot: &FormSnapshot, transport: &dyn Transport) -> SubmitOutcome {
		if self.in_flight() {
			tracing::debug!("submission dropped: another one is in flight");
			return SubmitOutcome::AlreadyInFlight;
		}

		let fields = self.validate_fields(snapshot);
		let agreements = self.validate_agreements(snapshot);
		if !fields.is_valid() || !agreements.is_valid() {
			tracing::debug!(
				field_failures = fields.failures().count(),
				agreement_failures = agreements.failures().count(),
				"submission blocked by validation"
			);
			return SubmitOutcome::ValidationFailed { fields, agreements };
		}

		let mut payload = Payload::from_form(self.registry.fields(), snapshot);
		for (name, value) in Payload::from_form(self.registry.agreements(), snapshot).pairs() {
			payload.push(name.clone(), value.clone());
		}
		payload.extend_params(&self.config.extra_params);
		payload.rename(&self.config.rename);

		let Some(_guard) = FlightGuard::claim(&self.in_flight) else {
			return SubmitOutcome::AlreadyInFlight;
		};

		self.push_status(StatusMessage::info(&self.config.text.status_sending));
		tracing::debug!(url = %self.config.url, "submitting form");

		let request = SubmitRequest {
			url: self.config.url.clone(),
			method: self.config.method,
			body: payload,
			send_headers: self.config.send_headers,
		};

		match transport.send(request).await {
			Ok(response) => {
				if self.marker_matches(&response.body) {
					self.push_status(StatusMessage::success(&self.config.text.status_success));
					if let Some(callback) = &self.on_success {
						callback(&response.body);
					}
					SubmitOutcome::Success {
						response: response.body,
					}
				} else {
					let message = self
						.config
						.message_key
						.as_deref()
						.and_then(|key| response_message(&response.body, key));
					self.push_status(StatusMessage::error(
						message.as_deref().unwrap_or(&self.config.text.status_error),
					));
					if let Some(callback) = &self.on_error {
						callback(&response.body);
					}
					SubmitOutcome::ApplicationError {
						response: response.body,
						message,
					}
				}
			}
			Err(source) => {
				tracing::warn!(error = %source, "submission transport failed");
				self.push_status(StatusMessage::error(&self.config.text.status_error));
				if let Some(callback) = &self.on_error {
					callback(&Value::Null);
				}
				SubmitOutcome::Transport { source }
			}
		}
	}

	// Strict equality against the configured marker; a missing or
	// non-string marker value is never a success.
	fn marker_matches(&self, body: &Value) -> bool {
		body.get(&self.config.success.key).and_then(Value::as_str)
			== Some(self.config.success.value.as_str())
	}
}
