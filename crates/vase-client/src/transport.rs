//! Submission transport
//!
//! One outbound HTTP-style call with a form-encoded payload and a
//! JSON-shaped response. The engine only depends on the [`Transport`]
//! trait; [`HttpTransport`] is the reqwest-backed implementation. No
//! cancellation is offered here: a timeout, if desired, belongs to the
//! underlying client's configuration.

use crate::config::FormMethod;
use crate::payload::Payload;
use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("server returned {0}")]
	BadStatus(StatusCode),

	#[error("response body is not valid JSON: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Everything the transport needs to issue one submission.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
	pub url: String,
	pub method: FormMethod,
	pub body: Payload,
	/// Send the `X-Requested-With: XMLHttpRequest` header
	pub send_headers: bool,
}

/// Parsed response from a transport-level successful call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
	pub status: StatusCode,
	pub body: Value,
}

/// Outbound HTTP-style call used by the submission engine.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: SubmitRequest) -> Result<ApiResponse, TransportError>;
}

/// Default transport over a shared [`reqwest::Client`].
///
/// POST carries the payload as a urlencoded body; GET appends it to the
/// query string. A non-2xx status is a [`TransportError::BadStatus`] with
/// no response-body guarantees.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a preconfigured client (timeouts, proxies, default headers).
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: SubmitRequest) -> Result<ApiResponse, TransportError> {
		let mut builder = match request.method {
			FormMethod::Post => self
				.client
				.post(&request.url)
				.header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded; charset=UTF-8")
				.body(request.body.encode()),
			FormMethod::Get => self.client.get(&request.url).query(request.body.pairs()),
		};
		if request.send_headers {
			builder = builder.header("X-Requested-With", "XMLHttpRequest");
		}

		tracing::debug!(url = %request.url, pairs = request.body.len(), "issuing submission request");
		let response = builder.send().await?;
		let status = response.status();
		if !status.is_success() {
			tracing::warn!(%status, "submission rejected by server");
			return Err(TransportError::BadStatus(status));
		}

		let text = response.text().await?;
		let body: Value = serde_json::from_str(&text)?;
		Ok(ApiResponse { status, body })
	}
}
