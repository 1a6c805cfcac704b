//! Submission engine and transport for vase
//!
//! Pairs a [`vase_forms`] field registry with a submission state machine:
//! whole-form validation, payload assembly (serialized fields, extra
//! params, name remapping), a single-flight guard, and success/error
//! callback dispatch keyed on a configurable success marker in the
//! response body. The HTTP call itself goes through the [`Transport`]
//! trait; [`HttpTransport`] is the reqwest-backed default.

pub mod config;
pub mod payload;
pub mod session;
pub mod status;
pub mod transport;

pub use config::{FormMethod, Param, Rename, SubmitConfig, SuccessMarker, TextVars};
pub use payload::Payload;
pub use session::{FormSession, SubmitOutcome};
pub use status::{StatusLevel, StatusMessage};
pub use transport::{ApiResponse, HttpTransport, SubmitRequest, Transport, TransportError};
