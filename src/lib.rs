//! # Vase
//!
//! A form validation and submission library.
//!
//! Vase splits a form into a headless model and a submission engine: a
//! field registry derived once from declarative control descriptions, a
//! category-keyed regex validation engine, and a single-flight submission
//! session that serializes the form, applies extra params and name
//! remapping, and dispatches success/error callbacks on a configurable
//! success marker in the response body. Presentation (class toggling,
//! focus, fades) stays with the caller.
//!
//! ## Crates
//!
//! - [`forms`] - field model, registry, pattern table, validation engine
//! - [`client`] - submission config, payload, transport, session
//!
//! ## Example
//!
//! ```
//! use vase::forms::{FieldRegistry, FieldSource, FormSnapshot};
//! use vase::client::{FormSession, SubmitConfig};
//!
//! let sources: Vec<FieldSource> = serde_json::from_str(
//!     r#"[
//!         {"role": "field", "name": "email", "type": "email", "required": true},
//!         {"role": "agreement", "name": "terms", "type": "checkbox", "required": true}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let session = FormSession::new(
//!     FieldRegistry::build(&sources),
//!     SubmitConfig::new("https://api.example.com/contact"),
//! );
//!
//! let mut snapshot = FormSnapshot::new();
//! snapshot.set_text("email", "a@b.com");
//! snapshot.set_checked("terms", false);
//!
//! let report = session.validate_agreements(&snapshot);
//! assert!(!report.is_valid());
//! assert_eq!(report.first_failure().unwrap().name, "terms");
//! ```

pub use vase_client as client;
pub use vase_forms as forms;

pub use vase_client::{FormSession, HttpTransport, SubmitConfig, SubmitOutcome, Transport};
pub use vase_forms::{FieldRegistry, FieldSource, FormSnapshot, FormValidator, PatternTable};
