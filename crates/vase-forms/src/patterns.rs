//! Category-keyed regex table
//!
//! Every text-like field carries a pattern category (`phone`, `email`, ...)
//! that keys into this table. Lookups for categories with no entry report
//! no match: an unknown category can never validate, which keeps a typo in
//! a category declaration from silently accepting bad input.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Generic text pattern: letters, digits, whitespace and light punctuation.
static ALPHA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[\p{L}\p{N}\s.,'-]+$").expect("ALPHA_REGEX: invalid regex pattern")
});

// Phone pattern with an optional +48 / 0048 country prefix, accepting
// 3-3-3 and 2-3-2-2 groupings separated by spaces or hyphens. Unlike the
// other defaults this one is unanchored: a digit run anywhere in the
// value counts as a match.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(\(?(\+|00)?48\)?([ -]?))?(\d{3}[ -]?\d{3}[ -]?\d{3})|([ -]?\d{2}[ -]?\d{3}[ -]?\d{2}[ -]?\d{2})",
	)
	.expect("PHONE_REGEX: invalid regex pattern")
});

// Email pattern: dotted-atom or quoted local part, domain labels or a
// bracketed IPv4 literal.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

// Personal-name pattern covering Latin letters with European diacritics.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-ZàáâäãåąčćęèéêëėįìíîïłńòóôöõøùúûüųūÿýżźñçčšśžÀÁÂÄÃÅĄĆČĖĘÈÉÊËÌÍÎÏĮŁŃÒÓÔÖÕØÙÚÛÜŲŪŸÝŻŹÑßÇŒÆČŠŚŽ∂ð ,.'-]+$",
	)
	.expect("NAME_REGEX: invalid regex pattern")
});

/// Error compiling a caller-supplied pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
	#[error("invalid pattern for category {category}: {source}")]
	Invalid {
		category: String,
		#[source]
		source: regex::Error,
	},
}

/// Maps pattern categories to compiled regexes.
///
/// The default table carries `alpha`, `phone`, `email` and `name`. Callers
/// may register additional categories; a category without an entry never
/// matches.
///
/// # Examples
///
/// ```
/// use vase_forms::PatternTable;
///
/// let table = PatternTable::default();
/// assert!(table.matches("email", "a@b.com"));
/// assert!(!table.matches("email", "not-an-email"));
/// assert!(!table.matches("no-such-category", "anything"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternTable {
	entries: HashMap<String, Regex>,
}

impl Default for PatternTable {
	fn default() -> Self {
		let mut entries = HashMap::new();
		entries.insert("alpha".to_string(), ALPHA_REGEX.clone());
		entries.insert("phone".to_string(), PHONE_REGEX.clone());
		entries.insert("email".to_string(), EMAIL_REGEX.clone());
		entries.insert("name".to_string(), NAME_REGEX.clone());
		Self { entries }
	}
}

impl PatternTable {
	/// Create an empty table with no categories at all.
	pub fn empty() -> Self {
		Self {
			entries: HashMap::new(),
		}
	}

	/// Register (or replace) a category pattern.
	///
	/// # Examples
	///
	/// ```
	/// use vase_forms::PatternTable;
	///
	/// let mut table = PatternTable::default();
	/// table.insert("zip", r"^\d{2}-\d{3}$").unwrap();
	/// assert!(table.matches("zip", "00-950"));
	/// assert!(table.insert("bad", r"(").is_err());
	/// ```
	pub fn insert(&mut self, category: impl Into<String>, pattern: &str) -> Result<(), PatternError> {
		let category = category.into();
		let regex = Regex::new(pattern).map_err(|source| PatternError::Invalid {
			category: category.clone(),
			source,
		})?;
		self.entries.insert(category, regex);
		Ok(())
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with_pattern(
		mut self,
		category: impl Into<String>,
		pattern: &str,
	) -> Result<Self, PatternError> {
		self.insert(category, pattern)?;
		Ok(self)
	}

	/// Whether a category has an entry.
	pub fn contains(&self, category: &str) -> bool {
		self.entries.contains_key(category)
	}

	/// Test a value against a category's pattern.
	///
	/// Returns `false` for categories with no entry (fail closed).
	pub fn matches(&self, category: &str, value: &str) -> bool {
		match self.entries.get(category) {
			Some(regex) => regex.is_match(value),
			None => false,
		}
	}
}
