//! Pure validation rules for shortener input.
//!
//! Rules report every problem they find instead of stopping at the first one,
//! so adapters can hand the full list back to their callers. The shortener
//! service runs the same rules again before touching storage.

use crate::error::ShortenerError;
use crate::shortcode::ShortCode;
use crate::shortener::ShortenParams;
use serde::Serialize;
use url::Url;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the offending input field.
    pub field: &'static str,
    /// Human readable description of the problem.
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<Violation> for ShortenerError {
    fn from(value: Violation) -> Self {
        ShortenerError::InvalidInput(format!("{}: {}", value.field, value.message))
    }
}

/// Types that can check themselves against a rule set.
pub trait Validate {
    /// Returns every violated rule; an empty list means the input is valid.
    fn validate(&self) -> Vec<Violation>;

    /// Converts the first violation, if any, into a [`ShortenerError`].
    fn ensure_valid(&self) -> Result<(), ShortenerError> {
        match self.validate().into_iter().next() {
            Some(violation) => Err(violation.into()),
            None => Ok(()),
        }
    }
}

impl Validate for ShortenParams {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        violations.extend(validate_long_url("long_url", &self.long_url));
        if let Some(code) = self.desired_code() {
            violations.extend(validate_short_code("short_code", code));
        }
        violations
    }
}

/// Checks that `url` is an absolute `http` or `https` URL with a host.
pub fn validate_long_url(field: &'static str, url: &str) -> Option<Violation> {
    if url.is_empty() {
        return Some(Violation::new(field, "long URL cannot be empty"));
    }

    if url.chars().any(char::is_whitespace) {
        return Some(Violation::new(field, "long URL must not contain whitespace"));
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => return Some(Violation::new(field, format!("invalid URL format: {e}"))),
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Some(Violation::new(
            field,
            format!("URL scheme must be http or https, got '{}'", parsed.scheme()),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Some(Violation::new(field, "URL must have a host"));
    }

    None
}

/// Checks a caller-chosen short code against the [`ShortCode`] rules.
pub fn validate_short_code(field: &'static str, code: &str) -> Option<Violation> {
    ShortCode::validate(code).err().map(|e| match e {
        ShortenerError::InvalidInput(message) => Violation::new(field, message),
        other => Violation::new(field, other.to_string()),
    })
}

/// Checks that a short code used for a lookup is non-empty.
pub fn validate_code(field: &'static str, code: &str) -> Option<Violation> {
    code.is_empty()
        .then(|| Violation::new(field, "short code cannot be empty"))
}
