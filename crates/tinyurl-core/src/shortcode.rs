use crate::error::ShortenerError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::Display;
use url::Url;

/// Maximum number of characters in a short code.
pub const MAX_LENGTH: usize = 64;

/// A validated short code identifier for a shortened URL.
///
/// Short codes are non-empty, at most [`MAX_LENGTH`] characters long and
/// contain no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> Result<Self, ShortenerError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    ///
    /// The code is appended as a single percent-encoded path segment, so
    /// characters such as `/`, `?` or `#` survive the round trip.
    pub fn to_url(&self, base_url: &str) -> String {
        let fallback = || format!("{}/{}", base_url.trim_end_matches('/'), self.0);

        let Ok(mut url) = Url::parse(base_url) else {
            return fallback();
        };
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(&self.0);
            }
            Err(()) => return fallback(),
        }
        url.into()
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn validate(code: &str) -> Result<(), ShortenerError> {
        if code.is_empty() {
            return Err(ShortenerError::InvalidInput(
                "short code cannot be empty".to_string(),
            ));
        }

        let length = code.chars().count();
        if length > MAX_LENGTH {
            return Err(ShortenerError::InvalidInput(format!(
                "short code must be at most {} characters, got {}",
                MAX_LENGTH, length
            )));
        }

        if code.chars().any(char::is_whitespace) {
            return Err(ShortenerError::InvalidInput(format!(
                "short code must not contain whitespace: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ShortCode {
    type Error = ShortenerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(value: ShortCode) -> Self {
        value.0
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
