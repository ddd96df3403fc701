use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored association between a short code and its target URL.
///
/// Values of this type are always copies; mutating one never affects the
/// repository it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// The unique short code, immutable once assigned.
    pub short_code: ShortCode,
    /// The absolute target URL.
    pub long_url: String,
    /// Number of successful resolves so far.
    pub visit_count: u64,
    /// When the mapping was created.
    pub created_at: Timestamp,
}

impl UrlMapping {
    /// Creates a fresh mapping with a zero visit count, stamped with the current time.
    pub fn new(short_code: ShortCode, long_url: impl Into<String>) -> Self {
        Self {
            short_code,
            long_url: long_url.into(),
            visit_count: 0,
            created_at: Timestamp::now(),
        }
    }
}

/// A point-in-time copy of every live mapping, keyed by short code.
pub type Snapshot = HashMap<ShortCode, UrlMapping>;
