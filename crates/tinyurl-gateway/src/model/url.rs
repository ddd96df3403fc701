use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tinyurl_core::{ShortenParams, Snapshot, UrlMapping};

#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub long_url: String,
    #[serde(default)]
    pub short_code: Option<String>,
}

impl From<CreateUrlRequest> for ShortenParams {
    fn from(value: CreateUrlRequest) -> Self {
        ShortenParams {
            long_url: value.long_url,
            custom_code: value.short_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUrlResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub visit_count: u64,
    pub created_at: Timestamp,
}

impl UrlResponse {
    pub fn from_mapping(mapping: UrlMapping, base_url: &str) -> Self {
        Self {
            short_url: mapping.short_code.to_url(base_url),
            short_code: mapping.short_code.to_string(),
            long_url: mapping.long_url,
            visit_count: mapping.visit_count,
            created_at: mapping.created_at,
        }
    }
}

/// Every mapping keyed by its short code, serialized as a flat JSON object.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsResponse(pub BTreeMap<String, UrlResponse>);

impl StatsResponse {
    pub fn from_snapshot(snapshot: Snapshot, base_url: &str) -> Self {
        Self(
            snapshot
                .into_iter()
                .map(|(code, mapping)| {
                    let url = UrlResponse::from_mapping(mapping, base_url);
                    (code.to_string(), url)
                })
                .collect(),
        )
    }
}
