use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use url::Url;

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let long_url = state.shortener().resolve(&short_code).await?;
    let location = location_header(&long_url)?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Uses the stored URL verbatim when it is a valid header value, otherwise
/// its percent-encoded serialization.
fn location_header(long_url: &str) -> Result<HeaderValue> {
    if let Ok(value) = HeaderValue::from_str(long_url) {
        return Ok(value);
    }

    let encoded = Url::parse(long_url)
        .map_err(|e| AppError::Internal(format!("stored URL is unparsable: {e}")))?;
    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::Internal(format!("stored URL is not a valid header: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_url_is_kept_verbatim() {
        let value = location_header("https://example.com").unwrap();
        assert_eq!(value, "https://example.com");
    }

    #[test]
    fn non_ascii_url_is_percent_encoded() {
        let value = location_header("https://example.com/caf\u{e9}").unwrap();
        assert_eq!(value, "https://example.com/caf%C3%A9");
    }
}
