use crate::app::is_reserved;
use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, UrlResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tinyurl_core::{ShortenParams, ShortenerError, Validate, Violation};
use tracing::info;

pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let params = ShortenParams::from(request);

    let mut violations = params.validate();
    if let Some(code) = params.desired_code().filter(|code| is_reserved(code)) {
        violations.push(Violation::new(
            "short_code",
            format!("short code '{code}' is reserved"),
        ));
    }
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let long_url = params.long_url.clone();
    let short_code = state.shortener().shorten(params).await?;
    info!(code = %short_code, "created short url");

    let response = CreateUrlResponse {
        short_url: short_code.to_url(state.base_url()),
        short_code: short_code.to_string(),
        long_url,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>> {
    let mapping = state.shortener().lookup(&short_code).await?;
    Ok(Json(UrlResponse::from_mapping(mapping, state.base_url())))
}

pub async fn delete_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    if state.shortener().delete(&short_code).await? {
        info!(code = %short_code, "deleted short url");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ShortenerError::NotFound(short_code).into())
    }
}
