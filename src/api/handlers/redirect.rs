//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Click Tracking
///
/// Each successful redirect records a click with the `Referer` header as its
/// source (`Direct` when absent) before the response is sent.
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 410 Gone if the link has expired
///
/// No click is recorded for refused redirects.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let original_url = state.link_service.resolve(&code, referer).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
