//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::dto::to_iso_string;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,        // optional, minutes
///   "shortcode": "abcd"    // optional, 4-10 characters
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:5000/shorturls/abcd",
///   "expiry": "2024-01-01T00:30:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 for an invalid URL, shortcode or validity, or a malformed body
/// - 409 if the shortcode is already taken
/// - 500 if no unique code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(payload) = payload?;
    let new_link = payload.into_new_short_url()?;

    let link = state.link_service.create_short_link(new_link).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link: state.link_service.short_link(&link.code),
            expiry: to_iso_string(link.expires_at),
        }),
    ))
}
