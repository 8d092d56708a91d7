/// Entry submission handler
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::SubmitEntryRequest;
use crate::api::types::SubmitResponse;
use crate::models::NewEntry;
use crate::MoodMeshError;

/// Submit a journal entry (POST /api/submit)
///
/// Validates the payload, enforces one entry per user per day, runs the
/// scoring engine, and persists the entry with its scores.
pub async fn submit_entry(
    State(state): State<AppState>,
    Json(request): Json<SubmitEntryRequest>,
) -> (StatusCode, Json<ApiResponse<SubmitResponse>>) {
    info!(
        "POST /api/submit - user {} ({})",
        request.user_id, request.country
    );

    for (value, field) in [
        (&request.user_id, "user_id"),
        (&request.user_name, "user_name"),
        (&request.country, "country"),
        (&request.text, "text"),
    ] {
        if value.trim().is_empty() {
            let e = MoodMeshError::MissingField(field);
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())));
        }
    }

    let length = request.text.trim().chars().count();
    if length < state.min_entry_chars {
        let e = MoodMeshError::EntryTooShort {
            got: length,
            minimum: state.min_entry_chars,
        };
        return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(e.to_string())));
    }

    let today = Utc::now().date_naive();

    match state.database.has_posted_on(&request.user_id, today).await {
        Ok(true) => {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ApiResponse::error(
                    "You already posted today! Come back tomorrow.",
                )),
            );
        }
        Ok(false) => {}
        Err(e) => {
            error!("Failed to check posting status: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            );
        }
    }

    let scores = state.analyzer.analyze(&request.text);
    info!("📊 Scores for {}: {:?}", request.user_id, scores);

    let entry = NewEntry {
        user_id: request.user_id,
        user_name: request.user_name,
        country: request.country,
        entry_text: request.text,
        entry_date: today,
        scores,
    };

    match state.database.create_entry(entry).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(SubmitResponse { scores })),
        ),
        // A concurrent submission can slip past the probe above; the
        // unique constraint catches it
        Err(e @ MoodMeshError::AlreadyPostedToday { .. }) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiResponse::error(e.to_string())),
        ),
        Err(e) => {
            error!("Failed to store entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Failed to store entry: {e}"))),
            )
        }
    }
}
