/// Stats-related API handlers
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::CountriesResponse;
use crate::models;
use crate::stats;
use crate::stats::DailyStats;
use crate::stats::MonthlyStats;

/// Daily statistics for a country (GET /api/stats/:country/:date)
pub async fn get_daily_stats(
    State(state): State<AppState>,
    Path((country, date)): Path<(String, String)>,
) -> (StatusCode, Json<ApiResponse<DailyStats>>) {
    info!("GET /api/stats/{}/{}", country, date);

    let date = match models::parse_date(&date) {
        Ok(date) => date,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(e.to_string())),
            );
        }
    };

    match state
        .database
        .list_entries_by_country_date(&country, date)
        .await
    {
        Ok(entries) => {
            let stats = stats::daily_stats(&country, date, &entries);
            (StatusCode::OK, Json(ApiResponse::success(stats)))
        }
        Err(e) => {
            error!("Failed to load entries for {}/{}: {}", country, date, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            )
        }
    }
}

/// Monthly statistics for a country (GET /api/stats/:country/month/:year_month)
pub async fn get_monthly_stats(
    State(state): State<AppState>,
    Path((country, year_month)): Path<(String, String)>,
) -> (StatusCode, Json<ApiResponse<MonthlyStats>>) {
    info!("GET /api/stats/{}/month/{}", country, year_month);

    let (start, end) = match models::month_bounds(&year_month) {
        Ok(bounds) => bounds,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(e.to_string())),
            );
        }
    };

    match state
        .database
        .list_entries_by_country_date_range(&country, start, end)
        .await
    {
        Ok(entries) => {
            let stats = stats::monthly_stats(&country, &year_month, &entries);
            (StatusCode::OK, Json(ApiResponse::success(stats)))
        }
        Err(e) => {
            error!(
                "Failed to load entries for {}/{}: {}",
                country, year_month, e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            )
        }
    }
}

/// All countries with entries (GET /api/countries)
pub async fn get_countries(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<CountriesResponse>>) {
    info!("GET /api/countries");

    match state.database.list_countries().await {
        Ok(countries) => (
            StatusCode::OK,
            Json(ApiResponse::success(CountriesResponse { countries })),
        ),
        Err(e) => {
            error!("Failed to list countries: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Database error: {e}"))),
            )
        }
    }
}
