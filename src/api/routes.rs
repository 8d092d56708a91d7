//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Entry submission
        .route("/submit", post(handlers::submit_entry))
        // Statistics
        .route("/stats/:country/:date", get(handlers::get_daily_stats))
        .route(
            "/stats/:country/month/:year_month",
            get(handlers::get_monthly_stats),
        )
        // Countries
        .route("/countries", get(handlers::get_countries))
        .with_state(state)
}
