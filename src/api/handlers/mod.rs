/// API request handlers
use std::sync::Arc;

use axum::Json;

use crate::analyzer::SentimentAnalyzer;
use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::database::Database;

// Re-export sub-modules
pub mod entries;
pub mod stats;

// Re-export handlers
pub use entries::*;
pub use stats::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub analyzer: SentimentAnalyzer,
    pub min_entry_chars: usize,
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
