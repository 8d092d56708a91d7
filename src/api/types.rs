//! API request and response types

use serde::Deserialize;
use serde::Serialize;

use crate::analyzer::ScoreSet;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Entry submission request
#[derive(Debug, Deserialize)]
pub struct SubmitEntryRequest {
    pub user_id: String,
    pub user_name: String,
    pub country: String,
    pub text: String,
}

/// Entry submission response: the derived scores
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub scores: ScoreSet,
}

/// Country listing response
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}
