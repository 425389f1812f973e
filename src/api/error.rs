//! Error bodies and status mapping for the HTTP routes

use crate::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// `{"error": "..."}`, returned by every failing cached route
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{"success": false, "message": "..."}`, returned by the detail route
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetailErrorBody {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingKeyword => StatusCode::BAD_REQUEST,
            ApiError::Scrape(_) | ApiError::Serialization(_) => {
                tracing::error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
