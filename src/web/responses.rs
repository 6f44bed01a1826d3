//! HTTP response types and utilities
//!
//! Channel endpoints answer with the bare resource on success. Failures, and
//! the operational endpoints, use the `ApiResponse` envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error envelope as it appears in the OpenAPI document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human readable reason
    pub error: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Status code and client-facing message for an application error
pub fn error_status(error: &AppError) -> (StatusCode, String) {
    match error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{} with id '{}' not found", resource, id),
        ),
        AppError::Conflict { message, .. } => (StatusCode::CONFLICT, message.clone()),
        AppError::Forbidden { message, .. } => (StatusCode::FORBIDDEN, message.clone()),
        AppError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Data access failed".to_string(),
        ),
    }
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> Response {
    let (status, message) = error_status(&error);
    if status.is_server_error() {
        error!(error = %error, "Request failed");
    }

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}

/// Success response helpers
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// 200 with an empty body
pub fn empty_ok() -> Response {
    StatusCode::OK.into_response()
}

/// Error response helpers
pub fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;
    use sea_orm::DbErr;

    #[test]
    fn domain_errors_map_to_distinct_statuses() {
        let cases = [
            (AppError::validation("title must not be empty"), StatusCode::BAD_REQUEST),
            (AppError::not_found("channel", 9999), StatusCode::NOT_FOUND),
            (AppError::conflict("channel", "taken"), StatusCode::CONFLICT),
            (AppError::forbidden("channel", "in use"), StatusCode::FORBIDDEN),
            (
                AppError::Repository(RepositoryError::Database(DbErr::Custom("boom".into()))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_status(&error).0, expected, "{error:?}");
        }
    }

    #[test]
    fn store_details_are_not_leaked() {
        let error = AppError::Repository(RepositoryError::Database(DbErr::Custom(
            "password=hunter2".into(),
        )));
        let (_, message) = error_status(&error);
        assert_eq!(message, "Data access failed");
    }

    #[test]
    fn not_found_message_names_the_id() {
        let (_, message) = error_status(&AppError::not_found("channel", 42));
        assert_eq!(message, "channel with id '42' not found");
    }

    #[test]
    fn error_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("nope".to_string())).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "nope");
        assert!(body.get("data").is_none());
        assert!(body.get("timestamp").is_some());
    }
}
