//! Health check HTTP handlers

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::database::DatabaseType;
use crate::web::{AppState, extractors::RequestContext, responses::ApiResponse, utils::log_request};

/// Service health report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// `healthy` or `unhealthy`
    pub status: String,
    pub version: String,
    /// Database backend in use
    pub database: String,
    pub database_connected: bool,
}

/// Health check endpoint
///
/// Reports 503 when the database does not answer. The report is still
/// attached, inside a failed envelope.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 503, description = "Database is unreachable"),
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    context: RequestContext,
) -> Response {
    log_request(&method, &uri, &context);

    let database_connected = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check database ping failed: {:#}", e);
            false
        }
    };

    health_response(database_connected, state.database.database_type())
}

fn health_response(database_connected: bool, database: DatabaseType) -> Response {
    let health = HealthStatus {
        status: if database_connected { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        database_connected,
    };

    if database_connected {
        return (StatusCode::OK, Json(ApiResponse::success(health))).into_response();
    }

    let body = ApiResponse {
        success: false,
        data: Some(health),
        error: Some("Database is unreachable".to_string()),
        timestamp: chrono::Utc::now(),
    };
    (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
}
