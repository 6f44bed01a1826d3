//! Channel HTTP handlers
//!
//! Thin wrappers around `ChannelService`: they map the wire DTOs to service
//! requests and service outcomes to status codes.

use axum::{
    extract::{Path, State},
    http::{Method, Uri},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};
use crate::models::{ChannelCreateRequest, ChannelUpdateRequest};
use crate::web::{
    AppState,
    extractors::{RequestContext, ValidatedJson},
    responses::{bad_request, created, empty_ok, handle_error, ok},
    utils::{extract_id_param, log_request},
};

/// Request DTO for creating a channel
///
/// Fields are optional on the wire so a missing field is reported as a
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateChannelRequest {
    #[schema(example = "Facebook")]
    pub title: Option<String>,
    #[schema(example = "test@test.com")]
    pub username: Option<String>,
}

impl CreateChannelRequest {
    /// Convert to service layer request
    pub fn into_service_request(self) -> AppResult<ChannelCreateRequest> {
        let title = self
            .title
            .ok_or_else(|| AppError::validation("title is required"))?;
        let username = self
            .username
            .ok_or_else(|| AppError::validation("username is required"))?;

        Ok(ChannelCreateRequest::new(title, username))
    }
}

/// Request DTO for updating a channel; omitted fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateChannelRequest {
    #[schema(example = "Meta")]
    pub title: Option<String>,
    pub username: Option<String>,
}

impl UpdateChannelRequest {
    /// Convert to service layer request
    pub fn into_service_request(self) -> ChannelUpdateRequest {
        ChannelUpdateRequest {
            title: self.title,
            username: self.username,
        }
    }
}

/// List all channels
#[utoipa::path(
    get,
    path = "/channels",
    tag = "channels",
    responses(
        (status = 200, description = "All channels", body = [crate::models::Channel]),
        (status = 500, description = "Internal server error", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn list_channels(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    match state.channel_service.list_all().await {
        Ok(channels) => ok(channels),
        Err(error) => handle_error(error),
    }
}

/// Get a channel by id
#[utoipa::path(
    get,
    path = "/channels/{id}",
    tag = "channels",
    params(
        ("id" = i32, Path, description = "Channel id", example = 1),
    ),
    responses(
        (status = 200, description = "Channel found", body = crate::models::Channel),
        (status = 400, description = "Invalid id format", body = crate::web::responses::ErrorResponse),
        (status = 404, description = "Channel not found", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn get_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    let id = match extract_id_param(&id) {
        Ok(id) => id,
        Err(error) => return bad_request(&error),
    };

    match state.channel_service.get_by_id(id).await {
        Ok(channel) => ok(channel),
        Err(error) => handle_error(error),
    }
}

/// Create a channel
#[utoipa::path(
    post,
    path = "/channels",
    tag = "channels",
    request_body = CreateChannelRequest,
    responses(
        (status = 201, description = "Channel created", body = crate::models::Channel),
        (status = 400, description = "Missing, empty or malformed field", body = crate::web::responses::ErrorResponse),
        (status = 409, description = "A channel with this title and username already exists", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn create_channel(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    context: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    let service_request = match request.into_service_request() {
        Ok(request) => request,
        Err(error) => return handle_error(error),
    };

    match state.channel_service.create(service_request).await {
        Ok(channel) => created(channel),
        Err(error) => handle_error(error),
    }
}

/// Update a channel
#[utoipa::path(
    put,
    path = "/channels/{id}",
    tag = "channels",
    params(
        ("id" = i32, Path, description = "Channel id", example = 1),
    ),
    request_body = UpdateChannelRequest,
    responses(
        (status = 200, description = "Channel updated", body = crate::models::Channel),
        (status = 400, description = "Invalid id, empty field or malformed body", body = crate::web::responses::ErrorResponse),
        (status = 404, description = "Channel not found", body = crate::web::responses::ErrorResponse),
        (status = 409, description = "Another channel already uses this title and username", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn update_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    context: RequestContext,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    let id = match extract_id_param(&id) {
        Ok(id) => id,
        Err(error) => return bad_request(&error),
    };

    match state
        .channel_service
        .update(id, request.into_service_request())
        .await
    {
        Ok(channel) => ok(channel),
        Err(error) => handle_error(error),
    }
}

/// Delete a channel
#[utoipa::path(
    delete,
    path = "/channels/{id}",
    tag = "channels",
    params(
        ("id" = i32, Path, description = "Channel id", example = 1),
    ),
    responses(
        (status = 200, description = "Channel deleted"),
        (status = 400, description = "Invalid id format", body = crate::web::responses::ErrorResponse),
        (status = 403, description = "Channel has scheduled or published content", body = crate::web::responses::ErrorResponse),
        (status = 404, description = "Channel not found", body = crate::web::responses::ErrorResponse),
    )
)]
pub async fn delete_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    context: RequestContext,
) -> impl IntoResponse {
    log_request(&method, &uri, &context);

    let id = match extract_id_param(&id) {
        Ok(id) => id,
        Err(error) => return bad_request(&error),
    };

    match state.channel_service.delete(id).await {
        Ok(()) => empty_ok(),
        Err(error) => handle_error(error),
    }
}
