//! OpenAPI documentation generation using utoipa
//!
//! Handler functions carry `#[utoipa::path]` annotations; this module collects
//! them into one document served at `/api/openapi.json` and browsable at `/docs`.

use utoipa::OpenApi;

use crate::models::Channel;
use crate::web::handlers::{self, channels::{CreateChannelRequest, UpdateChannelRequest}, health::HealthStatus};
use crate::web::responses::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media Channels API",
        description = "Registry of the media accounts posts are published to. \
            A channel is identified by its title and username pair, and cannot be \
            removed while publications still reference it."
    ),
    paths(
        handlers::channels::list_channels,
        handlers::channels::get_channel,
        handlers::channels::create_channel,
        handlers::channels::update_channel,
        handlers::channels::delete_channel,
        handlers::health::health_check,
    ),
    components(schemas(
        Channel,
        CreateChannelRequest,
        UpdateChannelRequest,
        ErrorResponse,
        HealthStatus,
    )),
    tags(
        (name = "channels", description = "Channel management"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// The generated OpenAPI document
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_channel_route_is_documented() {
        let spec = openapi_spec();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/channels"));
        assert!(paths.iter().any(|p| p.as_str() == "/channels/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));

        let by_id = &spec.paths.paths["/channels/{id}"];
        assert!(by_id.get.is_some());
        assert!(by_id.put.is_some());
        assert!(by_id.delete.is_some());
    }
}
