//! HTTP middleware

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Header carrying the id the request was logged under
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request logging middleware
///
/// Reuses an inbound `x-request-id` when the caller sent one. The id is
/// written onto the request for extractors downstream and echoed back on
/// the response.
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    mut request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let header_value = HeaderValue::from_str(&request_id).ok();
    if let Some(value) = &header_value {
        request
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value.clone());
    }

    debug!(method = %method, uri = %uri, request_id = %request_id, "HTTP request started");

    let mut response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() || status.is_client_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            request_id = %request_id,
            duration_ms,
            "HTTP request completed with error"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            request_id = %request_id,
            duration_ms,
            "HTTP request completed"
        );
    }

    if let Some(value) = header_value {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::extractors::RequestContext;
    use axum::{Router, middleware, routing::get};
    use axum_test::TestServer;

    async fn echo_request_id(context: RequestContext) -> String {
        context.request_id
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/", get(echo_request_id))
            .layer(middleware::from_fn(request_logging_middleware));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn handlers_see_the_id_sent_back_to_the_caller() {
        let response = server().get("/").await;

        let header = response.header(REQUEST_ID_HEADER.clone());
        assert_eq!(response.text(), header.to_str().unwrap());
    }

    #[tokio::test]
    async fn inbound_request_id_is_kept() {
        let response = server()
            .get("/")
            .add_header(REQUEST_ID_HEADER.clone(), HeaderValue::from_static("trace-me"))
            .await;

        assert_eq!(response.text(), "trace-me");
        assert_eq!(response.header(REQUEST_ID_HEADER.clone()), "trace-me");
    }
}
