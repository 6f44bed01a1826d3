//! Request extractors and validation
//!
//! Custom extractors for per-request context and for JSON bodies whose
//! rejections are reported as 400 in the standard error envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use super::middleware::REQUEST_ID_HEADER;
use super::responses::bad_request;

/// Request context for logging
///
/// `request_id` is the id the logging middleware assigned, so handler logs
/// and the `x-request-id` response header agree.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_agent: Option<String>,
    pub real_ip: Option<String>,
    pub request_id: String,
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let real_ip = parts
            .headers
            .get("x-real-ip")
            .or_else(|| parts.headers.get("x-forwarded-for"))
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .map(|s| s.trim().to_string());

        // Only absent when the extractor runs outside the middleware stack
        let request_id = parts
            .headers
            .get(&REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self {
            user_agent,
            real_ip,
            request_id,
        })
    }
}

/// JSON body extractor that rejects with 400
///
/// Axum's `Json` answers malformed bodies with 415 or 422. Channel endpoints
/// treat every unreadable body as invalid input instead. The body must be a
/// JSON object; arrays would otherwise deserialize positionally into structs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(&rejection.body_text()))?;

        if !value.is_object() {
            return Err(bad_request("Request body must be a JSON object"));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| bad_request(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request as HttpRequest, StatusCode};

    #[tokio::test]
    async fn request_context_reads_forwarding_headers() {
        let request = HttpRequest::builder()
            .uri("/channels")
            .header("user-agent", "curl/8.0")
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let context = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(context.user_agent.as_deref(), Some("curl/8.0"));
        assert_eq!(context.real_ip.as_deref(), Some("203.0.113.7"));
        assert!(!context.request_id.is_empty());
    }

    #[tokio::test]
    async fn request_context_uses_the_assigned_request_id() {
        let request = HttpRequest::builder()
            .uri("/channels")
            .header("x-request-id", "trace-me")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let context = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(context.request_id, "trace-me");
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/channels")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"title\": "))
            .unwrap();

        let rejection = ValidatedJson::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Pair {
        title: String,
        #[allow(dead_code)]
        username: String,
    }

    #[tokio::test]
    async fn array_body_is_a_bad_request() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/channels")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("[\"Facebook\", \"test@test.com\"]"))
            .unwrap();

        let rejection = ValidatedJson::<Pair>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn object_body_is_accepted() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/channels")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(
                "{\"title\": \"Facebook\", \"username\": \"test@test.com\"}",
            ))
            .unwrap();

        let ValidatedJson(pair) = ValidatedJson::<Pair>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(pair.title, "Facebook");
    }
}
