//! Web utility functions

use axum::http::{Method, Uri};
use tracing::info;

use super::extractors::RequestContext;

/// Log an incoming HTTP request
pub fn log_request(method: &Method, uri: &Uri, context: &RequestContext) {
    info!(
        method = %method,
        uri = %uri,
        request_id = %context.request_id,
        user_agent = ?context.user_agent,
        real_ip = ?context.real_ip,
        "HTTP request"
    );
}

/// Extract a channel id from a path parameter
pub fn extract_id_param(param: &str) -> Result<i32, String> {
    param
        .parse::<i32>()
        .map_err(|_| format!("Invalid id format: {}", param))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id_param() {
        assert_eq!(extract_id_param("42").unwrap(), 42);
        assert!(extract_id_param("abc").is_err());
        assert!(extract_id_param("1.5").is_err());
        assert!(extract_id_param("").is_err());
    }
}
