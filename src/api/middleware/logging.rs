//! Request/response logging middleware with sensitive header redaction

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::domain::Topic;

/// Log every request and its outcome, including the post topic when the
/// handler attached one to the response.
/// No span is created here; `TraceLayer` already owns the request span.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = redact_headers(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        topic = response_topic(&response),
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn response_topic(response: &Response) -> Option<&str> {
    response.extensions().get::<Topic>().map(Topic::as_str)
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn redact_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| {
            let value = if is_sensitive_header(name.as_str()) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            format!("{}={}", name.as_str(), value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "x-api-key" | "x-goog-api-key" | "cookie" | "proxy-authorization"
    )
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "user-agent"
            | "x-request-id"
            | "x-forwarded-for"
            | "authorization"
            | "x-goog-api-key"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_headers(headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri("/gerar-post");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_is_sensitive_header() {
        assert!(is_sensitive_header("authorization"));
        assert!(is_sensitive_header("x-goog-api-key"));
        assert!(!is_sensitive_header("content-type"));
    }

    #[test]
    fn test_redact_headers() {
        let request = request_with_headers(&[
            ("content-type", "application/json"),
            ("x-goog-api-key", "secret"),
            ("cache-control", "no-cache"),
        ]);

        let log = redact_headers(&request);
        assert!(log.contains("content-type=application/json"));
        assert!(log.contains("x-goog-api-key=[REDACTED]"));
        assert!(!log.contains("secret"));
        assert!(!log.contains("cache-control"));
    }

    #[test]
    fn test_request_id_prefers_header() {
        let request = request_with_headers(&[("x-request-id", "req-42")]);
        assert_eq!(extract_request_id(&request), "req-42");

        let generated = extract_request_id(&request_with_headers(&[]));
        assert!(uuid::Uuid::parse_str(&generated).is_ok());
    }

    #[test]
    fn test_response_topic() {
        let mut response = Response::new(Body::empty());
        assert_eq!(response_topic(&response), None);

        response.extensions_mut().insert(Topic::new("SEO"));
        assert_eq!(response_topic(&response), Some("SEO"));
    }

    #[test]
    fn test_extract_path_falls_back_to_uri() {
        let request = request_with_headers(&[]);
        assert_eq!(extract_path(&request), "/gerar-post");
    }
}
