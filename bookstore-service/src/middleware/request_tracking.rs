//! Request tracking middleware
//!
//! Every request gets an `x-request-id` (generated unless the caller sent one),
//! the id is echoed on the response, and credential headers are marked
//! sensitive so the trace layer does not print them.

use http::HeaderName;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

use crate::ids::MakeTypedRequestId;

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
];

/// Stamp requests with a `req_<uuidv7>` id in `x-request-id`
pub fn request_id_layer() -> SetRequestIdLayer<MakeTypedRequestId> {
    SetRequestIdLayer::x_request_id(MakeTypedRequestId)
}

/// Copy `x-request-id` from the request onto the response
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Mark [`SENSITIVE_HEADERS`] as sensitive
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    let headers = SENSITIVE_HEADERS
        .iter()
        .map(|h| HeaderName::from_static(*h))
        .collect::<Vec<_>>();

    SetSensitiveRequestHeadersLayer::new(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(request_id_propagation_layer())
            .layer(request_id_layer())
    }

    #[test]
    fn test_sensitive_headers_constant() {
        assert!(SENSITIVE_HEADERS.contains(&"authorization"));
        assert!(SENSITIVE_HEADERS.contains(&"x-api-key"));
        // Every entry must be a valid lowercase header name
        let _ = sensitive_headers_layer();
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers()["x-request-id"].to_str().unwrap();
        assert!(id.starts_with("req_"));
    }

    #[tokio::test]
    async fn test_keeps_caller_request_id() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "caller-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "caller-123");
    }
}
