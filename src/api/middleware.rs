//! Cross-cutting request processing applied ahead of the route table

use axum::{
    extract::Request,
    http::{header::InvalidHeaderValue, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Hardening headers added to every response
const SECURITY_HEADERS: [(&str, &str); 12] = [
    ("content-security-policy", "default-src 'self'"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Build the cross-origin policy
///
/// With no configured origin every origin is allowed.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    match allowed_origin {
        Some(origin) => {
            info!("CORS restricted to origin {}", origin);
            Ok(CorsLayer::new()
                .allow_origin(origin.parse::<HeaderValue>()?)
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => {
            warn!("No CORS origin configured, allowing all origins");
            Ok(CorsLayer::permissive())
        }
    }
}

/// Add the security headers a handler has not already set
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for (name, value) in SECURITY_HEADERS {
        headers
            .entry(HeaderName::from_static(name))
            .or_insert(HeaderValue::from_static(value));
    }

    response
}
