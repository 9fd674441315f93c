use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ALLOWED_ORIGINS;

/// CORS policy for the lead endpoints
///
/// Only origins on the fixed allow-list are echoed back in
/// `Access-Control-Allow-Origin`; everything else gets no CORS grant and
/// the browser blocks the cross-origin read. Preflights advertise
/// `POST, OPTIONS`, the `Content-Type` header, and a one-day max-age.
pub fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|origin| origin.parse().expect("static origin is a valid header value"))
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(86_400))
}
