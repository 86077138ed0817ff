//! HTTP route handlers.
//!
//! Two exact-match routes, each with its own Cache-Control header. Unknown
//! paths and unsupported methods fall through to axum's default 404 and 405.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME};
use crate::middleware::request_id_layer;

/// Creates the Axum router with both routes and their cache headers.
///
/// Header layers sit on the method routers so the default 404 and 405
/// responses stay untouched.
pub fn create_router() -> Router {
    let home_route = get(home::index).route_layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_HOME),
    ));

    // Health check - never cached, always fresh for liveness probes
    let health_route = get(health::health).route_layer(SetResponseHeaderLayer::overriding(
        CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_HEALTH),
    ));

    Router::new()
        .route("/", home_route)
        .route("/health", health_route)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
