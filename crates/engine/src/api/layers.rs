//! Router assembly with the middleware stack.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::config::EngineConfig;

/// Routes plus timeout, trace and (optional) CORS layers.
///
/// A timed-out request drops the handler future, which abandons any in-flight
/// store call.
pub fn build_router(app: Arc<App>, config: &EngineConfig) -> Router {
    let mut router = super::routes()
        .with_state(app)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    router
}

/// `None` when no usable origin is configured. `"*"` allows any origin.
pub fn cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?.trim();

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
