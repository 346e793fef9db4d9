use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ApiError;
use crate::routes;

/// Builds the full application: routes, fallbacks and middleware.
pub fn build_router(config: &Config) -> Router {
    // CORS configuration for the draft frontend
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        // Root and health
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health_check))

        // Player endpoints
        .route("/players/", get(routes::players::list_players))
        .route("/players", get(routes::players::redirect_to_list))

        .fallback(|| async { ApiError::NotFound })
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
