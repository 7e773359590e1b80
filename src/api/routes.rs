use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::api::handlers::{self as api_handlers, AppState};

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // Public API routes - read-only, no authentication required
    let api_routes = Router::new()
        .route("/users", get(api_handlers::list_users))
        .route("/users/:username/details", get(api_handlers::get_user_details))
        .route("/users/:username/repos", get(api_handlers::get_user_repositories))
        .with_state(state);

    let health_routes = Router::new().route("/health", get(api_handlers::health_check));

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            // CORS - allow all origins for read-only public API
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
