use std::path::Path;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    app_module::AppState, health::health_controller,
    prediction::prediction_controller::predict,
};

pub fn application_router() -> Router {
    Router::new()
        .route("/health", get(health_controller::health))
        .route("/api/predict", post(predict))
}

/// The full application: API routes, static files for anything else, and the shared layers.
pub fn build_app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(application_router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state))
                .layer(
                    CorsLayer::new()
                        .allow_origin(tower_http::cors::Any)
                        .allow_methods(tower_http::cors::Any)
                        .allow_headers(tower_http::cors::Any),
                )
                .into_inner(),
        )
}
