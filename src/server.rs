use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::db::SqliteRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<SqliteRepository>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<SqliteRepository>) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/", get(crate::catalog::api_info))
        .route("/filter-movie", get(crate::catalog::filter_movie))
        .route("/box-office-movies", get(crate::catalog::box_office_movies))
        .route("/recent-movies", get(crate::catalog::recent_movies));

    Router::new()
        .merge(catalog_routes)
        .merge(
            SwaggerUi::new("/api-docs")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .nest_service("/public", ServeDir::new(&state.config.publicdir))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
