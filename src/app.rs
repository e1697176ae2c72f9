use std::sync::Arc;

use crate::{
    routes::apply_routes,
    services::lookup_client::lookup_service::{LookupService, LookupServiceConfig},
    types::app_state::AppState,
    utils::app_config::AppConfig,
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(config: &AppConfig) -> Router {
    let cors_middleware = CorsLayer::permissive();
    let state = AppState {
        lookup: Arc::new(LookupService::new(LookupServiceConfig {
            host: config.lookup_host.clone(),
        })),
        config: config.clone(),
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "Postcode search"
}
