use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::post;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{melhor_rota::melhor_rota_handler, rotas::rotas_handler};
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/rotas", post(rotas_handler))
        .route("/melhor_rota", post(melhor_rota_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
