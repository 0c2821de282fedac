mod api_route;
mod config;
mod error;
mod router;
mod routes;
mod state;

use std::sync::Arc;

use axum::serve;
use mimalloc::MiMalloc;
use rotas_aco::{aco_params::AcoParams, alto_paranaiba::alto_paranaiba};
use tracing::{Level, info};

use crate::config::ApiConfig;
use crate::router::app;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env()?;

    let state = Arc::new(AppState {
        graph: alto_paranaiba()?,
        params: AcoParams::default(),
        seed: config.seed,
    });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);

    serve(listener, app(state)).await?;

    Ok(())
}
