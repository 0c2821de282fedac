use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    api_route::{FromGraph, JsonRoute},
    error::{ApiError, MISSING_ORIGIN},
    state::AppState,
};

/// The front end also sends `destino`, which is ignored: every tour
/// returns to its origin.
#[derive(Deserialize)]
pub struct RotasRequestBody {
    origem: Option<String>,
}

#[derive(Serialize)]
pub struct RotasResponse {
    rotas: Vec<JsonRoute>,
}

impl IntoResponse for RotasResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn rotas_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RotasRequestBody>,
) -> Result<RotasResponse, ApiError> {
    let origin = body
        .origem
        .filter(|origin| !origin.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_ORIGIN.to_string()))?;

    let solver_state = Arc::clone(&state);
    let solver_origin = origin.clone();
    let run = tokio::task::spawn_blocking(move || solver_state.solve(&solver_origin)).await??;

    info!("Found {} routes from {}", run.best_routes.len(), origin);

    Ok(RotasResponse {
        rotas: run
            .best_routes
            .iter()
            .map(|tour| JsonRoute::from_graph(tour, &state.graph))
            .collect(),
    })
}
