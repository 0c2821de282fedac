use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rotas_aco::alto_paranaiba::DEFAULT_ORIGIN;
use serde::{Deserialize, Serialize};

use crate::{
    api_route::{FromGraph, JsonTour},
    error::ApiError,
    state::AppState,
};

#[derive(Deserialize)]
pub struct MelhorRotaRequestBody {
    origem: Option<String>,
}

#[derive(Serialize)]
pub struct MelhorRotaResponse {
    melhor_distancia: JsonTour,
    melhor_custo: JsonTour,
    melhor_tempo: JsonTour,
}

impl IntoResponse for MelhorRotaResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn melhor_rota_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MelhorRotaRequestBody>,
) -> Result<MelhorRotaResponse, ApiError> {
    let origin = body.origem.unwrap_or_else(|| DEFAULT_ORIGIN.to_string());

    let solver_state = Arc::clone(&state);
    let run = tokio::task::spawn_blocking(move || solver_state.solve(&origin)).await??;

    let best = run.by_objective.ok_or_else(|| {
        ApiError::InternalServerError("No ant completed a tour".to_string())
    })?;

    Ok(MelhorRotaResponse {
        melhor_distancia: JsonTour::from_graph(&best.distance, &state.graph),
        melhor_custo: JsonTour::from_graph(&best.cost, &state.graph),
        melhor_tempo: JsonTour::from_graph(&best.time, &state.graph),
    })
}
