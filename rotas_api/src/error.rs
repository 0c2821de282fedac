use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rotas_aco::error::AcoError;
use serde_json::json;
use tracing::error;

pub const INVALID_CITY: &str = "Cidade inválida!";
pub const MISSING_ORIGIN: &str = "Cidade de origem não fornecida";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<AcoError> for ApiError {
    fn from(error: AcoError) -> Self {
        match error {
            AcoError::UnknownCity(_) => ApiError::BadRequest(INVALID_CITY.to_string()),
            AcoError::DuplicateCity(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
