//! Routes, request shape and error mapping.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mapcolor::{
    Color, ColoringError, ColoringProblem, Region, SolverConfig, SolverResult, StrategyKind,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared state of every request.
#[derive(Debug, Default)]
pub struct AppState {
    config: SolverConfig,
}

impl AppState {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Body of `POST /solve/{algorithm}`.
///
/// `colors` wins when present and non-empty; otherwise `max_colors` labels
/// are synthesized, falling back to the configured default count.
/// `max_colors` above `palette.max_colors_limit` is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub adjacencies: Vec<Vec<Region>>,
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    #[serde(default)]
    pub max_colors: Option<usize>,
}

impl SolveRequest {
    pub fn into_problem(self, config: &SolverConfig) -> Result<ColoringProblem, ApiError> {
        let limit = config.palette.max_colors_limit;
        if let Some(requested) = self.max_colors.filter(|&n| n > limit) {
            return Err(ApiError::TooManyColors { requested, limit });
        }

        Ok(ColoringProblem {
            colors: config
                .resolve_palette(self.colors, self.max_colors)
                .into_colors(),
            regions: self.regions,
            adjacencies: self.adjacencies,
        })
    }
}

/// Request failures, rendered as `{ "error": message }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Coloring(#[from] ColoringError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error("max_colors {requested} exceeds the limit of {limit}")]
    TooManyColors { requested: usize, limit: usize },

    #[error("solver task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Coloring(ColoringError::UnsupportedStrategy(_)) => StatusCode::BAD_REQUEST,
            ApiError::Coloring(ColoringError::UnknownRegion { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::TooManyColors { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(event = "request_failed", status = status.as_u16(), error = %self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Routes without middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/solve/{algorithm}", post(solve))
        .with_state(state)
}

/// Routes with the permissive CORS policy browsers need.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(state).layer(cors)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

async fn solve(
    State(state): State<Arc<AppState>>,
    Path(algorithm): Path<String>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolverResult>, ApiError> {
    let kind: StrategyKind = algorithm.parse()?;
    let Json(request) = payload?;
    let problem = request.into_problem(&state.config)?;

    let start = Instant::now();
    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        mapcolor::solve_with_config(&problem, kind, &config)
    })
    .await??;

    info!(
        event = "request_solved",
        strategy = kind.name(),
        success = result.success,
        steps = result.total_steps,
        duration_ms = start.elapsed().as_millis() as u64,
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests;
