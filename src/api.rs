// src/api.rs
//! HTTP surface: thin axum handlers over a shared `SentimentAnalyzer`.
//!
//! Routes:
//! - `GET  /health`  → "ok"
//! - `POST /analyze` → `SentimentResult` for `{"text": "..."}`
//! - `POST /batch`   → `BatchReport` for an array of review rows

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::analyzer::{SentimentAnalyzer, SentimentResult};
use crate::config::AnalyzerConfig;
use crate::dataset::{evaluate, BatchReport, ReviewRecord};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn from_config(cfg: &AnalyzerConfig) -> Self {
        Self::new(SentimentAnalyzer::from_config(cfg))
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct AnalyzeReq {
    text: String,
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Json<SentimentResult> {
    Json(state.analyzer.analyze(&body.text))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(rows): Json<Vec<ReviewRecord>>,
) -> Result<Json<BatchReport>, (StatusCode, String)> {
    if let Some(bad) = rows.iter().find(|r| !(1..=5).contains(&r.rating)) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("review {}: rating {} outside 1..=5", bad.review_id, bad.rating),
        ));
    }

    info!(rows = rows.len(), "batch request");
    let analyzer = state.analyzer.clone();
    // CPU-bound over possibly thousands of rows; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || evaluate(&analyzer, &rows))
        .await
        .map_err(|e| {
            error!(error = %e, "batch task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "batch analysis failed".to_string())
        })?;

    Ok(Json(report))
}
