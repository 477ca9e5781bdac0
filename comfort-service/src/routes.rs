//! Route table and request handlers
//!
//! Seats are addressed by their seat number (`1..=W*H`); time slots by their
//! label, e.g. `/readings/6/10:00`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use serde::Deserialize;

use comfort_core::{constants::DEFAULT_TOP_N, PositionId};
use comfort_schemas::{
    records::format_timestamp, AssessmentResponse, ControlSourceRecord, ControlSourceStateRequest,
    GridResponse, ReadingArchive, ReadingRecord, RecommendationResponse, StatsResponse,
    SubmitReadingRequest,
};

use crate::{error::ApiError, state::AppState};

/// `?slot=` query
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Time-slot label
    pub slot: String,
}

/// `?slot=&limit=` query
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// Time-slot label
    pub slot: String,
    /// Maximum number of entries, five when omitted
    pub limit: Option<usize>,
}

/// Router serving every endpoint
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/grid", get(get_grid))
        .route("/time-slots", get(get_time_slots))
        .route("/readings", get(export_readings).post(submit_reading))
        .route("/readings/:position/:slot", get(get_reading))
        .route("/positions/:position/assessment", get(get_assessment))
        .route("/recommendations", get(get_recommendations))
        .route("/heatmap", get(get_heatmap))
        .route("/control-sources", get(list_control_sources))
        .route("/control-sources/:id", put(set_control_source))
        .route("/stats", get(get_stats))
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": format_timestamp(&chrono::Utc::now())
    }))
}

async fn get_grid(State(state): State<AppState>) -> Json<GridResponse> {
    let engine = state.engine.read().await;
    Json(GridResponse::from(engine.grid()))
}

async fn get_time_slots(State(state): State<AppState>) -> Json<Vec<String>> {
    let engine = state.engine.read().await;
    Json(engine.time_slots().map(|slot| slot.as_str().to_owned()).collect())
}

async fn submit_reading(
    State(state): State<AppState>,
    payload: Result<Json<SubmitReadingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReadingRecord>), ApiError> {
    let Json(request) = payload?;
    let mut engine = state.engine.write().await;

    let id = PositionId(request.position);
    let position = engine.position_for_id(id)?;
    let reading = engine.submit_reading(
        position,
        &request.time_slot,
        request.illuminance,
        request.temp_rating,
        request.comment,
    )?;

    let slot = engine.time_slot(&request.time_slot)?;
    Ok((
        StatusCode::CREATED,
        Json(ReadingRecord::new(id, position, slot, &reading)),
    ))
}

async fn export_readings(State(state): State<AppState>) -> Json<ReadingArchive> {
    let engine = state.engine.read().await;
    Json(ReadingArchive::capture(&*engine))
}

async fn get_reading(
    State(state): State<AppState>,
    path: Result<Path<(u32, String)>, PathRejection>,
) -> Result<Json<ReadingRecord>, ApiError> {
    let Path((seat, label)) = path?;
    let engine = state.engine.read().await;

    let id = PositionId(seat);
    let position = engine.position_for_id(id)?;
    let reading = engine
        .reading(position, &label)?
        .ok_or_else(|| ApiError::NotFound(format!("No reading for seat {} at {}", seat, label)))?;
    let slot = engine.time_slot(&label)?;

    Ok(Json(ReadingRecord::new(id, position, slot, reading)))
}

async fn get_assessment(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    query: Result<Query<SlotQuery>, QueryRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Path(seat) = path?;
    let Query(query) = query?;
    let engine = state.engine.read().await;

    let id = PositionId(seat);
    let position = engine.position_for_id(id)?;
    let assessment = engine.score_and_color(position, &query.slot)?;
    Ok(Json(AssessmentResponse::new(id, position, &query.slot, assessment)))
}

async fn get_recommendations(
    State(state): State<AppState>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Json<Vec<RecommendationResponse>>, ApiError> {
    let Query(query) = query?;
    let engine = state.engine.read().await;

    let ranked = engine.top_recommendations(&query.slot, query.limit.unwrap_or(DEFAULT_TOP_N))?;
    Ok(Json(RecommendationResponse::from_ranking(&ranked)))
}

async fn get_heatmap(
    State(state): State<AppState>,
    query: Result<Query<SlotQuery>, QueryRejection>,
) -> Result<Json<Vec<AssessmentResponse>>, ApiError> {
    let Query(query) = query?;
    let engine = state.engine.read().await;

    let cells = engine
        .heatmap(&query.slot)?
        .into_iter()
        .map(|cell| AssessmentResponse::new(cell.id, cell.position, &query.slot, cell.assessment))
        .collect();
    Ok(Json(cells))
}

async fn list_control_sources(State(state): State<AppState>) -> Json<Vec<ControlSourceRecord>> {
    let engine = state.engine.read().await;
    Json(engine.list_control_sources().iter().map(ControlSourceRecord::from).collect())
}

async fn set_control_source(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<ControlSourceStateRequest>, JsonRejection>,
) -> Result<Json<ControlSourceRecord>, ApiError> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let mut engine = state.engine.write().await;

    let source = engine.set_control_source_state(id, request.active)?;
    Ok(Json(ControlSourceRecord::from(source)))
}

async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let engine = state.engine.read().await;
    Json(StatsResponse::from(engine.stats()))
}
