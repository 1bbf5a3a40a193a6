use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{self, AdvancedResult, CalculationResult, EngineError, Protocol, ProtocolParams};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub initial_investment: Option<f64>,
    #[serde(default)]
    pub pool_apy: f64,
    pub protocol_type: Option<String>,
    #[serde(default)]
    pub protocol_config: ProtocolParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedCalculateResponse {
    #[serde(flatten)]
    pub result: AdvancedResult,
    pub calculated_at: DateTime<Utc>,
}

/// Strict model endpoint: invalid prices are a 400 with a fixed body.
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    let (old_price, new_price, investment, protocol) = unpack(&state, &request);

    let result = engine::calculate(old_price, new_price, investment, request.pool_apy, protocol)
        .map_err(map_engine_error)?;

    info!(
        protocol = %protocol,
        il_percent = %result.impermanent_loss_percent,
        better_strategy = %result.better_strategy,
        "Calculated strict IL model"
    );

    Ok(Json(CalculateResponse {
        result,
        calculated_at: Utc::now(),
    }))
}

/// Advanced model endpoint: the in-process `None` contract surfaces as
/// the same 400 the strict endpoint produces.
pub async fn calculate_advanced(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<AdvancedCalculateResponse>, AppError> {
    let (old_price, new_price, investment, protocol) = unpack(&state, &request);

    let result = engine::calculate_advanced(
        old_price,
        new_price,
        investment,
        request.pool_apy,
        protocol,
        &request.protocol_config,
    )
    .ok_or_else(|| AppError::InvalidInput("Invalid prices".to_string()))?;

    info!(
        protocol = %protocol,
        il_percent = %result.base.impermanent_loss_percent,
        risk_score = result.risk_score,
        "Calculated advanced IL model"
    );

    Ok(Json(AdvancedCalculateResponse {
        result,
        calculated_at: Utc::now(),
    }))
}

/// Applies the configured defaults to a partially-specified request.
/// Missing prices become 0.0 and fail validation downstream.
fn unpack(state: &AppState, request: &CalculateRequest) -> (f64, f64, f64, Protocol) {
    let old_price = request.old_price.unwrap_or(0.0);
    let new_price = request.new_price.unwrap_or(0.0);
    let investment = request
        .initial_investment
        .unwrap_or(state.settings.engine.default_investment);
    let protocol = Protocol::parse(
        request
            .protocol_type
            .as_deref()
            .unwrap_or(&state.settings.engine.default_protocol),
    );
    (old_price, new_price, investment, protocol)
}

fn map_engine_error(err: EngineError) -> AppError {
    match err {
        EngineError::InvalidPrices => AppError::InvalidInput(err.to_string()),
        EngineError::NonFiniteResult { .. } => AppError::CalculationError(err.to_string()),
    }
}
