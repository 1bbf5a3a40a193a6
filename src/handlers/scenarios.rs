use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{self, Protocol, ProtocolParams, ScenarioRow};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    pub old_price: Option<f64>,
    pub new_prices: Vec<f64>,
    pub initial_investment: Option<f64>,
    #[serde(default)]
    pub pool_apy: f64,
    pub protocol_type: Option<String>,
    #[serde(default)]
    pub protocol_config: ProtocolParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponse {
    pub rows: Vec<ScenarioRow>,
    pub requested: usize,
    pub computed: usize,
    pub calculated_at: DateTime<Utc>,
}

/// Scenario table endpoint. Invalid hypothetical prices are skipped
/// silently rather than failing the batch, matching the advanced
/// model's in-process contract.
pub async fn build_scenario_table(
    State(state): State<AppState>,
    Json(request): Json<ScenarioRequest>,
) -> Result<Json<ScenarioResponse>, AppError> {
    let old_price = request.old_price.unwrap_or(0.0);
    let investment = request
        .initial_investment
        .unwrap_or(state.settings.engine.default_investment);
    let protocol = Protocol::parse(
        request
            .protocol_type
            .as_deref()
            .unwrap_or(&state.settings.engine.default_protocol),
    );

    let rows = engine::scenario_table(
        old_price,
        &request.new_prices,
        investment,
        request.pool_apy,
        protocol,
        &request.protocol_config,
    );

    info!(
        protocol = %protocol,
        requested = request.new_prices.len(),
        computed = rows.len(),
        "Served scenario table"
    );

    Ok(Json(ScenarioResponse {
        requested: request.new_prices.len(),
        computed: rows.len(),
        rows,
        calculated_at: Utc::now(),
    }))
}
