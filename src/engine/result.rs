// Calculation result value objects. Constructed fresh on every call,
// never cached, no identity beyond field values.
use serde::{Deserialize, Serialize};

use super::metrics::ProtocolMetrics;
use super::protocol::Complexity;

/// Core HODL-vs-LP comparison produced by both entry points.
///
/// Currency fields are rounded to 2 decimals, ratio/percent fields that
/// feed further math to 4. Wire names are camelCase for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Protocol display name.
    pub protocol: String,
    pub initial_investment: f64,
    pub price_ratio: f64,
    /// LP position value as a fraction of the initial investment,
    /// ignoring fees.
    pub multiplier: f64,
    pub hodl_value: f64,
    pub lp_value: f64,
    pub lp_value_with_fees: f64,
    pub hodl_profit: f64,
    pub hodl_profit_percent: f64,
    pub lp_profit: f64,
    pub lp_profit_percent: f64,
    pub impermanent_loss_usd: f64,
    pub impermanent_loss_percent: f64,
    pub fees_per_day: f64,
    pub fees_per_week: f64,
    pub fees_per_month: f64,
    pub fees_per_year: f64,
    /// Fees over the assumed 30-day holding period.
    pub total_fees_earned: f64,
    /// Days of fee income needed to offset the loss, when defined.
    pub break_even_days: Option<u32>,
    /// Human-readable break-even bucket.
    pub break_even: String,
    /// "HODL" or "LP"; ties favour LP.
    pub better_strategy: String,
}

/// Full advanced-model result: the core comparison plus protocol-tagged
/// auxiliary data, risk score, efficiency and guidance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedResult {
    #[serde(flatten)]
    pub base: CalculationResult,
    pub protocol_metrics: ProtocolMetrics,
    /// Integer risk score in [1, 10].
    pub risk_score: u8,
    /// Capital-efficiency score in [0, 100].
    pub efficiency_score: u8,
    pub complexity: Complexity,
    pub recommendation: String,
}
