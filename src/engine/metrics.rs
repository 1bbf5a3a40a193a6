// Protocol-specific auxiliary outputs, tagged by formula family so that
// downstream consumers (scorer, recommender, rater) match exhaustively.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Auxiliary data emitted by the protocol IL model alongside the core
/// multiplier. One variant per formula family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProtocolMetrics {
    ConstantProduct,
    Concentrated(ConcentratedMetrics),
    Stable(StableMetrics),
    Weighted(WeightedMetrics),
    Gmx(GmxMetrics),
    Ve33(Ve33Metrics),
    Algebra(AlgebraMetrics),
}

impl ProtocolMetrics {
    /// Name of the formula family that produced these metrics.
    pub fn family_name(&self) -> &'static str {
        match self {
            ProtocolMetrics::ConstantProduct => "constant_product",
            ProtocolMetrics::Concentrated(_) => "concentrated",
            ProtocolMetrics::Stable(_) => "stable",
            ProtocolMetrics::Weighted(_) => "weighted",
            ProtocolMetrics::Gmx(_) => "gmx",
            ProtocolMetrics::Ve33(_) => "ve33",
            ProtocolMetrics::Algebra(_) => "algebra",
        }
    }
}

/// Concentrated-liquidity position state relative to its price range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcentratedMetrics {
    pub in_range: bool,
    pub out_of_range: bool,
    pub active_range: bool,
    pub concentration_bonus: bool,
    pub concentration_ratio: f64,
    pub capital_efficiency: f64,
    pub lower_tick: f64,
    pub upper_tick: f64,
}

/// Depeg severity for stable pairs, bucketed at the 2% and 5% deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepegRisk {
    Low,
    Medium,
    High,
}

impl fmt::Display for DepegRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepegRisk::Low => write!(f, "Low"),
            DepegRisk::Medium => write!(f, "Medium"),
            DepegRisk::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StableMetrics {
    pub amplification: f64,
    pub price_deviation: f64,
    pub depeg_risk: DepegRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedMetrics {
    pub weight_token0: f64,
    pub weight_token1: f64,
    /// IL-magnitude difference versus the 50/50 constant-product baseline.
    /// Positive means the weighted pool loses less.
    pub il_reduction: f64,
    pub balancer_advantage: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GmxMetrics {
    pub utilization: f64,
    pub traders_pnl: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ve33Metrics {
    pub is_stable: bool,
    pub ve_boost: f64,
    /// Informational reward uplift from the vote-escrow boost.
    pub boosted_rewards: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgebraMetrics {
    pub volatility_index: f64,
    /// Adaptive fee uplift, capped at 2.5x.
    pub adaptive_fee_multiplier: f64,
}
