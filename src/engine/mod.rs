// Multi-protocol impermanent loss engine.
// Pure, synchronous calculations: protocol formula dispatch, risk
// scoring, guidance and efficiency rating.

pub mod calculator;
pub mod efficiency;
pub mod errors;
pub mod formulas;
pub mod metrics;
pub mod params;
pub mod protocol;
pub mod recommendation;
pub mod result;
pub mod scenario;
pub mod scoring;

// Re-export main types
pub use calculator::{calculate, calculate_advanced};
pub use errors::EngineError;
pub use metrics::{DepegRisk, ProtocolMetrics};
pub use params::ProtocolParams;
pub use protocol::{Complexity, Protocol, ProtocolFamily};
pub use result::{AdvancedResult, CalculationResult};
pub use scenario::{scenario_table, ScenarioRow};

/// Fixed holding period assumed for total fee projections.
pub const ASSUMED_HOLDING_DAYS: f64 = 30.0;

/// LP value never drops below this fraction of the investment.
pub const LP_VALUE_FLOOR: f64 = 0.01;

/// Risk score bounds.
pub const MIN_RISK_SCORE: u8 = 1;
pub const MAX_RISK_SCORE: u8 = 10;
