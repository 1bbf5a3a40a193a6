// Per-call protocol tunables. Defaults live here, not in module state,
// so the engine stays side-effect-free under concurrent callers.
use serde::{Deserialize, Serialize};

/// Protocol-specific tunables supplied per calculation.
///
/// All fields default to the values the UI pre-fills; the HTTP layer
/// deserializes partial overrides on top of [`Default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProtocolParams {
    /// Lower bound of a concentrated-liquidity range, as a price ratio
    /// relative to the 1.0 entry reference.
    pub lower_tick: f64,
    /// Upper bound of a concentrated-liquidity range.
    pub upper_tick: f64,
    /// StableSwap amplification coefficient.
    pub amplification: f64,
    /// First (volatile) asset weight in a weighted pool.
    pub weight_token0: f64,
    /// Second asset weight; the second asset is assumed non-volatile.
    pub weight_token1: f64,
    /// GLP-style pool utilization, as a fraction of 1.
    pub utilization: f64,
    /// Aggregate traders' PnL against the pool, in percent of pool value.
    /// Positive means traders are net losing, which benefits the pool.
    pub traders_pnl: f64,
    /// Whether a ve(3,3) pair uses the stable curve.
    pub is_stable: bool,
    /// ve(3,3) vote-escrow reward boost factor.
    pub ve_boost: f64,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        ProtocolParams {
            lower_tick: 0.8,
            upper_tick: 1.25,
            amplification: 2000.0,
            weight_token0: 0.8,
            weight_token1: 0.2,
            utilization: 0.75,
            traders_pnl: 0.0,
            is_stable: false,
            ve_boost: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ProtocolParams::default();
        assert_eq!(params.lower_tick, 0.8);
        assert_eq!(params.upper_tick, 1.25);
        assert_eq!(params.amplification, 2000.0);
        assert_eq!(params.weight_token0, 0.8);
        assert!(!params.is_stable);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let params: ProtocolParams =
            serde_json::from_str(r#"{"lowerTick": 0.9, "veBoost": 2.5}"#).unwrap();
        assert_eq!(params.lower_tick, 0.9);
        assert_eq!(params.ve_boost, 2.5);
        assert_eq!(params.upper_tick, 1.25);
        assert_eq!(params.amplification, 2000.0);
    }
}
