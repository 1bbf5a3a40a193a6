//! GLP-style index pools (GMX).
//!
//! LPs take the other side of traders' leverage, so divergence loss is
//! scaled by pool utilization and shifted by the traders' aggregate PnL:
//! positive PnL here means traders are net losing to the pool.

use super::constant_product;
use crate::engine::metrics::GmxMetrics;
use crate::engine::params::ProtocolParams;

pub fn evaluate(price_ratio: f64, params: &ProtocolParams) -> (f64, GmxMetrics) {
    let base_il = (constant_product::multiplier(price_ratio) - 1.0) * 100.0;
    let il = base_il * (1.0 + params.utilization * 0.3) + params.traders_pnl * 0.01;
    let multiplier = 1.0 + il / 100.0;

    let metrics = GmxMetrics {
        utilization: params.utilization,
        traders_pnl: params.traders_pnl,
    };

    (multiplier, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_scales_divergence() {
        let params = ProtocolParams::default();
        let (multiplier, _) = evaluate(2.0, &params);
        let base_il = (constant_product::multiplier(2.0) - 1.0) * 100.0;
        let expected = 1.0 + base_il * 1.225 / 100.0;
        assert!((multiplier - expected).abs() < 1e-12);
    }

    #[test]
    fn test_losing_traders_benefit_the_pool() {
        let losing = ProtocolParams {
            traders_pnl: 20.0,
            ..ProtocolParams::default()
        };
        let winning = ProtocolParams {
            traders_pnl: -20.0,
            ..ProtocolParams::default()
        };
        let (m_losing, _) = evaluate(1.5, &losing);
        let (m_winning, _) = evaluate(1.5, &winning);
        assert!(m_losing > m_winning);
    }
}
