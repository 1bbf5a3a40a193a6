// Additive risk scoring over IL severity, yield plausibility and
// protocol-specific state. Deterministic: same inputs, same score.
use super::metrics::{DepegRisk, ProtocolMetrics};
use super::{MAX_RISK_SCORE, MIN_RISK_SCORE};

/// Scores a position's risk on a 1..=10 scale.
pub fn score(il_percent: f64, pool_apy: f64, metrics: &ProtocolMetrics) -> u8 {
    let il = il_percent.abs();

    let il_points: i32 = if il < 1.0 {
        1
    } else if il < 5.0 {
        3
    } else if il < 15.0 {
        5
    } else if il < 30.0 {
        7
    } else {
        9
    };

    // Implausibly high yield is suspicious; so is yield too thin to
    // ever compensate divergence.
    let apy_points: i32 = if pool_apy > 200.0 {
        6
    } else if pool_apy > 100.0 {
        4
    } else if pool_apy > 50.0 {
        2
    } else if pool_apy < 5.0 {
        1
    } else {
        0
    };

    let protocol_points: i32 = match metrics {
        ProtocolMetrics::Concentrated(m) => {
            let mut points = 0;
            if m.out_of_range {
                points += 4;
            }
            if m.concentration_ratio > 3.0 {
                points += 2;
            }
            points
        }
        ProtocolMetrics::Stable(m) => match m.depeg_risk {
            DepegRisk::High => 5,
            DepegRisk::Medium => 2,
            DepegRisk::Low => 0,
        },
        ProtocolMetrics::Gmx(m) => {
            let mut points = 0;
            if m.utilization > 0.9 {
                points += 3;
            }
            if m.traders_pnl < -10.0 {
                points += 2;
            }
            points
        }
        ProtocolMetrics::Weighted(_) => -1,
        ProtocolMetrics::ConstantProduct
        | ProtocolMetrics::Ve33(_)
        | ProtocolMetrics::Algebra(_) => 0,
    };

    let total = (il_points + apy_points + protocol_points).max(0);
    total.clamp(i32::from(MIN_RISK_SCORE), i32::from(MAX_RISK_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::metrics::{ConcentratedMetrics, GmxMetrics, StableMetrics, WeightedMetrics};

    fn concentrated(out_of_range: bool, concentration_ratio: f64) -> ProtocolMetrics {
        ProtocolMetrics::Concentrated(ConcentratedMetrics {
            in_range: !out_of_range,
            out_of_range,
            active_range: !out_of_range,
            concentration_bonus: false,
            concentration_ratio,
            capital_efficiency: 5.0,
            lower_tick: 0.8,
            upper_tick: 1.25,
        })
    }

    #[test]
    fn test_quiet_position_scores_low() {
        // |IL| < 1 (+1) and moderate APY (+0)
        assert_eq!(score(0.5, 20.0, &ProtocolMetrics::ConstantProduct), 1);
    }

    #[test]
    fn test_extreme_inputs_clamp_to_ten() {
        let metrics = ProtocolMetrics::Stable(StableMetrics {
            amplification: 2000.0,
            price_deviation: 0.5,
            depeg_risk: DepegRisk::High,
        });
        assert_eq!(score(-95.0, 500.0, &metrics), 10);
    }

    #[test]
    fn test_weighted_discount_floors_at_minimum() {
        let metrics = ProtocolMetrics::Weighted(WeightedMetrics {
            weight_token0: 0.8,
            weight_token1: 0.2,
            il_reduction: 1.0,
            balancer_advantage: true,
        });
        // +1 IL, +0 APY, -1 weighted = 0, floored then clamped to 1
        assert_eq!(score(0.1, 20.0, &metrics), 1);
    }

    #[test]
    fn test_out_of_range_adds_four() {
        let in_range = score(-3.0, 20.0, &concentrated(false, 1.5));
        let out = score(-3.0, 20.0, &concentrated(true, 1.5));
        assert_eq!(out - in_range, 4);
    }

    #[test]
    fn test_too_low_yield_is_penalized() {
        let thin = score(-3.0, 2.0, &ProtocolMetrics::ConstantProduct);
        let healthy = score(-3.0, 20.0, &ProtocolMetrics::ConstantProduct);
        assert_eq!(thin - healthy, 1);
    }

    #[test]
    fn test_gmx_adjustments() {
        let calm = ProtocolMetrics::Gmx(GmxMetrics {
            utilization: 0.75,
            traders_pnl: 0.0,
        });
        let stressed = ProtocolMetrics::Gmx(GmxMetrics {
            utilization: 0.95,
            traders_pnl: -15.0,
        });
        assert_eq!(score(-3.0, 20.0, &stressed) - score(-3.0, 20.0, &calm), 5);
    }
}
