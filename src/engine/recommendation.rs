// Rule-ordered guidance strings. Protocol-specific rules are evaluated
// before the generic threshold cascade; the first matching rule wins.
use super::metrics::{DepegRisk, ProtocolMetrics};

/// Picks one guidance string for the position.
pub fn recommend(
    il_percent: f64,
    pool_apy: f64,
    metrics: &ProtocolMetrics,
    risk_score: u8,
) -> String {
    if let Some(text) = protocol_rule(metrics) {
        return text;
    }
    generic_rule(il_percent, pool_apy, risk_score)
}

fn protocol_rule(metrics: &ProtocolMetrics) -> Option<String> {
    match metrics {
        ProtocolMetrics::Concentrated(m) => {
            if m.out_of_range {
                Some(
                    "🚨 Out of range: your liquidity is idle and earning nothing. \
                     Rebalance the range around the current price to resume earning fees."
                        .to_string(),
                )
            } else if m.concentration_ratio > 5.0 {
                Some(
                    "⚠️ Very narrow range: high fee share while in range, but expect \
                     frequent rebalancing as the price moves."
                        .to_string(),
                )
            } else if m.concentration_bonus {
                Some(
                    "✅ Well-tuned range: concentrated liquidity is amplifying your \
                     fee share without excessive rebalancing risk."
                        .to_string(),
                )
            } else {
                None
            }
        }
        ProtocolMetrics::Stable(m) => Some(match m.depeg_risk {
            DepegRisk::High => "🚨 Depeg alert: price deviation exceeds 5%. Consider \
                                exiting until the peg recovers."
                .to_string(),
            DepegRisk::Medium => "⚠️ Peg under pressure: deviation is above 2%. Watch \
                                  the pool closely before adding liquidity."
                .to_string(),
            DepegRisk::Low => "✅ Stable pair: impermanent loss stays minimal while \
                               both assets hold their peg."
                .to_string(),
        }),
        ProtocolMetrics::Gmx(m) => {
            if m.traders_pnl > 5.0 {
                Some(
                    "✅ Traders are net losing: their losses accrue to the liquidity \
                     pool on top of fee income."
                        .to_string(),
                )
            } else if m.traders_pnl < -5.0 {
                Some(
                    "⚠️ Traders are winning against the pool: LP returns are being \
                     drained beyond the usual divergence."
                        .to_string(),
                )
            } else {
                None
            }
        }
        ProtocolMetrics::Weighted(m) if m.balancer_advantage => Some(format!(
            "✅ Weighted advantage: the {:.0}/{:.0} split reduces impermanent loss \
             by {:.2}% versus a 50/50 pool.",
            m.weight_token0 * 100.0,
            m.weight_token1 * 100.0,
            m.il_reduction
        )),
        _ => None,
    }
}

fn generic_rule(il_percent: f64, pool_apy: f64, risk_score: u8) -> String {
    let il = il_percent.abs();

    if risk_score <= 3 && il < 2.0 && pool_apy > 15.0 {
        "✅ Excellent position: low risk, negligible impermanent loss and a \
         healthy yield."
            .to_string()
    } else if risk_score <= 5 && il / (pool_apy / 12.0) < 3.0 {
        "👍 Good position: fee income outpaces impermanent loss at the current \
         pace."
            .to_string()
    } else if risk_score >= 8 || il > 25.0 {
        "🚨 High risk: impermanent loss can dominate returns at these levels. \
         Size the position accordingly."
            .to_string()
    } else if pool_apy < 5.0 && il > 5.0 {
        "⚠️ Poor risk/reward: the yield is too low to compensate for the \
         divergence loss."
            .to_string()
    } else if pool_apy > 100.0 {
        "⚠️ Unsustainable yield: triple-digit APYs rarely last. Harvest \
         rewards frequently."
            .to_string()
    } else {
        "ℹ️ Moderate risk: monitor the position and compare against simply \
         holding the assets."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::metrics::{ConcentratedMetrics, GmxMetrics, StableMetrics, WeightedMetrics};

    #[test]
    fn test_out_of_range_takes_priority() {
        let metrics = ProtocolMetrics::Concentrated(ConcentratedMetrics {
            in_range: false,
            out_of_range: true,
            active_range: false,
            concentration_bonus: true,
            concentration_ratio: 10.0,
            capital_efficiency: 10.0,
            lower_tick: 0.95,
            upper_tick: 1.05,
        });
        let text = recommend(-1.0, 50.0, &metrics, 5);
        assert!(text.contains("Out of range"));
    }

    #[test]
    fn test_stable_always_gets_a_protocol_message() {
        let metrics = ProtocolMetrics::Stable(StableMetrics {
            amplification: 2000.0,
            price_deviation: 0.001,
            depeg_risk: DepegRisk::Low,
        });
        let text = recommend(-0.001, 10.0, &metrics, 2);
        assert!(text.contains("Stable pair"));
    }

    #[test]
    fn test_weighted_message_quantifies_the_advantage() {
        let metrics = ProtocolMetrics::Weighted(WeightedMetrics {
            weight_token0: 0.8,
            weight_token1: 0.2,
            il_reduction: 1.25,
            balancer_advantage: true,
        });
        let text = recommend(-2.0, 20.0, &metrics, 3);
        assert!(text.contains("80/20"));
        assert!(text.contains("1.25%"));
    }

    #[test]
    fn test_gmx_neutral_falls_through_to_generic() {
        let metrics = ProtocolMetrics::Gmx(GmxMetrics {
            utilization: 0.75,
            traders_pnl: 0.0,
        });
        let text = recommend(-1.0, 20.0, &metrics, 2);
        assert!(text.contains("Excellent"));
    }

    #[test]
    fn test_generic_cascade_order() {
        let cp = ProtocolMetrics::ConstantProduct;
        assert!(recommend(-1.0, 20.0, &cp, 2).contains("Excellent"));
        assert!(recommend(-3.0, 40.0, &cp, 5).contains("Good position"));
        assert!(recommend(-30.0, 20.0, &cp, 9).contains("High risk"));
        assert!(recommend(-6.0, 2.0, &cp, 7).contains("Poor risk/reward"));
        assert!(recommend(-10.0, 150.0, &cp, 7).contains("Unsustainable"));
        assert!(recommend(-10.0, 40.0, &cp, 6).contains("Moderate risk"));
    }
}
