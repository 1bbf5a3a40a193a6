//! Ve(3,3) DEXes (Solidly, Velodrome).
//!
//! Pairs declare themselves stable or volatile at creation. Stable pairs
//! follow a flattened curve; volatile pairs are plain constant product.
//! The vote-escrow boost does not change IL, only the reward stream.

use super::constant_product;
use crate::engine::metrics::Ve33Metrics;
use crate::engine::params::ProtocolParams;

pub fn evaluate(price_ratio: f64, params: &ProtocolParams) -> (f64, Ve33Metrics) {
    let multiplier = if params.is_stable {
        // Flatter than the constant-product ~d^2/8 loss near the peg
        let deviation = (price_ratio - 1.0).abs();
        (1.0 - deviation.powi(2) / 20.0).max(0.3)
    } else {
        constant_product::multiplier(price_ratio)
    };

    let metrics = Ve33Metrics {
        is_stable: params.is_stable,
        ve_boost: params.ve_boost,
        boosted_rewards: params.ve_boost * 0.2,
    };

    (multiplier, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volatile_pair_is_constant_product() {
        let params = ProtocolParams::default();
        let (multiplier, metrics) = evaluate(2.0, &params);
        assert_eq!(multiplier, constant_product::multiplier(2.0));
        assert!(!metrics.is_stable);
    }

    #[test]
    fn test_stable_pair_decays_with_squared_deviation() {
        let params = ProtocolParams {
            is_stable: true,
            ..ProtocolParams::default()
        };
        let (multiplier, _) = evaluate(1.1, &params);
        assert!((multiplier - (1.0 - 0.01 / 20.0)).abs() < 1e-12);

        // Loses less than the constant-product curve on the same move
        assert!(multiplier > constant_product::multiplier(1.1));
    }

    #[test]
    fn test_boosted_rewards_scale_with_ve_boost() {
        let params = ProtocolParams {
            ve_boost: 2.5,
            ..ProtocolParams::default()
        };
        let (_, metrics) = evaluate(1.0, &params);
        assert!((metrics.boosted_rewards - 0.5).abs() < 1e-12);
    }
}
