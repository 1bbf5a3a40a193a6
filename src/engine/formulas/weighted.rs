//! Weighted pools (Balancer style).
//!
//! Two assets in unequal value proportions; the second asset is assumed
//! non-volatile (price ratio 1), so only the first asset's weight
//! contributes divergence.

use super::constant_product;
use crate::engine::metrics::WeightedMetrics;
use crate::engine::params::ProtocolParams;

pub fn evaluate(price_ratio: f64, params: &ProtocolParams) -> (f64, WeightedMetrics) {
    let w1 = params.weight_token0;
    let w2 = params.weight_token1;

    // (w1 * r^w1 + w2 * 1^w2) / (w1 + w2)
    let multiplier = (w1 * price_ratio.powf(w1) + w2) / (w1 + w2);

    let weighted_il = (multiplier - 1.0) * 100.0;
    let baseline_il = (constant_product::multiplier(price_ratio) - 1.0) * 100.0;
    let il_reduction = baseline_il.abs() - weighted_il.abs();

    let metrics = WeightedMetrics {
        weight_token0: w1,
        weight_token1: w2,
        il_reduction,
        balancer_advantage: il_reduction > 0.0,
    };

    (multiplier, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unequal_weights_deviate_from_unity_at_parity() {
        // At r = 1 the formula gives exactly (w1 + w2) / (w1 + w2) = 1
        let params = ProtocolParams::default();
        let (multiplier, _) = evaluate(1.0, &params);
        assert!((multiplier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matches_documented_formula() {
        let params = ProtocolParams::default();
        let (multiplier, _) = evaluate(1.5, &params);
        let expected = (0.8 * 1.5_f64.powf(0.8) + 0.2) / 1.0;
        assert!((multiplier - expected).abs() < 1e-12);
    }

    #[test]
    fn test_il_reduction_is_signed_difference_of_magnitudes() {
        let params = ProtocolParams::default();
        let (_, metrics) = evaluate(0.95, &params);
        let weighted_il = ((0.8 * 0.95_f64.powf(0.8) + 0.2) - 1.0) * 100.0;
        let cp_il = (constant_product::multiplier(0.95) - 1.0) * 100.0;
        assert!((metrics.il_reduction - (cp_il.abs() - weighted_il.abs())).abs() < 1e-9);
        assert_eq!(metrics.balancer_advantage, metrics.il_reduction > 0.0);
    }
}
