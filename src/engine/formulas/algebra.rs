//! Algebra-style adaptive-fee DEXes.
//!
//! IL itself is constant product; the adaptive fee engine reacts to
//! realised volatility, which is surfaced as informational metrics.

use super::constant_product;
use crate::engine::metrics::AlgebraMetrics;

/// Cap on the adaptive fee uplift.
const MAX_FEE_MULTIPLIER: f64 = 2.5;

pub fn evaluate(price_ratio: f64) -> (f64, AlgebraMetrics) {
    let multiplier = constant_product::multiplier(price_ratio);
    let volatility_index = price_ratio.ln().abs() * 10.0;
    let adaptive_fee_multiplier = (1.0 + volatility_index / 10.0).min(MAX_FEE_MULTIPLIER);

    let metrics = AlgebraMetrics {
        volatility_index,
        adaptive_fee_multiplier,
    };

    (multiplier, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_il_matches_constant_product() {
        let (multiplier, _) = evaluate(3.0);
        assert_eq!(multiplier, constant_product::multiplier(3.0));
    }

    #[test]
    fn test_volatility_index_from_log_ratio() {
        let (_, metrics) = evaluate(2.0);
        assert!((metrics.volatility_index - 2.0_f64.ln() * 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_adaptive_fee_capped() {
        // A 100x move saturates the fee multiplier
        let (_, metrics) = evaluate(100.0);
        assert_eq!(metrics.adaptive_fee_multiplier, 2.5);
    }

    #[test]
    fn test_symmetric_volatility() {
        let (_, up) = evaluate(2.0);
        let (_, down) = evaluate(0.5);
        assert!((up.volatility_index - down.volatility_index).abs() < 1e-12);
    }
}
