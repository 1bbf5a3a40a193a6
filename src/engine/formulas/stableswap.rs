//! StableSwap (Curve style) loss curves.
//!
//! The amplification coefficient flattens the curve near the peg, so IL
//! stays negligible for small deviations and only approaches the
//! constant-product figure once the pair visibly depegs.
//!
//! Two variants are deliberately kept side by side:
//! - [`evaluate`]: three deviation regimes, used by the advanced model;
//! - [`simple_multiplier`]: a single 5% threshold with a flat 70% IL
//!   reduction, used by the strict model.
//! The two call sites depend on their specific numeric outputs, so the
//! variants must not be unified.

use super::constant_product;
use crate::engine::metrics::{DepegRisk, StableMetrics};
use crate::engine::params::ProtocolParams;

/// Advanced three-regime stable curve.
pub fn evaluate(price_ratio: f64, params: &ProtocolParams) -> (f64, StableMetrics) {
    let deviation = (price_ratio - 1.0).abs();

    let multiplier = if deviation < 0.005 {
        // Near peg: IL percent is -deviation * 0.1
        1.0 - deviation * 0.001
    } else if deviation < 0.02 {
        (1.0 - deviation.powi(2) / (8.0 * params.amplification / 10_000.0)).max(0.7)
    } else {
        (1.0 - deviation.powf(1.5) / 2.0).max(0.3)
    };

    let depeg_risk = if deviation < 0.02 {
        DepegRisk::Low
    } else if deviation < 0.05 {
        DepegRisk::Medium
    } else {
        DepegRisk::High
    };

    let metrics = StableMetrics {
        amplification: params.amplification,
        price_deviation: deviation,
        depeg_risk,
    };

    (multiplier, metrics)
}

/// Strict-model stable curve: below 5% deviation only 30% of the
/// constant-product loss is kept; beyond it the pair is treated as
/// effectively depegged and the constant-product figure applies.
pub fn simple_multiplier(price_ratio: f64) -> f64 {
    let base = constant_product::multiplier(price_ratio);
    let deviation = (price_ratio - 1.0).abs();
    if deviation < 0.05 {
        1.0 - (1.0 - base) * 0.3
    } else {
        base
    }
}
