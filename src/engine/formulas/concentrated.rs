//! Concentrated liquidity (Uniswap V3 style).
//!
//! The position is parameterised by a price-ratio range around the 1.0
//! entry reference. Inside the range the constant-product loss is
//! amplified by the concentration factor; outside it the position stops
//! earning and its value decays linearly from the crossed boundary.

use super::constant_product;
use crate::engine::metrics::ConcentratedMetrics;
use crate::engine::params::ProtocolParams;

/// Multiplier floor once a position has drifted far out of range.
const OUT_OF_RANGE_FLOOR: f64 = 0.3;

/// Concentration amplification cap.
const MAX_CONCENTRATION: f64 = 2.0;

pub fn evaluate(price_ratio: f64, params: &ProtocolParams) -> (f64, ConcentratedMetrics) {
    let lower = params.lower_tick;
    let upper = params.upper_tick;
    let concentration_ratio = upper / lower;
    let capital_efficiency = (4.0 / (upper - lower)).min(10.0);

    let out_of_range = price_ratio < lower || price_ratio > upper;
    let (multiplier, concentration_bonus) = if out_of_range {
        let boundary = if price_ratio < lower { lower } else { upper };
        let multiplier = (1.0 - (price_ratio - boundary).abs() * 0.5).max(OUT_OF_RANGE_FLOOR);
        (multiplier, false)
    } else {
        let concentration = concentration_ratio.sqrt().min(MAX_CONCENTRATION);
        let base = constant_product::multiplier(price_ratio);
        let multiplier = 1.0 - (1.0 - base) * concentration;
        (multiplier, concentration > 1.5)
    };

    let metrics = ConcentratedMetrics {
        in_range: !out_of_range,
        out_of_range,
        active_range: !out_of_range,
        concentration_bonus,
        concentration_ratio,
        capital_efficiency,
        lower_tick: lower,
        upper_tick: upper,
    };

    (multiplier, metrics)
}
