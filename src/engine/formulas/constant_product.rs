//! Classic `x * y = k` divergence loss.
//!
//! `multiplier = 2 * sqrt(r) / (1 + r)` where `r` is the price ratio.
//! The multiplier is at most 1, with equality only at `r = 1`, and is
//! symmetric under price inversion: `m(r) = m(1/r)`.

/// LP value multiplier for a 50/50 constant-product pool.
pub fn multiplier(price_ratio: f64) -> f64 {
    2.0 * price_ratio.sqrt() / (1.0 + price_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_price_move_means_no_loss() {
        assert!((multiplier(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_price_doubling() {
        // 2 * sqrt(2) / 3 = 0.9428..., the canonical -5.72% IL
        let m = multiplier(2.0);
        assert!((m - 0.942809).abs() < 1e-5);
    }

    #[test]
    fn test_symmetric_under_inversion() {
        for r in [0.1_f64, 0.5, 2.0, 4.0, 10.0] {
            assert!((multiplier(r) - multiplier(1.0 / r)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_never_exceeds_one() {
        for r in [0.01_f64, 0.3, 0.99, 1.01, 3.0, 100.0] {
            assert!(multiplier(r) <= 1.0);
        }
    }
}
