// Batch scenario computation over the advanced model. Invalid rows are
// skipped silently via the advanced entry point's `None` path, so a
// table with a few bad hypothetical prices still renders.
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calculator::{calculate_advanced, round2};
use super::params::ProtocolParams;
use super::protocol::Protocol;
use super::result::AdvancedResult;

/// One row of a what-if scenario table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRow {
    pub new_price: f64,
    pub price_change_percent: f64,
    #[serde(flatten)]
    pub result: AdvancedResult,
}

/// Computes the advanced model once per hypothetical price.
pub fn scenario_table(
    old_price: f64,
    new_prices: &[f64],
    initial_investment: f64,
    pool_apy: f64,
    protocol: Protocol,
    params: &ProtocolParams,
) -> Vec<ScenarioRow> {
    let rows: Vec<ScenarioRow> = new_prices
        .iter()
        .filter_map(|&new_price| {
            calculate_advanced(
                old_price,
                new_price,
                initial_investment,
                pool_apy,
                protocol,
                params,
            )
            .map(|result| ScenarioRow {
                new_price,
                price_change_percent: round2((new_price / old_price - 1.0) * 100.0),
                result,
            })
        })
        .collect();

    debug!(
        protocol = %protocol,
        requested = new_prices.len(),
        computed = rows.len(),
        "Built scenario table"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rows_are_skipped_silently() {
        let params = ProtocolParams::default();
        let rows = scenario_table(
            100.0,
            &[50.0, 0.0, 150.0, -10.0, f64::NAN, 200.0],
            2000.0,
            20.0,
            Protocol::UniswapV2,
            &params,
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].new_price, 50.0);
        assert_eq!(rows[1].new_price, 150.0);
        assert_eq!(rows[2].new_price, 200.0);
    }

    #[test]
    fn test_price_change_percent() {
        let params = ProtocolParams::default();
        let rows = scenario_table(100.0, &[150.0], 2000.0, 0.0, Protocol::UniswapV2, &params);
        assert_eq!(rows[0].price_change_percent, 50.0);
    }

    #[test]
    fn test_invalid_base_price_yields_empty_table() {
        let params = ProtocolParams::default();
        let rows = scenario_table(0.0, &[100.0, 200.0], 2000.0, 0.0, Protocol::Curve, &params);
        assert!(rows.is_empty());
    }
}
