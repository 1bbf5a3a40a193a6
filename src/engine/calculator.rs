// Strict and advanced calculation entry points.
//
// Both share the HODL/LP/fee assembly; they differ in failure
// signalling (error vs None), formula set, and break-even bucketing.
// The divergence is load-bearing: the HTTP endpoint and the scenario
// table each depend on their variant's numeric output.
use tracing::debug;

use super::efficiency;
use super::errors::EngineError;
use super::formulas;
use super::metrics::ProtocolMetrics;
use super::params::ProtocolParams;
use super::protocol::{Protocol, ProtocolFamily};
use super::recommendation;
use super::result::{AdvancedResult, CalculationResult};
use super::scoring;
use super::{ASSUMED_HOLDING_DAYS, LP_VALUE_FLOOR};

/// Strict entry point, used by the server endpoint.
///
/// Invalid prices fail with [`EngineError::InvalidPrices`]. The formula
/// set is constant product for every family except StableSwap, which
/// uses the simple 5%-threshold variant; break-even buckets are coarse.
pub fn calculate(
    old_price: f64,
    new_price: f64,
    initial_investment: f64,
    pool_apy: f64,
    protocol: Protocol,
) -> Result<CalculationResult, EngineError> {
    if !valid_price(old_price) || !valid_price(new_price) {
        return Err(EngineError::InvalidPrices);
    }

    let price_ratio = new_price / old_price;
    let multiplier = match protocol.family() {
        ProtocolFamily::Stable => formulas::stableswap::simple_multiplier(price_ratio),
        _ => formulas::constant_product::multiplier(price_ratio),
    };
    if !multiplier.is_finite() {
        return Err(EngineError::NonFiniteResult {
            field: "multiplier",
        });
    }

    Ok(assemble(
        old_price,
        new_price,
        initial_investment,
        pool_apy,
        multiplier,
        protocol,
        BreakEvenGranularity::Coarse,
    ))
}

/// Advanced entry point, used in-process by the presentation layer.
///
/// Invalid prices return `None` so batch scenario computation skips
/// rows silently. Full protocol dispatch, fine break-even buckets.
pub fn calculate_advanced(
    old_price: f64,
    new_price: f64,
    initial_investment: f64,
    pool_apy: f64,
    protocol: Protocol,
    params: &ProtocolParams,
) -> Option<AdvancedResult> {
    if !valid_price(old_price) || !valid_price(new_price) {
        return None;
    }

    let price_ratio = new_price / old_price;
    let (multiplier, protocol_metrics) = dispatch(price_ratio, protocol, params);
    if !multiplier.is_finite() {
        return None;
    }

    let base = assemble(
        old_price,
        new_price,
        initial_investment,
        pool_apy,
        multiplier,
        protocol,
        BreakEvenGranularity::Fine,
    );

    let risk_score = scoring::score(base.impermanent_loss_percent, pool_apy, &protocol_metrics);
    let efficiency_score = efficiency::rate(protocol, &protocol_metrics);
    let recommendation = recommendation::recommend(
        base.impermanent_loss_percent,
        pool_apy,
        &protocol_metrics,
        risk_score,
    );

    debug!(
        protocol = %protocol,
        price_ratio = %base.price_ratio,
        il_percent = %base.impermanent_loss_percent,
        risk_score = risk_score,
        "Completed advanced IL calculation"
    );

    Some(AdvancedResult {
        base,
        protocol_metrics,
        risk_score,
        efficiency_score,
        complexity: protocol.complexity(),
        recommendation,
    })
}

/// Routes a price ratio through the protocol's formula family.
fn dispatch(
    price_ratio: f64,
    protocol: Protocol,
    params: &ProtocolParams,
) -> (f64, ProtocolMetrics) {
    match protocol.family() {
        ProtocolFamily::ConstantProduct => (
            formulas::constant_product::multiplier(price_ratio),
            ProtocolMetrics::ConstantProduct,
        ),
        ProtocolFamily::Concentrated => {
            let (multiplier, metrics) = formulas::concentrated::evaluate(price_ratio, params);
            (multiplier, ProtocolMetrics::Concentrated(metrics))
        }
        ProtocolFamily::Stable => {
            let (multiplier, metrics) = formulas::stableswap::evaluate(price_ratio, params);
            (multiplier, ProtocolMetrics::Stable(metrics))
        }
        ProtocolFamily::Weighted => {
            let (multiplier, metrics) = formulas::weighted::evaluate(price_ratio, params);
            (multiplier, ProtocolMetrics::Weighted(metrics))
        }
        ProtocolFamily::Gmx => {
            let (multiplier, metrics) = formulas::gmx::evaluate(price_ratio, params);
            (multiplier, ProtocolMetrics::Gmx(metrics))
        }
        ProtocolFamily::Ve33 => {
            let (multiplier, metrics) = formulas::ve33::evaluate(price_ratio, params);
            (multiplier, ProtocolMetrics::Ve33(metrics))
        }
        ProtocolFamily::Algebra => {
            let (multiplier, metrics) = formulas::algebra::evaluate(price_ratio);
            (multiplier, ProtocolMetrics::Algebra(metrics))
        }
    }
}

/// Break-even label granularity. The strict model reports coarse
/// buckets, the advanced model adds the weeks tier.
#[derive(Debug, Clone, Copy)]
enum BreakEvenGranularity {
    Coarse,
    Fine,
}

fn valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn assemble(
    old_price: f64,
    new_price: f64,
    initial_investment: f64,
    pool_apy: f64,
    multiplier: f64,
    protocol: Protocol,
    granularity: BreakEvenGranularity,
) -> CalculationResult {
    let price_ratio = new_price / old_price;
    let il_percent = (multiplier - 1.0) * 100.0;

    let investment_per_asset = initial_investment / 2.0;
    let hodl_value = investment_per_asset / old_price * new_price + investment_per_asset;
    let lp_value = initial_investment * multiplier.max(LP_VALUE_FLOOR);
    let impermanent_loss_usd = lp_value - hodl_value;

    let daily_apy = pool_apy / 365.0 / 100.0;
    let fees_per_day = initial_investment * daily_apy;
    let total_fees_earned = fees_per_day * ASSUMED_HOLDING_DAYS;
    let lp_value_with_fees = lp_value + total_fees_earned;

    let (break_even_days, break_even) =
        break_even(impermanent_loss_usd, fees_per_day, granularity);

    // Ties favour LP: HODL wins only on strict inequality.
    let lp_comparable = if pool_apy > 0.0 {
        lp_value_with_fees
    } else {
        lp_value
    };
    let better_strategy = if hodl_value > lp_comparable { "HODL" } else { "LP" };

    let hodl_profit = hodl_value - initial_investment;
    let lp_profit = lp_value_with_fees - initial_investment;

    CalculationResult {
        protocol: protocol.display_name().to_string(),
        initial_investment: round2(initial_investment),
        price_ratio: round4(price_ratio),
        multiplier: round4(multiplier),
        hodl_value: round2(hodl_value),
        lp_value: round2(lp_value),
        lp_value_with_fees: round2(lp_value_with_fees),
        hodl_profit: round2(hodl_profit),
        hodl_profit_percent: round2(hodl_profit / initial_investment * 100.0),
        lp_profit: round2(lp_profit),
        lp_profit_percent: round2(lp_profit / initial_investment * 100.0),
        impermanent_loss_usd: round2(impermanent_loss_usd),
        impermanent_loss_percent: round4(il_percent),
        fees_per_day: round2(fees_per_day),
        fees_per_week: round2(fees_per_day * 7.0),
        fees_per_month: round2(fees_per_day * 30.0),
        fees_per_year: round2(fees_per_day * 365.0),
        total_fees_earned: round2(total_fees_earned),
        break_even_days,
        break_even,
        better_strategy: better_strategy.to_string(),
    }
}

fn break_even(
    impermanent_loss_usd: f64,
    fees_per_day: f64,
    granularity: BreakEvenGranularity,
) -> (Option<u32>, String) {
    if impermanent_loss_usd >= 0.0 {
        return (None, "No impermanent loss to compensate".to_string());
    }
    if fees_per_day <= 0.0 {
        return (None, "Never (no fee income)".to_string());
    }

    let days = (impermanent_loss_usd.abs() / fees_per_day).ceil() as u32;
    let label = match granularity {
        BreakEvenGranularity::Fine => {
            if days <= 30 {
                plural(days, "day")
            } else if days <= 90 {
                plural((days + 6) / 7, "week")
            } else if days <= 365 {
                plural((days + 29) / 30, "month")
            } else {
                plural((days + 364) / 365, "year")
            }
        }
        BreakEvenGranularity::Coarse => {
            if days <= 30 {
                plural(days, "day")
            } else if days <= 365 {
                plural((days + 29) / 30, "month")
            } else {
                plural((days + 364) / 365, "year")
            }
        }
    };

    (Some(days), label)
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
