// Capital-efficiency rating: a per-family base adjusted by the
// position's auxiliary metrics, clamped to [0, 100].
use super::metrics::{DepegRisk, ProtocolMetrics};
use super::protocol::{Protocol, ProtocolFamily};

/// Base efficiency of a protocol family before position adjustments.
pub fn family_base(protocol: Protocol) -> u8 {
    match protocol.family() {
        ProtocolFamily::ConstantProduct | ProtocolFamily::Algebra => 50,
        ProtocolFamily::Concentrated => 75,
        ProtocolFamily::Stable => 85,
        ProtocolFamily::Weighted => 70,
        ProtocolFamily::Gmx => 60,
        ProtocolFamily::Ve33 => 65,
    }
}

/// Rates how efficiently a protocol family deploys LP capital.
pub fn rate(protocol: Protocol, metrics: &ProtocolMetrics) -> u8 {
    let base = i32::from(family_base(protocol));

    let adjustment: i32 = match metrics {
        ProtocolMetrics::Concentrated(m) => {
            let mut adj = (m.capital_efficiency * 2.0).min(20.0) as i32;
            if m.out_of_range {
                adj -= 30;
            }
            adj
        }
        ProtocolMetrics::Stable(m) => match m.depeg_risk {
            DepegRisk::Low => 0,
            DepegRisk::Medium => -15,
            DepegRisk::High => -40,
        },
        ProtocolMetrics::Weighted(m) if m.balancer_advantage => 15,
        ProtocolMetrics::Gmx(m) if m.traders_pnl > 0.0 => 20,
        ProtocolMetrics::Ve33(m) => {
            let mut adj = 0;
            if m.is_stable {
                adj += 10;
            }
            if m.ve_boost > 1.5 {
                adj += 10;
            }
            adj
        }
        _ => 0,
    };

    (base + adjustment).clamp(0, 100) as u8
}
