// Protocol identifiers and their static, read-only attributes
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of supported AMM protocol variants.
///
/// Wire identifiers are kebab-case (`uniswap-v2`, `curve-stable`, ...).
/// Unknown identifiers fall back to [`Protocol::UniswapV2`]: the protocol
/// set grows over time and an unrecognised type should degrade to the
/// classic constant-product model rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    UniswapV2,
    UniswapV3,
    PancakeswapV2,
    PancakeswapV3,
    Sushiswap,
    Curve,
    CurveStable,
    BalancerWeighted,
    Gmx,
    Solidly,
    Velodrome,
    Algebra,
}

/// Formula family a protocol dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFamily {
    ConstantProduct,
    Concentrated,
    Stable,
    Weighted,
    Gmx,
    Ve33,
    Algebra,
}

/// Qualitative complexity label for a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Advanced,
    Expert,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "Simple"),
            Complexity::Moderate => write!(f, "Moderate"),
            Complexity::Advanced => write!(f, "Advanced"),
            Complexity::Expert => write!(f, "Expert"),
        }
    }
}

impl Protocol {
    /// Every supported protocol, in wire order.
    pub const ALL: [Protocol; 12] = [
        Protocol::UniswapV2,
        Protocol::UniswapV3,
        Protocol::PancakeswapV2,
        Protocol::PancakeswapV3,
        Protocol::Sushiswap,
        Protocol::Curve,
        Protocol::CurveStable,
        Protocol::BalancerWeighted,
        Protocol::Gmx,
        Protocol::Solidly,
        Protocol::Velodrome,
        Protocol::Algebra,
    ];

    /// Parses a wire identifier, falling back to the constant-product
    /// default for unknown values.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "uniswap-v2" => Protocol::UniswapV2,
            "uniswap-v3" => Protocol::UniswapV3,
            "pancakeswap-v2" => Protocol::PancakeswapV2,
            "pancakeswap-v3" => Protocol::PancakeswapV3,
            "sushiswap" => Protocol::Sushiswap,
            "curve" => Protocol::Curve,
            "curve-stable" => Protocol::CurveStable,
            "balancer-weighted" => Protocol::BalancerWeighted,
            "gmx" => Protocol::Gmx,
            "solidly" => Protocol::Solidly,
            "velodrome" => Protocol::Velodrome,
            "algebra" => Protocol::Algebra,
            _ => Protocol::UniswapV2,
        }
    }

    /// Wire identifier for this protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::UniswapV2 => "uniswap-v2",
            Protocol::UniswapV3 => "uniswap-v3",
            Protocol::PancakeswapV2 => "pancakeswap-v2",
            Protocol::PancakeswapV3 => "pancakeswap-v3",
            Protocol::Sushiswap => "sushiswap",
            Protocol::Curve => "curve",
            Protocol::CurveStable => "curve-stable",
            Protocol::BalancerWeighted => "balancer-weighted",
            Protocol::Gmx => "gmx",
            Protocol::Solidly => "solidly",
            Protocol::Velodrome => "velodrome",
            Protocol::Algebra => "algebra",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Protocol::UniswapV2 => "Uniswap V2",
            Protocol::UniswapV3 => "Uniswap V3",
            Protocol::PancakeswapV2 => "PancakeSwap V2",
            Protocol::PancakeswapV3 => "PancakeSwap V3",
            Protocol::Sushiswap => "SushiSwap",
            Protocol::Curve => "Curve Finance",
            Protocol::CurveStable => "Curve Stable Pool",
            Protocol::BalancerWeighted => "Balancer Weighted Pool",
            Protocol::Gmx => "GMX",
            Protocol::Solidly => "Solidly",
            Protocol::Velodrome => "Velodrome",
            Protocol::Algebra => "Algebra",
        }
    }

    /// Formula family this protocol dispatches to.
    pub fn family(&self) -> ProtocolFamily {
        match self {
            Protocol::UniswapV2 | Protocol::PancakeswapV2 | Protocol::Sushiswap => {
                ProtocolFamily::ConstantProduct
            }
            Protocol::UniswapV3 | Protocol::PancakeswapV3 => ProtocolFamily::Concentrated,
            Protocol::Curve | Protocol::CurveStable => ProtocolFamily::Stable,
            Protocol::BalancerWeighted => ProtocolFamily::Weighted,
            Protocol::Gmx => ProtocolFamily::Gmx,
            Protocol::Solidly | Protocol::Velodrome => ProtocolFamily::Ve33,
            Protocol::Algebra => ProtocolFamily::Algebra,
        }
    }

    /// Static complexity lookup.
    pub fn complexity(&self) -> Complexity {
        match self.family() {
            ProtocolFamily::ConstantProduct => Complexity::Simple,
            ProtocolFamily::Stable | ProtocolFamily::Weighted => Complexity::Moderate,
            ProtocolFamily::Concentrated | ProtocolFamily::Gmx | ProtocolFamily::Ve33 => {
                Complexity::Advanced
            }
            ProtocolFamily::Algebra => Complexity::Expert,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifiers() {
        assert_eq!(Protocol::parse("uniswap-v3"), Protocol::UniswapV3);
        assert_eq!(Protocol::parse("curve-stable"), Protocol::CurveStable);
        assert_eq!(Protocol::parse("CURVE"), Protocol::Curve);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_constant_product() {
        assert_eq!(Protocol::parse("trader-joe"), Protocol::UniswapV2);
        assert_eq!(Protocol::parse(""), Protocol::UniswapV2);
    }

    #[test]
    fn test_wire_identifiers_round_trip() {
        for protocol in Protocol::ALL {
            assert_eq!(Protocol::parse(protocol.as_str()), protocol);
        }
    }

    #[test]
    fn test_complexity_lookup() {
        assert_eq!(Protocol::UniswapV2.complexity(), Complexity::Simple);
        assert_eq!(Protocol::Curve.complexity(), Complexity::Moderate);
        assert_eq!(Protocol::UniswapV3.complexity(), Complexity::Advanced);
        assert_eq!(Protocol::Algebra.complexity(), Complexity::Expert);
    }
}
