//! P&L Bound Value Object

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Maximum profit or maximum loss of a position.
///
/// Max profit is either `Finite` or `PositiveInfinity`; max loss is either
/// `Finite` or `NegativeInfinity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PnlBound {
    /// The bound is attained at some price.
    Finite(Decimal),
    /// Profit grows without limit.
    PositiveInfinity,
    /// Loss grows without limit.
    NegativeInfinity,
}

impl PnlBound {
    /// Get the finite value, if bounded.
    #[must_use]
    pub const fn finite_value(&self) -> Option<Decimal> {
        match self {
            Self::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// Check if the bound is infinite.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        !matches!(self, Self::Finite(_))
    }

    /// Convert to `f64`, mapping the infinities to IEEE infinities.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Finite(value) => value.to_f64().unwrap_or(f64::NAN),
            Self::PositiveInfinity => f64::INFINITY,
            Self::NegativeInfinity => f64::NEG_INFINITY,
        }
    }
}

impl std::fmt::Display for PnlBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::PositiveInfinity => write!(f, "+inf"),
            Self::NegativeInfinity => write!(f, "-inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn finite_bound() {
        let bound = PnlBound::Finite(dec!(-1300));
        assert_eq!(bound.finite_value(), Some(dec!(-1300)));
        assert!(!bound.is_unbounded());
        assert_eq!(bound.to_f64(), -1300.0);
        assert_eq!(bound.to_string(), "-1300");
    }

    #[test]
    fn infinite_bounds() {
        assert_eq!(PnlBound::PositiveInfinity.to_f64(), f64::INFINITY);
        assert_eq!(PnlBound::NegativeInfinity.to_f64(), f64::NEG_INFINITY);
        assert!(PnlBound::PositiveInfinity.is_unbounded());
        assert_eq!(PnlBound::NegativeInfinity.finite_value(), None);
        assert_eq!(PnlBound::PositiveInfinity.to_string(), "+inf");
    }

    #[test]
    fn bound_serde() {
        let json = serde_json::to_string(&PnlBound::PositiveInfinity).unwrap();
        assert_eq!(json, r#"{"kind":"positive_infinity"}"#);

        let json = serde_json::to_string(&PnlBound::Finite(dec!(625))).unwrap();
        let parsed: PnlBound = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PnlBound::Finite(dec!(625)));
    }
}
