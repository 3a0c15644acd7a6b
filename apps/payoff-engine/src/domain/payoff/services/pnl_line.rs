//! Position P&L evaluation and per-interval line equations.

use rust_decimal::Decimal;

use crate::domain::payoff::value_objects::Leg;

/// Total P&L of all legs if the underlying settles at `spot`.
#[must_use]
pub fn total_pnl(legs: &[Leg], spot: Decimal) -> Decimal {
    legs.iter().map(|leg| leg.pnl(spot).total_pnl).sum()
}

/// A P&L line `pnl = slope * price + intercept`.
///
/// Inside one interval of the partition the position payoff is exactly
/// linear, so a slope and a single known point pin the line down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnlLine {
    /// P&L change per unit of spot.
    pub slope: i64,
    /// P&L at a spot of zero.
    pub intercept: Decimal,
}

impl PnlLine {
    /// Line with `slope` passing through `(price, pnl)`.
    #[must_use]
    pub fn through(slope: i64, price: Decimal, pnl: Decimal) -> Self {
        Self {
            slope,
            intercept: pnl - Decimal::from(slope) * price,
        }
    }

    /// P&L at `price`.
    #[must_use]
    pub fn value_at(&self, price: Decimal) -> Decimal {
        Decimal::from(self.slope) * price + self.intercept
    }

    /// Price at which the line crosses zero; `None` for a flat line.
    #[must_use]
    pub fn root(&self) -> Option<Decimal> {
        if self.slope == 0 {
            return None;
        }
        Some((-self.intercept / Decimal::from(self.slope)).normalize())
    }
}
