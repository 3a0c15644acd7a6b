//! Plot Vertex and Analysis Result Value Objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PnlBound, SlopeMap};

/// A vertex of the expiration payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Underlying price at expiration.
    pub price: Decimal,
    /// Position P&L per share at that price.
    pub pnl: Decimal,
}

impl PlotPoint {
    /// Create a new vertex.
    #[must_use]
    pub const fn new(price: Decimal, pnl: Decimal) -> Self {
        Self { price, pnl }
    }

    /// Check if the vertex sits on the zero line.
    #[must_use]
    pub fn is_break_even(&self) -> bool {
        self.pnl.is_zero()
    }
}

/// Every output of one pass over the payoff pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffAnalysis {
    /// Distinct strikes / reference prices, ascending.
    pub strikes: Vec<Decimal>,
    /// Aggregate slope step function.
    pub slopes: SlopeMap,
    /// Break-even prices, ascending.
    pub break_evens: Vec<Decimal>,
    /// Maximum profit (multiplied by the contract multiplier).
    pub max_profit: PnlBound,
    /// Maximum loss (multiplied by the contract multiplier).
    pub max_loss: PnlBound,
    /// Long premiums minus short premiums, per contract.
    pub net_cost: Decimal,
    /// Payoff curve vertices, strictly ascending in price.
    pub plot_points: Vec<PlotPoint>,
}
