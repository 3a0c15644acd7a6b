//! Payoff Report DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LegRecordDto;
use crate::domain::payoff::{PayoffAnalysis, PlotPoint, PnlBound, Position, SlopeSegment};

/// DTO for one segment of the aggregate slope step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlopeSegmentDto {
    /// Inclusive lower bound.
    pub lower: Decimal,
    /// Exclusive upper bound.
    pub upper: Decimal,
    /// Net slope inside the segment.
    pub slope: i64,
}

impl From<&SlopeSegment> for SlopeSegmentDto {
    fn from(segment: &SlopeSegment) -> Self {
        Self {
            lower: segment.interval.lower,
            upper: segment.interval.upper,
            slope: segment.slope,
        }
    }
}

/// Complete analysis of one position, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffReportDto {
    /// Legs in insertion order.
    pub legs: Vec<LegRecordDto>,
    /// Distinct strikes, ascending.
    pub strikes: Vec<Decimal>,
    /// Aggregate slope per interval.
    pub slopes: Vec<SlopeSegmentDto>,
    /// Break-even prices, ascending.
    pub break_evens: Vec<Decimal>,
    /// Maximum profit.
    pub max_profit: PnlBound,
    /// Maximum loss.
    pub max_loss: PnlBound,
    /// Long premiums minus short premiums, per contract.
    pub net_cost: Decimal,
    /// Contract multiplier applied to the finite bounds.
    pub contract_multiplier: u32,
    /// Payoff curve vertices.
    pub plot_points: Vec<PlotPoint>,
}

impl PayoffReportDto {
    /// Build a report from a position and its analysis.
    #[must_use]
    pub fn new(position: &Position, analysis: PayoffAnalysis) -> Self {
        Self {
            legs: position.legs().iter().map(LegRecordDto::from).collect(),
            strikes: analysis.strikes,
            slopes: analysis
                .slopes
                .segments()
                .iter()
                .map(SlopeSegmentDto::from)
                .collect(),
            break_evens: analysis.break_evens,
            max_profit: analysis.max_profit,
            max_loss: analysis.max_loss,
            net_cost: analysis.net_cost,
            contract_multiplier: position.settings().contract_multiplier,
            plot_points: analysis.plot_points,
        }
    }

    /// Check if either bound is unbounded.
    #[must_use]
    pub const fn has_unbounded_risk_or_reward(&self) -> bool {
        self.max_profit.is_unbounded() || self.max_loss.is_unbounded()
    }
}
