//! Position Aggregate Root
//!
//! A Position owns an ordered list of legs and answers every expiration
//! payoff query by running the pipeline over them. Nothing is cached: each
//! query recomputes from the legs, so a query after `buy`/`sell` always
//! reflects the new leg.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payoff::errors::PayoffError;
use crate::domain::payoff::services::{
    CurveBuilder, Extrema, ExtremumCalculator, IntervalPartitioner, aggregate_slopes,
    solve_break_evens, total_pnl,
};
use crate::domain::payoff::value_objects::{
    AnalysisSettings, Contract, Interval, Leg, PayoffAnalysis, PlotPoint, PnlBound, PositionSide,
    SlopeMap,
};

/// Strikes, slopes and break-evens shared by every downstream query.
struct Stages {
    strikes: Vec<Decimal>,
    slopes: SlopeMap,
    break_evens: Vec<Decimal>,
}

/// Multi-leg options / stock position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    legs: Vec<Leg>,
    #[serde(default)]
    settings: AnalysisSettings,
}

impl Position {
    /// Create an empty position with default analysis settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty position with custom analysis settings.
    #[must_use]
    pub const fn with_settings(settings: AnalysisSettings) -> Self {
        Self {
            legs: Vec::new(),
            settings,
        }
    }

    /// Create a position from already validated legs.
    #[must_use]
    pub fn from_legs<I>(legs: I, settings: AnalysisSettings) -> Self
    where
        I: IntoIterator<Item = Leg>,
    {
        Self {
            legs: legs.into_iter().collect(),
            settings,
        }
    }

    /// Append a long leg.
    ///
    /// # Errors
    ///
    /// Returns error if the contract terms or quantity are invalid.
    pub fn buy(&mut self, contract: Contract, quantity: u32) -> Result<&mut Self, PayoffError> {
        self.add_leg(Leg::new(contract, quantity, PositionSide::Long)?);
        Ok(self)
    }

    /// Append a short leg.
    ///
    /// # Errors
    ///
    /// Returns error if the contract terms or quantity are invalid.
    pub fn sell(&mut self, contract: Contract, quantity: u32) -> Result<&mut Self, PayoffError> {
        self.add_leg(Leg::new(contract, quantity, PositionSide::Short)?);
        Ok(self)
    }

    /// Append a leg.
    pub fn add_leg(&mut self, leg: Leg) {
        self.legs.push(leg);
    }

    /// Legs in insertion order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Analysis settings.
    #[must_use]
    pub const fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Check if the position has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Distinct strikes / reference prices, ascending.
    #[must_use]
    pub fn strikes(&self) -> Vec<Decimal> {
        IntervalPartitioner::strikes(&self.legs)
    }

    /// Total P&L per share if the underlying settles at `spot`.
    #[must_use]
    pub fn total_pnl(&self, spot: Decimal) -> Decimal {
        total_pnl(&self.legs, spot)
    }

    /// Price partition bounded by zero and the upper sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn intervals(&self) -> Result<Vec<Interval>, PayoffError> {
        self.partitioner().partition(&self.legs)
    }

    /// Aggregate slope over each interval.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn slope_map(&self) -> Result<SlopeMap, PayoffError> {
        Ok(aggregate_slopes(&self.legs, &self.intervals()?))
    }

    /// Break-even prices, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn break_evens(&self) -> Result<Vec<Decimal>, PayoffError> {
        Ok(self.stages()?.break_evens)
    }

    /// Maximum profit, scaled by the contract multiplier when finite.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn max_profit(&self) -> Result<PnlBound, PayoffError> {
        Ok(self.extrema(&self.stages()?)?.max_profit)
    }

    /// Maximum loss, scaled by the contract multiplier when finite.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn max_loss(&self) -> Result<PnlBound, PayoffError> {
        Ok(self.extrema(&self.stages()?)?.max_loss)
    }

    /// Long premiums minus short premiums, per contract.
    ///
    /// Not weighted by quantity and not multiplied by the contract multiplier.
    #[must_use]
    pub fn net_cost(&self) -> Decimal {
        self.legs
            .iter()
            .map(|leg| match leg.side() {
                PositionSide::Long => leg.contract().premium(),
                PositionSide::Short => -leg.contract().premium(),
            })
            .sum()
    }

    /// Payoff curve vertices, strictly ascending in price.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn plot_points(&self) -> Result<Vec<PlotPoint>, PayoffError> {
        self.curve(&self.stages()?)
    }

    /// Every output from a single pass of the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when the position has no legs.
    pub fn analyze(&self) -> Result<PayoffAnalysis, PayoffError> {
        let stages = self.stages()?;
        let Extrema {
            max_profit,
            max_loss,
        } = self.extrema(&stages)?;
        let plot_points = self.curve(&stages)?;

        Ok(PayoffAnalysis {
            strikes: stages.strikes,
            slopes: stages.slopes,
            break_evens: stages.break_evens,
            max_profit,
            max_loss,
            net_cost: self.net_cost(),
            plot_points,
        })
    }

    const fn partitioner(&self) -> IntervalPartitioner {
        IntervalPartitioner::new(self.settings.sentinel_scale)
    }

    fn stages(&self) -> Result<Stages, PayoffError> {
        let intervals = self.intervals()?;
        let slopes = aggregate_slopes(&self.legs, &intervals);
        let break_evens = solve_break_evens(&self.legs, &slopes);
        Ok(Stages {
            strikes: self.strikes(),
            slopes,
            break_evens,
        })
    }

    fn extrema(&self, stages: &Stages) -> Result<Extrema, PayoffError> {
        ExtremumCalculator::new(self.settings).calculate(
            &self.legs,
            &stages.strikes,
            &stages.break_evens,
            &stages.slopes,
        )
    }

    fn curve(&self, stages: &Stages) -> Result<Vec<PlotPoint>, PayoffError> {
        CurveBuilder::new(self.settings).build(
            &self.legs,
            &stages.strikes,
            &stages.break_evens,
            &stages.slopes,
        )
    }
}
