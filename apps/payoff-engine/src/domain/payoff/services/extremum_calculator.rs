//! Extremum Calculator
//!
//! Bounded extremes come from the structurally significant prices (strikes and
//! break-evens). The outermost slopes then decide whether either extreme is
//! actually unbounded.

use rust_decimal::Decimal;

use super::pnl_line::total_pnl;
use crate::domain::payoff::errors::PayoffError;
use crate::domain::payoff::value_objects::{
    AnalysisSettings, Leg, LowerTailPolicy, MIN_STRIKE, PnlBound, SlopeMap,
};

/// Maximum profit and maximum loss of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extrema {
    /// Best outcome at expiration.
    pub max_profit: PnlBound,
    /// Worst outcome at expiration.
    pub max_loss: PnlBound,
}

/// Evaluates P&L bounds under the configured lower-tail policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtremumCalculator {
    settings: AnalysisSettings,
}

impl ExtremumCalculator {
    /// Create a calculator using `settings`.
    #[must_use]
    pub const fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Candidate `(price, pnl)` pairs the bounded extremes are drawn from.
    ///
    /// Strikes carry their computed P&L, break-evens carry zero. Under the
    /// floored lower tail the P&L at `MIN_STRIKE` is a candidate as well.
    #[must_use]
    pub fn candidates(
        &self,
        legs: &[Leg],
        strikes: &[Decimal],
        break_evens: &[Decimal],
    ) -> Vec<(Decimal, Decimal)> {
        let mut candidates: Vec<(Decimal, Decimal)> = strikes
            .iter()
            .map(|&strike| (strike, total_pnl(legs, strike)))
            .chain(break_evens.iter().map(|&price| (price, Decimal::ZERO)))
            .collect();

        if self.settings.lower_tail == LowerTailPolicy::Floored {
            candidates.push((MIN_STRIKE, total_pnl(legs, MIN_STRIKE)));
        }
        candidates
    }

    /// Max profit and max loss, finite values scaled by the contract multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when there is nothing to evaluate,
    /// or [`PayoffError::ValueOutOfRange`] when a scaled bound overflows.
    pub fn calculate(
        &self,
        legs: &[Leg],
        strikes: &[Decimal],
        break_evens: &[Decimal],
        slopes: &SlopeMap,
    ) -> Result<Extrema, PayoffError> {
        let (Some(first_slope), Some(last_slope)) = (slopes.first_slope(), slopes.last_slope())
        else {
            return Err(PayoffError::EmptyPosition);
        };

        let candidates = self.candidates(legs, strikes, break_evens);
        let values = candidates.iter().map(|&(_, pnl)| pnl);
        let (Some(highest), Some(lowest)) = (values.clone().max(), values.min()) else {
            return Err(PayoffError::EmptyPosition);
        };

        let unbounded_below = self.settings.lower_tail == LowerTailPolicy::Unbounded;
        let max_profit = if last_slope > 0 || (unbounded_below && first_slope < 0) {
            PnlBound::PositiveInfinity
        } else {
            PnlBound::Finite(self.scale(highest)?)
        };
        let max_loss = if last_slope < 0 || (unbounded_below && first_slope > 0) {
            PnlBound::NegativeInfinity
        } else {
            PnlBound::Finite(self.scale(lowest)?)
        };

        Ok(Extrema {
            max_profit,
            max_loss,
        })
    }

    fn scale(&self, pnl: Decimal) -> Result<Decimal, PayoffError> {
        pnl.checked_mul(Decimal::from(self.settings.contract_multiplier))
            .map(|scaled| scaled.normalize())
            .ok_or_else(|| PayoffError::ValueOutOfRange {
                message: format!(
                    "P&L {pnl} times multiplier {} overflows",
                    self.settings.contract_multiplier
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payoff::services::break_even_solver::solve_break_evens;
    use crate::domain::payoff::services::slope_engine::aggregate_slopes;
    use crate::domain::payoff::services::IntervalPartitioner;
    use crate::domain::payoff::value_objects::Contract;
    use rust_decimal_macros::dec;

    fn extrema(legs: &[Leg], settings: AnalysisSettings) -> Extrema {
        let strikes = IntervalPartitioner::strikes(legs);
        let intervals = IntervalPartitioner::new(settings.sentinel_scale)
            .partition(legs)
            .unwrap();
        let slopes = aggregate_slopes(legs, &intervals);
        let break_evens = solve_break_evens(legs, &slopes);
        ExtremumCalculator::new(settings)
            .calculate(legs, &strikes, &break_evens, &slopes)
            .unwrap()
    }

    fn unbounded() -> AnalysisSettings {
        AnalysisSettings::default().with_lower_tail(LowerTailPolicy::Unbounded)
    }

    #[test]
    fn long_call_bounds() {
        let legs = [Leg::long(Contract::call(dec!(100), dec!(5)), 1).unwrap()];
        let result = extrema(&legs, AnalysisSettings::default());

        assert_eq!(result.max_profit, PnlBound::PositiveInfinity);
        assert_eq!(result.max_loss, PnlBound::Finite(dec!(-500)));
    }

    #[test]
    fn long_put_profit_is_bounded_when_floored() {
        let legs = [Leg::long(Contract::put(dec!(100), dec!(5)), 1).unwrap()];

        let floored = extrema(&legs, AnalysisSettings::default());
        assert_eq!(floored.max_profit, PnlBound::Finite(dec!(9500)));
        assert_eq!(floored.max_loss, PnlBound::Finite(dec!(-500)));

        let literal = extrema(&legs, unbounded());
        assert_eq!(literal.max_profit, PnlBound::PositiveInfinity);
        assert_eq!(literal.max_loss, PnlBound::Finite(dec!(-500)));
    }

    #[test]
    fn straddle_bounds() {
        let legs = [
            Leg::long(Contract::call(dec!(100), dec!(6.5)), 1).unwrap(),
            Leg::long(Contract::put(dec!(100), dec!(6.5)), 1).unwrap(),
        ];
        let result = extrema(&legs, AnalysisSettings::default());

        assert_eq!(result.max_profit, PnlBound::PositiveInfinity);
        assert_eq!(result.max_loss, PnlBound::Finite(dec!(-1300)));
    }

    #[test]
    fn covered_call_bounds() {
        let legs = [
            Leg::long(Contract::stock(dec!(95)), 1).unwrap(),
            Leg::short(Contract::call(dec!(95), dec!(6.25)), 1).unwrap(),
        ];

        let floored = extrema(&legs, AnalysisSettings::default());
        assert_eq!(floored.max_profit, PnlBound::Finite(dec!(625)));
        assert_eq!(floored.max_loss, PnlBound::Finite(dec!(-8875)));

        let literal = extrema(&legs, unbounded());
        assert_eq!(literal.max_profit, PnlBound::Finite(dec!(625)));
        assert_eq!(literal.max_loss, PnlBound::NegativeInfinity);
    }

    #[test]
    fn iron_condor_bounds() {
        let legs = [
            Leg::long(Contract::put(dec!(90), dec!(0.5)), 1).unwrap(),
            Leg::short(Contract::put(dec!(95), dec!(1.0)), 1).unwrap(),
            Leg::short(Contract::call(dec!(105), dec!(1.0)), 1).unwrap(),
            Leg::long(Contract::call(dec!(110), dec!(0.5)), 1).unwrap(),
        ];

        for settings in [AnalysisSettings::default(), unbounded()] {
            let result = extrema(&legs, settings);
            assert_eq!(result.max_profit, PnlBound::Finite(dec!(100)));
            assert_eq!(result.max_loss, PnlBound::Finite(dec!(-400)));
        }
    }

    #[test]
    fn naked_short_call_loss_is_unbounded() {
        let legs = [Leg::short(Contract::call(dec!(100), dec!(3)), 2).unwrap()];
        let result = extrema(&legs, AnalysisSettings::default());

        assert_eq!(result.max_profit, PnlBound::Finite(dec!(600)));
        assert_eq!(result.max_loss, PnlBound::NegativeInfinity);
    }

    #[test]
    fn contract_multiplier_scales_finite_bounds() {
        let legs = [Leg::long(Contract::call(dec!(100), dec!(5)), 1).unwrap()];
        let result = extrema(&legs, AnalysisSettings::default().with_contract_multiplier(10));
        assert_eq!(result.max_loss, PnlBound::Finite(dec!(-50)));
    }

    #[test]
    fn floored_candidates_include_min_strike() {
        let legs = [Leg::long(Contract::put(dec!(100), dec!(5)), 1).unwrap()];
        let candidates =
            ExtremumCalculator::default().candidates(&legs, &[dec!(100)], &[dec!(95)]);

        assert!(candidates.contains(&(dec!(100), dec!(-5))));
        assert!(candidates.contains(&(dec!(95), dec!(0))));
        assert!(candidates.contains(&(dec!(0), dec!(95))));

        let literal = ExtremumCalculator::new(unbounded()).candidates(&legs, &[dec!(100)], &[]);
        assert_eq!(literal, vec![(dec!(100), dec!(-5))]);
    }

    #[test]
    fn overflowing_bound_is_an_error() {
        let legs = [Leg::short(Contract::stock(dec!(1000000000000000000000000000)), 1).unwrap()];
        let strikes = IntervalPartitioner::strikes(&legs);
        let intervals = IntervalPartitioner::default().partition(&legs).unwrap();
        let slopes = aggregate_slopes(&legs, &intervals);

        let err = ExtremumCalculator::default()
            .calculate(&legs, &strikes, &[], &slopes)
            .unwrap_err();
        assert!(matches!(err, PayoffError::ValueOutOfRange { .. }));
    }

    #[test]
    fn empty_slopes_rejected() {
        let err = ExtremumCalculator::default()
            .calculate(&[], &[], &[], &SlopeMap::default())
            .unwrap_err();
        assert_eq!(err, PayoffError::EmptyPosition);
    }
}
