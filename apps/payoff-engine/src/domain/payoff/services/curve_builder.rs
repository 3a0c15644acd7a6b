//! Curve Builder
//!
//! Produces the ordered vertices of the expiration payoff curve: every strike
//! and break-even, plus one padded endpoint on each side extrapolated along
//! the outermost slopes. Under the floored lower tail the curve also starts at
//! `MIN_STRIKE`, where the floored max profit or loss may be attained.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::pnl_line::{PnlLine, total_pnl};
use crate::domain::payoff::errors::PayoffError;
use crate::domain::payoff::value_objects::{
    AnalysisSettings, Leg, LowerTailPolicy, MIN_STRIKE, PlotPoint, SlopeMap,
};

/// Builds plot vertices for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurveBuilder {
    settings: AnalysisSettings,
}

impl CurveBuilder {
    /// Create a curve builder using `settings`.
    #[must_use]
    pub const fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Vertices strictly ascending in price.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when there are no strikes or
    /// slopes to build from.
    pub fn build(
        &self,
        legs: &[Leg],
        strikes: &[Decimal],
        break_evens: &[Decimal],
        slopes: &SlopeMap,
    ) -> Result<Vec<PlotPoint>, PayoffError> {
        let (Some(first_slope), Some(last_slope)) = (slopes.first_slope(), slopes.last_slope())
        else {
            return Err(PayoffError::EmptyPosition);
        };

        let mut vertices: BTreeMap<Decimal, Decimal> = strikes
            .iter()
            .map(|&strike| (strike, total_pnl(legs, strike)))
            .collect();
        for &price in break_evens {
            vertices.insert(price, Decimal::ZERO);
        }

        let (Some((&lowest, &lowest_pnl)), Some((&highest, &highest_pnl))) =
            (vertices.first_key_value(), vertices.last_key_value())
        else {
            return Err(PayoffError::EmptyPosition);
        };

        let floored = self.settings.lower_tail == LowerTailPolicy::Floored;
        let padding = self.settings.plot_padding;
        let mut lower_price = lowest - padding;
        if floored {
            lower_price = lower_price.max(MIN_STRIKE);
        }
        let upper_price = highest + padding;

        let mut points = Vec::with_capacity(vertices.len() + 3);
        if floored && MIN_STRIKE < lower_price.min(lowest) {
            points.push(PlotPoint::new(MIN_STRIKE, total_pnl(legs, MIN_STRIKE)));
        }
        if lower_price < lowest {
            let line = PnlLine::through(first_slope, lowest, lowest_pnl);
            points.push(PlotPoint::new(lower_price, line.value_at(lower_price)));
        }
        points.extend(
            vertices
                .into_iter()
                .map(|(price, pnl)| PlotPoint::new(price, pnl)),
        );
        if upper_price > highest {
            let line = PnlLine::through(last_slope, highest, highest_pnl);
            points.push(PlotPoint::new(upper_price, line.value_at(upper_price)));
        }
        Ok(points)
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

    fn curve(legs: &[Leg], settings: AnalysisSettings) -> Vec<(Decimal, Decimal)> {
        let strikes = IntervalPartitioner::strikes(legs);
        let intervals = IntervalPartitioner::new(settings.sentinel_scale)
            .partition(legs)
            .unwrap();
        let slopes = aggregate_slopes(legs, &intervals);
        let break_evens = solve_break_evens(legs, &slopes);
        CurveBuilder::new(settings)
            .build(legs, &strikes, &break_evens, &slopes)
            .unwrap()
            .into_iter()
            .map(|p| (p.price, p.pnl))
            .collect()
    }

    #[test]
    fn iron_condor_curve() {
        let legs = [
            Leg::long(Contract::put(dec!(90), dec!(0.5)), 1).unwrap(),
            Leg::short(Contract::put(dec!(95), dec!(1.0)), 1).unwrap(),
            Leg::short(Contract::call(dec!(105), dec!(1.0)), 1).unwrap(),
            Leg::long(Contract::call(dec!(110), dec!(0.5)), 1).unwrap(),
        ];

        assert_eq!(
            curve(&legs, AnalysisSettings::default()),
            vec![
                (dec!(0), dec!(-4)),
                (dec!(85), dec!(-4)),
                (dec!(90), dec!(-4)),
                (dec!(94), dec!(0)),
                (dec!(95), dec!(1)),
                (dec!(105), dec!(1)),
                (dec!(106), dec!(0)),
                (dec!(110), dec!(-4)),
                (dec!(115), dec!(-4)),
            ]
        );
    }

    #[test]
    fn straddle_curve_extends_along_tails() {
        let legs = [
            Leg::long(Contract::call(dec!(100), dec!(6.5)), 1).unwrap(),
            Leg::long(Contract::put(dec!(100), dec!(6.5)), 1).unwrap(),
        ];

        assert_eq!(
            curve(&legs, AnalysisSettings::default()),
            vec![
                (dec!(0), dec!(87)),
                (dec!(82), dec!(5)),
                (dec!(87), dec!(0)),
                (dec!(100), dec!(-13)),
                (dec!(113), dec!(0)),
                (dec!(118), dec!(5)),
            ]
        );
    }

    #[test]
    fn floored_lower_endpoint_clamps_to_zero() {
        let legs = [Leg::long(Contract::put(dec!(3), dec!(1)), 1).unwrap()];
        let points = curve(&legs, AnalysisSettings::default());

        assert_eq!(points.first(), Some(&(dec!(0), dec!(2))));
        assert_eq!(points.last(), Some(&(dec!(8), dec!(-1))));
    }

    #[test]
    fn floored_curve_shows_floor_extreme() {
        // Long put: max profit 95 per share is only reached at zero
        let legs = [Leg::long(Contract::put(dec!(100), dec!(5)), 1).unwrap()];

        assert_eq!(
            curve(&legs, AnalysisSettings::default()),
            vec![
                (dec!(0), dec!(95)),
                (dec!(90), dec!(5)),
                (dec!(95), dec!(0)),
                (dec!(100), dec!(-5)),
                (dec!(105), dec!(-5)),
            ]
        );

        let literal = AnalysisSettings::default().with_lower_tail(LowerTailPolicy::Unbounded);
        assert_eq!(curve(&legs, literal).first(), Some(&(dec!(90), dec!(5))));
    }

    #[test]
    fn floored_lower_endpoint_omitted_at_zero() {
        let legs = [Leg::long(Contract::stock(dec!(0)), 1).unwrap()];

        assert_eq!(
            curve(&legs, AnalysisSettings::default()),
            vec![(dec!(0), dec!(0)), (dec!(5), dec!(5))]
        );

        let literal = AnalysisSettings::default().with_lower_tail(LowerTailPolicy::Unbounded);
        assert_eq!(
            curve(&legs, literal),
            vec![(dec!(-5), dec!(-5)), (dec!(0), dec!(0)), (dec!(5), dec!(5))]
        );
    }

    #[test]
    fn vertices_strictly_ascend() {
        let legs = [
            Leg::long(Contract::stock(dec!(95)), 1).unwrap(),
            Leg::short(Contract::call(dec!(95), dec!(6.25)), 1).unwrap(),
            Leg::long(Contract::put(dec!(88.75), dec!(0)), 1).unwrap(),
        ];
        let points = curve(&legs, AnalysisSettings::default());

        for pair in points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn empty_slopes_rejected() {
        let err = CurveBuilder::default()
            .build(&[], &[], &[], &SlopeMap::default())
            .unwrap_err();
        assert_eq!(err, PayoffError::EmptyPosition);
    }
}
