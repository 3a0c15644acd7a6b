//! Interval Partitioner
//!
//! Splits the price axis at every distinct strike. Between two consecutive
//! boundaries no leg changes slope, so the position payoff is linear there.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::domain::payoff::errors::PayoffError;
use crate::domain::payoff::value_objects::{Interval, Leg, MIN_STRIKE};

/// Builds the price partition for a set of legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPartitioner {
    sentinel_scale: u32,
}

impl IntervalPartitioner {
    /// Create a partitioner with the given upper sentinel scale.
    #[must_use]
    pub const fn new(sentinel_scale: u32) -> Self {
        Self { sentinel_scale }
    }

    /// Distinct strikes and stock reference prices, ascending.
    #[must_use]
    pub fn strikes(legs: &[Leg]) -> Vec<Decimal> {
        legs.iter()
            .map(|leg| leg.contract().reference_price())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Synthetic bound far above the highest strike.
    ///
    /// Saturates at `Decimal::MAX` when the scaled bound does not fit.
    #[must_use]
    pub fn upper_sentinel(&self, highest_strike: Decimal) -> Decimal {
        let scale = Decimal::from(self.sentinel_scale.max(1));
        highest_strike
            .max(MIN_STRIKE)
            .checked_add(Decimal::ONE)
            .and_then(|bound| bound.checked_mul(scale))
            .unwrap_or(Decimal::MAX)
    }

    /// Partition boundaries: `MIN_STRIKE`, every strike, then the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when `legs` is empty, or
    /// [`PayoffError::ValueOutOfRange`] when the highest strike leaves no
    /// room for the sentinel.
    pub fn boundaries(&self, legs: &[Leg]) -> Result<Vec<Decimal>, PayoffError> {
        let strikes = Self::strikes(legs);
        let Some(&highest) = strikes.last() else {
            return Err(PayoffError::EmptyPosition);
        };
        let sentinel = self.upper_sentinel(highest);
        if sentinel <= highest {
            return Err(PayoffError::ValueOutOfRange {
                message: format!("strike {highest} is too large to partition above"),
            });
        }

        let mut boundaries = Vec::with_capacity(strikes.len() + 2);
        boundaries.push(MIN_STRIKE);
        boundaries.extend(strikes.into_iter().filter(|&strike| strike > MIN_STRIKE));
        boundaries.push(sentinel);
        Ok(boundaries)
    }

    /// Contiguous half-open intervals covering `[MIN_STRIKE, sentinel)`.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::EmptyPosition`] when `legs` is empty.
    pub fn partition(&self, legs: &[Leg]) -> Result<Vec<Interval>, PayoffError> {
        let boundaries = self.boundaries(legs)?;
        Ok(boundaries
            .windows(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
            .collect())
    }
}

impl Default for IntervalPartitioner {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payoff::value_objects::Contract;
    use rust_decimal_macros::dec;

    fn iron_condor_legs() -> Vec<Leg> {
        vec![
            Leg::long(Contract::put(dec!(90), dec!(0.5)), 1).unwrap(),
            Leg::short(Contract::put(dec!(95), dec!(1.0)), 1).unwrap(),
            Leg::short(Contract::call(dec!(105), dec!(1.0)), 1).unwrap(),
            Leg::long(Contract::call(dec!(110), dec!(0.5)), 1).unwrap(),
        ]
    }

    #[test]
    fn strikes_are_sorted_and_distinct() {
        let mut legs = iron_condor_legs();
        legs.reverse();
        legs.push(Leg::long(Contract::stock(dec!(95.00)), 1).unwrap());

        let strikes = IntervalPartitioner::strikes(&legs);
        assert_eq!(strikes, vec![dec!(90), dec!(95), dec!(105), dec!(110)]);
    }

    #[test]
    fn partition_is_contiguous() {
        let partitioner = IntervalPartitioner::default();
        let intervals = partitioner.partition(&iron_condor_legs()).unwrap();

        assert_eq!(intervals.len(), 5);
        assert_eq!(intervals[0], Interval::new(dec!(0), dec!(90)));
        assert_eq!(intervals[3], Interval::new(dec!(105), dec!(110)));
        assert_eq!(intervals[4].lower, dec!(110));
        assert_eq!(intervals[4].upper, dec!(111000));

        for pair in intervals.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
            assert!(pair[0].lower < pair[0].upper);
        }
    }

    #[test]
    fn single_strike_yields_two_intervals() {
        let legs = vec![
            Leg::long(Contract::call(dec!(100), dec!(6.5)), 1).unwrap(),
            Leg::long(Contract::put(dec!(100), dec!(6.5)), 1).unwrap(),
        ];
        let intervals = IntervalPartitioner::default().partition(&legs).unwrap();

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0], Interval::new(dec!(0), dec!(100)));
        assert!(intervals[1].upper > dec!(100));
    }

    #[test]
    fn strike_at_floor_does_not_create_empty_interval() {
        let legs = vec![Leg::long(Contract::stock(dec!(0)), 1).unwrap()];
        let intervals = IntervalPartitioner::default().partition(&legs).unwrap();

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].lower, dec!(0));
        assert!(intervals[0].upper > dec!(0));
    }

    #[test]
    fn sentinel_exceeds_highest_strike() {
        let partitioner = IntervalPartitioner::new(2);
        assert_eq!(partitioner.upper_sentinel(dec!(0.5)), dec!(3));
        assert!(partitioner.upper_sentinel(dec!(10000)) > dec!(10000));

        // A zero scale still leaves the sentinel above the highest strike
        assert_eq!(IntervalPartitioner::new(0).upper_sentinel(dec!(7)), dec!(8));
    }

    #[test]
    fn sentinel_saturates_for_huge_strikes() {
        let huge = dec!(100000000000000000000000000);
        assert_eq!(IntervalPartitioner::default().upper_sentinel(huge), Decimal::MAX);
        assert_eq!(IntervalPartitioner::default().upper_sentinel(Decimal::MAX), Decimal::MAX);

        let legs = vec![Leg::long(Contract::call(huge, dec!(1)), 1).unwrap()];
        let intervals = IntervalPartitioner::default().partition(&legs).unwrap();
        assert_eq!(intervals[1], Interval::new(huge, Decimal::MAX));
    }

    #[test]
    fn strike_at_decimal_max_rejected() {
        let legs = vec![Leg::long(Contract::stock(Decimal::MAX), 1).unwrap()];
        let err = IntervalPartitioner::default().partition(&legs).unwrap_err();
        assert!(matches!(err, PayoffError::ValueOutOfRange { .. }));
    }

    #[test]
    fn empty_legs_rejected() {
        let err = IntervalPartitioner::default().partition(&[]).unwrap_err();
        assert_eq!(err, PayoffError::EmptyPosition);
    }
}
