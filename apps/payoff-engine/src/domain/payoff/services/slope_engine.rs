//! Slope Engine
//!
//! Computes how fast each leg's P&L moves with spot inside every interval of
//! the partition, then sums the legs into the position's step function.
//!
//! Every strike is a partition boundary, so an interval lies entirely on one
//! side of any strike:
//!
//! | Contract | Active when            | Long | Short |
//! |----------|------------------------|------|-------|
//! | Call     | `interval.lower >= K`  | `+q` | `-q`  |
//! | Put      | `interval.upper <= K`  | `-q` | `+q`  |
//! | Stock    | always                 | `+q` | `-q`  |

use crate::domain::payoff::value_objects::{Contract, Interval, Leg, SlopeMap, SlopeSegment};

/// Slope contributed by `leg` inside `interval`.
#[must_use]
pub fn leg_slope(leg: &Leg, interval: &Interval) -> i64 {
    let quantity = i64::from(leg.quantity());
    let side = leg.side().sign();

    match *leg.contract() {
        Contract::Call { strike, .. } if interval.lower >= strike => quantity * side,
        Contract::Put { strike, .. } if interval.upper <= strike => -quantity * side,
        Contract::Stock { .. } => quantity * side,
        Contract::Call { .. } | Contract::Put { .. } => 0,
    }
}

/// Slope map of a single leg over the partition.
#[must_use]
pub fn leg_slope_map(leg: &Leg, intervals: &[Interval]) -> SlopeMap {
    SlopeMap::from_segments(
        intervals
            .iter()
            .map(|interval| SlopeSegment {
                interval: *interval,
                slope: leg_slope(leg, interval),
            })
            .collect(),
    )
}

/// Element-wise sum of every leg's slope map.
#[must_use]
pub fn aggregate_slopes(legs: &[Leg], intervals: &[Interval]) -> SlopeMap {
    let mut total = SlopeMap::flat(intervals);
    for leg in legs {
        total.accumulate(&leg_slope_map(leg, intervals));
    }
    total
}
