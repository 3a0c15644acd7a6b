//! Break-Even Solver
//!
//! Rebuilds the line equation of every slope segment from one known
//! `(price, pnl)` anchor and locates its zero crossing.

use rust_decimal::Decimal;

use super::pnl_line::{PnlLine, total_pnl};
use crate::domain::payoff::value_objects::{Leg, SlopeMap, SlopeSegment};

/// Break-even prices of `legs` over the aggregate `slopes`, ascending.
///
/// Flat segments never produce a break-even. A zero that sits exactly on a
/// boundary shared by two segments is reported once.
#[must_use]
pub fn solve_break_evens(legs: &[Leg], slopes: &SlopeMap) -> Vec<Decimal> {
    let segments = slopes.segments();
    let last = segments.len().saturating_sub(1);

    let mut break_evens: Vec<Decimal> = segments
        .iter()
        .enumerate()
        .filter_map(|(idx, segment)| segment_crossing(legs, segment, idx == last))
        .collect();
    break_evens.dedup();
    break_evens
}

/// Zero crossing inside one segment, if any.
///
/// The final segment is a ray: its upper bound is only a sentinel, so the
/// line is anchored at the lower bound and the crossing may lie past it.
fn segment_crossing(legs: &[Leg], segment: &SlopeSegment, is_last: bool) -> Option<Decimal> {
    let SlopeSegment { interval, slope } = *segment;
    if slope == 0 {
        return None;
    }

    let anchor = if is_last { interval.lower } else { interval.upper };
    let line = PnlLine::through(slope, anchor, total_pnl(legs, anchor));

    let at_lower = line.value_at(interval.lower);
    if at_lower.is_zero() {
        return Some(interval.lower);
    }

    if is_last {
        // Moving right from a loss with a rising line (or a profit with a falling one)
        let heads_to_zero = at_lower.is_sign_negative() == (slope > 0);
        return heads_to_zero.then(|| line.root()).flatten();
    }

    let at_upper = line.value_at(interval.upper);
    if at_upper.is_zero() {
        return Some(interval.upper);
    }
    if at_lower.is_sign_negative() == at_upper.is_sign_negative() {
        return None;
    }
    line.root()
}
