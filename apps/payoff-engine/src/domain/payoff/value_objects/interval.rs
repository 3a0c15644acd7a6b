//! Price Interval and Slope Map Value Objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lowest price on the axis. Spot cannot settle below zero.
pub const MIN_STRIKE: Decimal = Decimal::ZERO;

/// A half-open price interval `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive lower bound.
    pub lower: Decimal,
    /// Exclusive upper bound.
    pub upper: Decimal,
}

impl Interval {
    /// Create a new interval.
    #[must_use]
    pub const fn new(lower: Decimal, upper: Decimal) -> Self {
        Self { lower, upper }
    }

    /// Check whether `price` falls in `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.lower <= price && price < self.upper
    }

    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.upper - self.lower
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

/// One interval of a slope map together with its P&L slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlopeSegment {
    /// Price interval.
    pub interval: Interval,
    /// P&L change per unit of spot inside the interval.
    pub slope: i64,
}

/// Ordered step function of P&L slopes over a price partition.
///
/// Segments are sorted by price and contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlopeMap {
    segments: Vec<SlopeSegment>,
}

impl SlopeMap {
    /// Create a slope map with zero slope on every interval.
    #[must_use]
    pub fn flat(intervals: &[Interval]) -> Self {
        Self {
            segments: intervals
                .iter()
                .map(|&interval| SlopeSegment { interval, slope: 0 })
                .collect(),
        }
    }

    /// Create a slope map from pre-computed segments.
    #[must_use]
    pub const fn from_segments(segments: Vec<SlopeSegment>) -> Self {
        Self { segments }
    }

    /// Get the segments in price order.
    #[must_use]
    pub fn segments(&self) -> &[SlopeSegment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Slope of the lowest interval.
    #[must_use]
    pub fn first_slope(&self) -> Option<i64> {
        self.segments.first().map(|s| s.slope)
    }

    /// Slope of the highest (unbounded) interval.
    #[must_use]
    pub fn last_slope(&self) -> Option<i64> {
        self.segments.last().map(|s| s.slope)
    }

    /// Add another map's slopes element-wise.
    ///
    /// Both maps must be built over the same partition; segments are paired
    /// by position.
    pub fn accumulate(&mut self, other: &Self) {
        debug_assert_eq!(self.segments.len(), other.segments.len());
        for (mine, theirs) in self.segments.iter_mut().zip(&other.segments) {
            debug_assert_eq!(mine.interval, theirs.interval);
            mine.slope += theirs.slope;
        }
    }
}
