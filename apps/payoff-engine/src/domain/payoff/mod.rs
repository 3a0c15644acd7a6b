//! Payoff Bounded Context
//!
//! Expiration P&L of multi-leg option and stock positions:
//! - Piecewise-linear payoff curve over a strike partition
//! - Break-even prices
//! - Maximum profit / maximum loss, bounded or unbounded
//! - Plot vertices for an external renderer

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod strategies;
pub mod value_objects;

pub use aggregate::Position;
pub use errors::PayoffError;
pub use value_objects::{
    AnalysisSettings, Contract, ContractKind, Interval, Leg, LegPnl, LowerTailPolicy, MIN_STRIKE,
    PayoffAnalysis, PlotPoint, PnlBound, PositionSide, SlopeMap, SlopeSegment,
};
