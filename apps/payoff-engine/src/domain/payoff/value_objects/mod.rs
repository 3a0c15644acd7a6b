//! Payoff Value Objects

mod contract;
mod interval;
mod leg;
mod plot_point;
mod pnl_bound;
mod settings;

pub use contract::{Contract, ContractKind};
pub use interval::{Interval, MIN_STRIKE, SlopeMap, SlopeSegment};
pub use leg::{Leg, LegPnl, PositionSide};
pub use plot_point::{PayoffAnalysis, PlotPoint};
pub use pnl_bound::PnlBound;
pub use settings::{AnalysisSettings, LowerTailPolicy};
