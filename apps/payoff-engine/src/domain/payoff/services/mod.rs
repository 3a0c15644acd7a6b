//! Payoff Domain Services
//!
//! Stateless stages of the expiration payoff pipeline:
//!
//! ```text
//! legs -> IntervalPartitioner -> slope_engine -> break_even_solver
//!                                             -> ExtremumCalculator
//!                                             -> CurveBuilder
//! ```

pub mod break_even_solver;
pub mod curve_builder;
pub mod extremum_calculator;
pub mod interval_partitioner;
pub mod pnl_line;
pub mod slope_engine;

pub use break_even_solver::solve_break_evens;
pub use curve_builder::CurveBuilder;
pub use extremum_calculator::{Extrema, ExtremumCalculator};
pub use interval_partitioner::IntervalPartitioner;
pub use pnl_line::{PnlLine, total_pnl};
pub use slope_engine::{aggregate_slopes, leg_slope, leg_slope_map};
