// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Expiration P&L analysis for multi-leg option and stock positions.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `payoff`: Contracts, legs, the `Position` aggregate and the payoff
//!     pipeline (interval partitioner, slope engine, break-even solver,
//!     extremum calculator, curve builder)
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`PositionSourcePort`, `ReportWriterPort`)
//!   - `use_cases`: `AnalyzePosition`
//!   - `dto`: Loader records and reports
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `loader`: CSV position files
//!   - `report`: JSON report writer
//!
//! # Example
//!
//! ```rust
//! use payoff_engine::{Contract, PnlBound, Position};
//! use rust_decimal_macros::dec;
//!
//! let mut position = Position::new();
//! position.buy(Contract::call(dec!(100), dec!(5)), 1)?;
//!
//! assert_eq!(position.break_evens()?, vec![dec!(105)]);
//! assert_eq!(position.max_loss()?, PnlBound::Finite(dec!(-500)));
//! assert_eq!(position.max_profit()?, PnlBound::PositiveInfinity);
//! # Ok::<(), payoff_engine::PayoffError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Engine-level error codes.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::payoff::{
    AnalysisSettings, Contract, ContractKind, Leg, LowerTailPolicy, PayoffAnalysis, PayoffError,
    PlotPoint, PnlBound, Position, PositionSide, strategies,
};

// Application re-exports
pub use application::dto::{LegRecordDto, PayoffReportDto};
pub use application::ports::{
    InMemoryPositionSource, PositionSourceError, PositionSourcePort, ReportError,
    ReportWriterPort,
};
pub use application::use_cases::{AnalyzePositionError, AnalyzePositionUseCase};

// Infrastructure re-exports
pub use infrastructure::loader::{CsvPositionLoader, LoaderError};
pub use infrastructure::report::JsonReportWriter;

// Cross-cutting re-exports
pub use error::{EngineError, ErrorCode, ErrorResponse, render_failure};
