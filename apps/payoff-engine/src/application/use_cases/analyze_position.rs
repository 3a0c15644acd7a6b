//! Analyze Position Use Case

use tracing::{debug, info, warn};

use crate::application::dto::PayoffReportDto;
use crate::application::ports::{
    PositionSourceError, PositionSourcePort, ReportError, ReportWriterPort,
};
use crate::domain::payoff::{AnalysisSettings, Leg, PayoffError, Position};

/// Errors raised while analysing a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzePositionError {
    /// The legs could not be loaded.
    #[error(transparent)]
    Source(#[from] PositionSourceError),

    /// A record is not a valid leg, or the position cannot be analysed.
    #[error("Leg {index}: {source}")]
    InvalidLeg {
        /// Zero-based index of the offending record.
        index: usize,
        /// Underlying domain error.
        source: PayoffError,
    },

    /// Analysis failed.
    #[error(transparent)]
    Payoff(#[from] PayoffError),

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Use case for loading a position and computing its expiration payoff.
pub struct AnalyzePositionUseCase<S>
where
    S: PositionSourcePort,
{
    source: S,
    settings: AnalysisSettings,
}

impl<S> AnalyzePositionUseCase<S>
where
    S: PositionSourcePort,
{
    /// Create a new `AnalyzePositionUseCase`.
    pub const fn new(source: S, settings: AnalysisSettings) -> Self {
        Self { source, settings }
    }

    /// Load the legs from the source into a position.
    pub fn load_position(&self) -> Result<Position, AnalyzePositionError> {
        let records = self.source.load_legs()?;
        let legs = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Leg::try_from(record).map_err(|source| AnalyzePositionError::InvalidLeg {
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            source = %self.source.describe(),
            legs = legs.len(),
            "Loaded position"
        );
        Ok(Position::from_legs(legs, self.settings))
    }

    /// Execute the use case.
    #[tracing::instrument(skip(self), fields(source = %self.source.describe()))]
    pub fn execute(&self) -> Result<PayoffReportDto, AnalyzePositionError> {
        let position = self.load_position()?;
        let analysis = position.analyze()?;

        debug!(
            strikes = ?analysis.strikes,
            segments = analysis.slopes.len(),
            first_slope = ?analysis.slopes.first_slope(),
            last_slope = ?analysis.slopes.last_slope(),
            vertices = analysis.plot_points.len(),
            "Payoff pipeline complete"
        );

        let report = PayoffReportDto::new(&position, analysis);
        if report.max_loss.is_unbounded() {
            warn!(max_profit = %report.max_profit, "Position has unbounded loss");
        }
        info!(
            break_evens = ?report.break_evens,
            max_profit = %report.max_profit,
            max_loss = %report.max_loss,
            net_cost = %report.net_cost,
            "Position analyzed"
        );
        Ok(report)
    }

    /// Execute the use case and hand the report to `writer`.
    pub fn execute_into<W>(&self, writer: &mut W) -> Result<PayoffReportDto, AnalyzePositionError>
    where
        W: ReportWriterPort,
    {
        let report = self.execute()?;
        writer.write_report(&report)?;
        Ok(report)
    }
}
