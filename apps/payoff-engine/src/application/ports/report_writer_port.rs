//! Report Writer Port (Driven Port)
//!
//! Interface for emitting a finished payoff report.

use crate::application::dto::PayoffReportDto;

/// Report writing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Report serialization error: {message}")]
    SerializationError {
        /// Error message.
        message: String,
    },

    /// The destination rejected the write.
    #[error("Report write failed: {message}")]
    WriteFailed {
        /// Error message.
        message: String,
    },
}

/// Port for writing payoff reports.
pub trait ReportWriterPort {
    /// Write one report.
    fn write_report(&mut self, report: &PayoffReportDto) -> Result<(), ReportError>;
}

/// Report writer that keeps every report in memory, for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportWriter {
    reports: Vec<PayoffReportDto>,
}

impl InMemoryReportWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports written so far.
    #[must_use]
    pub fn reports(&self) -> &[PayoffReportDto] {
        &self.reports
    }
}

impl ReportWriterPort for InMemoryReportWriter {
    fn write_report(&mut self, report: &PayoffReportDto) -> Result<(), ReportError> {
        self.reports.push(report.clone());
        Ok(())
    }
}
