//! Position Source Port (Driven Port)
//!
//! Interface for reading the legs of a position from an external source.

use crate::application::dto::LegRecordDto;

/// Position source error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionSourceError {
    /// The source could not be opened or read.
    #[error("Position source unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },

    /// A record could not be parsed.
    #[error("Invalid position record at row {row}: {message}")]
    InvalidRecord {
        /// 1-based data row, excluding the header.
        row: usize,
        /// Error message.
        message: String,
    },
}

/// Port for loading leg records.
pub trait PositionSourcePort {
    /// Human readable description of the source, used in logs.
    fn describe(&self) -> String;

    /// Load every leg record in source order.
    fn load_legs(&self) -> Result<Vec<LegRecordDto>, PositionSourceError>;
}

/// In-memory position source for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionSource {
    records: Vec<LegRecordDto>,
}

impl InMemoryPositionSource {
    /// Create a source returning `records`.
    #[must_use]
    pub const fn new(records: Vec<LegRecordDto>) -> Self {
        Self { records }
    }
}

impl PositionSourcePort for InMemoryPositionSource {
    fn describe(&self) -> String {
        format!("in-memory ({} legs)", self.records.len())
    }

    fn load_legs(&self) -> Result<Vec<LegRecordDto>, PositionSourceError> {
        Ok(self.records.clone())
    }
}
