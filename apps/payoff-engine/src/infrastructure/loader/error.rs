//! Loader errors.

use thiserror::Error;

use crate::application::ports::PositionSourceError;

/// Errors that can occur while loading a position file.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Missing required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Invalid data format
    #[error("Invalid data format in row {row}: {message}")]
    InvalidFormat {
        /// Data row (1-indexed, header excluded).
        row: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),
}

impl From<LoaderError> for PositionSourceError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::InvalidFormat { row, message } => Self::InvalidRecord { row, message },
            other => Self::Unavailable {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_maps_to_invalid_record() {
        let err = LoaderError::InvalidFormat {
            row: 2,
            message: "bad strike".to_string(),
        };
        assert_eq!(
            PositionSourceError::from(err),
            PositionSourceError::InvalidRecord {
                row: 2,
                message: "bad strike".to_string()
            }
        );
    }

    #[test]
    fn other_errors_map_to_unavailable() {
        let err = LoaderError::MissingColumn("Strike".to_string());
        assert_eq!(
            PositionSourceError::from(err),
            PositionSourceError::Unavailable {
                message: "Missing required column: Strike".to_string()
            }
        );
    }
}
