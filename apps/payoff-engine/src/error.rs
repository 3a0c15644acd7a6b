//! Engine-level error handling.
//!
//! Every failure surfaced by the binary is an [`EngineError`] carrying a
//! stable [`ErrorCode`]. Codes map onto BSD `sysexits` process exit codes.
//!
//! | Code | Exit | Usage |
//! |------|------|-------|
//! | `INVALID_CONFIG` | 78 | Config file unreadable, malformed or out of range |
//! | `POSITION_SOURCE_UNAVAILABLE` | 66 | Position file missing or unreadable |
//! | `INVALID_POSITION_RECORD` | 65 | A row of the position file cannot be parsed |
//! | `INVALID_LEG` | 65 | A record is not a valid leg |
//! | `EMPTY_POSITION` | 65 | No legs to analyse |
//! | `REPORT_FAILED` | 74 | Report could not be serialized or written |
//! | `INTERNAL_ERROR` | 70 | Unexpected failure |
//!
//! The binary reports a failure on standard error as a one-line JSON
//! [`ErrorResponse`] (see [`render_failure`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{PositionSourceError, ReportError};
use crate::application::use_cases::AnalyzePositionError;
use crate::config::ConfigError;
use crate::domain::payoff::PayoffError;
use crate::infrastructure::loader::LoaderError;

/// Error codes for the payoff engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Configuration could not be loaded or validated.
    InvalidConfig,
    /// Position source could not be read.
    PositionSourceUnavailable,
    /// A position record is malformed.
    InvalidPositionRecord,
    /// A record does not describe a valid leg.
    InvalidLeg,
    /// Analysis requested on a position without legs.
    EmptyPosition,
    /// The report could not be produced.
    ReportFailed,
    /// Internal error.
    InternalError,
}

impl ErrorCode {
    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPositionRecord | Self::InvalidLeg | Self::EmptyPosition => 65,
            Self::PositionSourceUnavailable => 66,
            Self::InternalError => 70,
            Self::ReportFailed => 74,
            Self::InvalidConfig => 78,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::PositionSourceUnavailable => "POSITION_SOURCE_UNAVAILABLE",
            Self::InvalidPositionRecord => "INVALID_POSITION_RECORD",
            Self::InvalidLeg => "INVALID_LEG",
            Self::EmptyPosition => "EMPTY_POSITION",
            Self::ReportFailed => "REPORT_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with context for the payoff engine.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct EngineError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }

    /// Convert to a serializable error response.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            exit_code: self.exit_code(),
            details: self.context.iter().cloned().collect(),
        }
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Serializable error body written to standard error by [`render_failure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Process exit code.
    pub exit_code: u8,
    /// Additional details.
    pub details: std::collections::BTreeMap<String, String>,
}

/// Render a top-level failure for standard error.
///
/// An [`EngineError`] anywhere in the chain becomes a JSON [`ErrorResponse`];
/// outer context is kept under the `context` detail. Anything else is
/// rendered as plain text.
#[must_use]
pub fn render_failure(err: &anyhow::Error) -> String {
    let Some(engine_error) = err.downcast_ref::<EngineError>() else {
        return format!("Error: {err:#}");
    };

    let mut response = engine_error.to_response();
    let outer = err.to_string();
    if outer != engine_error.to_string() {
        response.details.insert("context".to_string(), outer);
    }
    serde_json::to_string(&response).unwrap_or_else(|_| format!("Error: {err:#}"))
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        let error = Self::new(ErrorCode::InvalidConfig, err.to_string());
        match &err {
            ConfigError::ReadError { path, .. } => error.with_context("path", path.as_str()),
            ConfigError::ParseError(_) | ConfigError::ValidationError(_) => error,
        }
    }
}

impl From<PayoffError> for EngineError {
    fn from(err: PayoffError) -> Self {
        let code = match err {
            PayoffError::EmptyPosition => ErrorCode::EmptyPosition,
            PayoffError::InvalidContract { .. }
            | PayoffError::InvalidLeg { .. }
            | PayoffError::UnrecognizedContractType { .. }
            | PayoffError::UnrecognizedSide { .. }
            | PayoffError::ValueOutOfRange { .. } => ErrorCode::InvalidLeg,
        };
        Self::new(code, err.to_string())
    }
}

impl From<PositionSourceError> for EngineError {
    fn from(err: PositionSourceError) -> Self {
        match err {
            PositionSourceError::Unavailable { message } => {
                Self::new(ErrorCode::PositionSourceUnavailable, message)
            }
            PositionSourceError::InvalidRecord { row, message } => {
                Self::new(ErrorCode::InvalidPositionRecord, message)
                    .with_context("row", row.to_string())
            }
        }
    }
}

impl From<LoaderError> for EngineError {
    fn from(err: LoaderError) -> Self {
        PositionSourceError::from(err).into()
    }
}

impl From<ReportError> for EngineError {
    fn from(err: ReportError) -> Self {
        Self::new(ErrorCode::ReportFailed, err.to_string())
    }
}

impl From<AnalyzePositionError> for EngineError {
    fn from(err: AnalyzePositionError) -> Self {
        match err {
            AnalyzePositionError::Source(e) => e.into(),
            AnalyzePositionError::InvalidLeg { index, source } => {
                Self::from(source).with_context("leg_index", index.to_string())
            }
            AnalyzePositionError::Payoff(e) => e.into(),
            AnalyzePositionError::Report(e) => e.into(),
        }
    }
}
