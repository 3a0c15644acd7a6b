//! Tracing Setup
//!
//! Installs a `tracing-subscriber` formatter writing to standard error, so
//! standard output stays reserved for reports.
//!
//! # Configuration
//!
//! - `observability.logging.level`: default filter (overridden by `RUST_LOG`)
//! - `observability.logging.format`: `pretty` or `json`
//! - `observability.logging.include_spans`: attach span context to events
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::telemetry::init_telemetry;
//!
//! init_telemetry(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::{LogFormat, LoggingConfig};

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the event filter: `RUST_LOG` when set, the configured level otherwise.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_telemetry(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config);

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .try_init(),
        LogFormat::Pretty => {
            let span_events = if config.include_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .try_init()
        }
    }
}
