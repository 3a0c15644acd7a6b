//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.

mod position_source_port;
mod report_writer_port;

pub use position_source_port::{InMemoryPositionSource, PositionSourceError, PositionSourcePort};
pub use report_writer_port::{InMemoryReportWriter, ReportError, ReportWriterPort};
