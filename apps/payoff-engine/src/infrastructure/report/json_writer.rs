//! JSON report writer.

use std::io::Write;

use crate::application::dto::PayoffReportDto;
use crate::application::ports::{ReportError, ReportWriterPort};

/// Writes each report as one JSON document followed by a newline.
#[derive(Debug)]
pub struct JsonReportWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonReportWriter<W> {
    /// Compact, single-line output.
    pub const fn compact(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Indented output.
    pub const fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonReportWriter<std::io::Stdout> {
    /// Pretty JSON on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::pretty(std::io::stdout())
    }
}

impl<W: Write> ReportWriterPort for JsonReportWriter<W> {
    fn write_report(&mut self, report: &PayoffReportDto) -> Result<(), ReportError> {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .map_err(|e| ReportError::SerializationError {
            message: e.to_string(),
        })?;

        writeln!(self.writer, "{serialized}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| ReportError::WriteFailed {
                message: e.to_string(),
            })
    }
}
