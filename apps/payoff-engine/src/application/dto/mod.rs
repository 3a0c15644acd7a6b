//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for loader input and report output.

mod leg_record_dto;
mod payoff_report_dto;

pub use leg_record_dto::LegRecordDto;
pub use payoff_report_dto::{PayoffReportDto, SlopeSegmentDto};
