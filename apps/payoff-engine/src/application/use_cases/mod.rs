//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod analyze_position;

pub use analyze_position::{AnalyzePositionError, AnalyzePositionUseCase};
