//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the application layer:
//!
//! - `loader/`: Position sources (CSV files)
//! - `report/`: Report writers (JSON)

pub mod loader;
pub mod report;
