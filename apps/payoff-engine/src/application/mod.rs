//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for loading positions and writing reports
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Data transfer objects for loader input and report output

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
