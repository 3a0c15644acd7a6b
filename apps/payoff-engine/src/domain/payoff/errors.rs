//! Payoff Errors

use thiserror::Error;

/// Errors that can occur while building or analysing a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayoffError {
    /// Analysis was requested on a position without legs.
    #[error("Position has no legs; add at least one leg before analysis")]
    EmptyPosition,

    /// Contract terms are out of range.
    #[error("Invalid contract: {message}")]
    InvalidContract {
        /// Error message.
        message: String,
    },

    /// Leg configuration is invalid.
    #[error("Invalid leg: {message}")]
    InvalidLeg {
        /// Error message.
        message: String,
    },

    /// Contract type outside Call, Put, Stock.
    #[error("Unrecognized contract type: '{value}' (expected Call, Put or Stock)")]
    UnrecognizedContractType {
        /// The raw value supplied by the loader.
        value: String,
    },

    /// A price or P&L does not fit in the decimal range.
    #[error("Value out of range: {message}")]
    ValueOutOfRange {
        /// Error message.
        message: String,
    },

    /// Position side outside Long, Short.
    #[error("Unrecognized position side: '{value}' (expected Long or Short)")]
    UnrecognizedSide {
        /// The raw value supplied by the loader.
        value: String,
    },
}
