//! Contract Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payoff::errors::PayoffError;

/// Instrument kind carried by a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractKind {
    /// Call option.
    Call,
    /// Put option.
    Put,
    /// Underlying shares.
    Stock,
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
            Self::Stock => write!(f, "Stock"),
        }
    }
}

impl std::str::FromStr for ContractKind {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            "stock" => Ok(Self::Stock),
            _ => Err(PayoffError::UnrecognizedContractType {
                value: s.to_string(),
            }),
        }
    }
}

/// An instrument whose value at expiration depends on the spot price.
///
/// Options carry a strike and the premium paid (long) or received (short).
/// Stock carries the reference price it was acquired at and has no premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Contract {
    /// Call option.
    Call {
        /// Strike price.
        strike: Decimal,
        /// Option premium per share.
        premium: Decimal,
    },
    /// Put option.
    Put {
        /// Strike price.
        strike: Decimal,
        /// Option premium per share.
        premium: Decimal,
    },
    /// Shares of the underlying.
    Stock {
        /// Price the shares were acquired at.
        reference_price: Decimal,
    },
}

impl Contract {
    /// Create a call option.
    #[must_use]
    pub const fn call(strike: Decimal, premium: Decimal) -> Self {
        Self::Call { strike, premium }
    }

    /// Create a put option.
    #[must_use]
    pub const fn put(strike: Decimal, premium: Decimal) -> Self {
        Self::Put { strike, premium }
    }

    /// Create a stock holding.
    #[must_use]
    pub const fn stock(reference_price: Decimal) -> Self {
        Self::Stock { reference_price }
    }

    /// Get the contract kind.
    #[must_use]
    pub const fn kind(&self) -> ContractKind {
        match self {
            Self::Call { .. } => ContractKind::Call,
            Self::Put { .. } => ContractKind::Put,
            Self::Stock { .. } => ContractKind::Stock,
        }
    }

    /// Strike for options, reference price for stock.
    ///
    /// This is the price at which the contract's slope can change, so it is
    /// what the interval partitioner splits the price axis on.
    #[must_use]
    pub const fn reference_price(&self) -> Decimal {
        match self {
            Self::Call { strike, .. } | Self::Put { strike, .. } => *strike,
            Self::Stock { reference_price } => *reference_price,
        }
    }

    /// Option premium; zero for stock.
    #[must_use]
    pub const fn premium(&self) -> Decimal {
        match self {
            Self::Call { premium, .. } | Self::Put { premium, .. } => *premium,
            Self::Stock { .. } => Decimal::ZERO,
        }
    }

    /// Long payoff at expiration, net of premium.
    ///
    /// Returns `None` for stock: its P&L only exists relative to a leg's
    /// reference price (see [`super::Leg::pnl`]).
    #[must_use]
    pub fn payoff(&self, spot: Decimal) -> Option<Decimal> {
        match self {
            Self::Call { strike, premium } => {
                Some((spot - *strike).max(Decimal::ZERO) - *premium)
            }
            Self::Put { strike, premium } => Some((*strike - spot).max(Decimal::ZERO) - *premium),
            Self::Stock { .. } => None,
        }
    }

    /// Single-contract break-even for a long option.
    #[must_use]
    pub fn break_even(&self) -> Option<Decimal> {
        match self {
            Self::Call { strike, premium } => Some(*strike + *premium),
            Self::Put { strike, premium } => Some(*strike - *premium),
            Self::Stock { .. } => None,
        }
    }

    /// Intrinsic value at `spot`, floored at zero.
    ///
    /// Stock is worth the spot price itself.
    #[must_use]
    pub fn intrinsic_value(&self, spot: Decimal) -> Decimal {
        let value = match self {
            Self::Call { strike, .. } => spot - *strike,
            Self::Put { strike, .. } => *strike - spot,
            Self::Stock { .. } => spot,
        };
        value.max(Decimal::ZERO)
    }

    /// Check if this is an option (call or put).
    #[must_use]
    pub const fn is_option(&self) -> bool {
        !matches!(self, Self::Stock { .. })
    }

    /// Check that prices and premium are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`PayoffError::InvalidContract`] when a price or premium is negative.
    pub fn validate(&self) -> Result<(), PayoffError> {
        if self.reference_price() < Decimal::ZERO {
            let field = if self.is_option() {
                "strike"
            } else {
                "reference price"
            };
            return Err(PayoffError::InvalidContract {
                message: format!("{field} cannot be negative: {}", self.reference_price()),
            });
        }
        if self.premium() < Decimal::ZERO {
            return Err(PayoffError::InvalidContract {
                message: format!("premium cannot be negative: {}", self.premium()),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Contract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call { strike, premium } => write!(f, "Call {strike} @ {premium}"),
            Self::Put { strike, premium } => write!(f, "Put {strike} @ {premium}"),
            Self::Stock { reference_price } => write!(f, "Stock @ {reference_price}"),
        }
    }
}
