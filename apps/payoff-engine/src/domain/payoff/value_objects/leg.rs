//! Position Leg Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Contract;
use crate::domain::payoff::errors::PayoffError;

/// Position side (long or short).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionSide {
    /// Get the sign multiplier for this side.
    #[must_use]
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }

    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    /// Check if this is a short position.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }
}

impl std::fmt::Display for PositionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

impl std::str::FromStr for PositionSide {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            _ => Err(PayoffError::UnrecognizedSide {
                value: s.to_string(),
            }),
        }
    }
}

/// P&L breakdown of one leg at a given spot price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegPnl {
    /// Premium for options, acquisition price for stock.
    pub contract_price: Decimal,
    /// Intrinsic value at spot, floored at zero.
    pub contract_value: Decimal,
    /// Signed P&L of a single contract.
    pub contract_pnl: Decimal,
    /// `contract_pnl` scaled by quantity.
    pub total_pnl: Decimal,
}

/// A single leg of a position.
///
/// Deserialization goes through [`Leg::new`], so serialized legs are
/// validated the same way as constructed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LegFields")]
pub struct Leg {
    /// The traded instrument.
    contract: Contract,
    /// Number of contracts (or shares).
    quantity: u32,
    /// Position side.
    side: PositionSide,
}

/// Serialized form of a [`Leg`], before validation.
#[derive(Deserialize)]
struct LegFields {
    contract: Contract,
    quantity: u32,
    side: PositionSide,
}

impl TryFrom<LegFields> for Leg {
    type Error = PayoffError;

    fn try_from(fields: LegFields) -> Result<Self, Self::Error> {
        Self::new(fields.contract, fields.quantity, fields.side)
    }
}

impl Leg {
    /// Create a new leg.
    ///
    /// # Errors
    ///
    /// Returns an error if `quantity` is zero or the contract terms are negative.
    pub fn new(contract: Contract, quantity: u32, side: PositionSide) -> Result<Self, PayoffError> {
        contract.validate()?;
        if quantity == 0 {
            return Err(PayoffError::InvalidLeg {
                message: format!("quantity must be positive for {contract}"),
            });
        }
        Ok(Self {
            contract,
            quantity,
            side,
        })
    }

    /// Create a long leg.
    pub fn long(contract: Contract, quantity: u32) -> Result<Self, PayoffError> {
        Self::new(contract, quantity, PositionSide::Long)
    }

    /// Create a short leg.
    pub fn short(contract: Contract, quantity: u32) -> Result<Self, PayoffError> {
        Self::new(contract, quantity, PositionSide::Short)
    }

    /// Get the contract.
    #[must_use]
    pub const fn contract(&self) -> &Contract {
        &self.contract
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the position side.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        self.side
    }

    /// Get signed quantity (positive for long, negative for short).
    #[must_use]
    pub fn signed_quantity(&self) -> i64 {
        i64::from(self.quantity) * self.side.sign()
    }

    /// P&L of this leg if the underlying settles at `spot`.
    #[must_use]
    pub fn pnl(&self, spot: Decimal) -> LegPnl {
        let contract_value = self.contract.intrinsic_value(spot);
        let contract_price = match self.contract {
            Contract::Stock { reference_price } => reference_price,
            Contract::Call { premium, .. } | Contract::Put { premium, .. } => premium,
        };
        let contract_pnl = match self.side {
            PositionSide::Long => contract_value - contract_price,
            PositionSide::Short => contract_price - contract_value,
        };

        LegPnl {
            contract_price,
            contract_value,
            contract_pnl,
            total_pnl: contract_pnl * Decimal::from(self.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn position_side_sign() {
        assert_eq!(PositionSide::Long.sign(), 1);
        assert_eq!(PositionSide::Short.sign(), -1);
    }

    #[test]
    fn position_side_predicates() {
        assert!(PositionSide::Long.is_long());
        assert!(!PositionSide::Long.is_short());
        assert!(!PositionSide::Short.is_long());
        assert!(PositionSide::Short.is_short());
    }

    #[test]
    fn position_side_parse() {
        assert_eq!("long".parse::<PositionSide>().unwrap(), PositionSide::Long);
        assert_eq!("Short".parse::<PositionSide>().unwrap(), PositionSide::Short);
        assert!(matches!(
            "buy".parse::<PositionSide>(),
            Err(PayoffError::UnrecognizedSide { .. })
        ));
    }

    #[test]
    fn leg_rejects_zero_quantity() {
        let err = Leg::long(Contract::call(dec!(100), dec!(1)), 0).unwrap_err();
        assert!(matches!(err, PayoffError::InvalidLeg { .. }));
    }

    #[test]
    fn leg_rejects_invalid_contract() {
        let err = Leg::short(Contract::put(dec!(100), dec!(-1)), 1).unwrap_err();
        assert!(matches!(err, PayoffError::InvalidContract { .. }));
    }

    #[test]
    fn leg_signed_quantity() {
        let long_leg = Leg::long(Contract::call(dec!(100), dec!(1)), 3).unwrap();
        assert_eq!(long_leg.signed_quantity(), 3);

        let short_leg = Leg::short(Contract::call(dec!(100), dec!(1)), 3).unwrap();
        assert_eq!(short_leg.signed_quantity(), -3);
    }

    #[test]
    fn long_call_pnl() {
        let leg = Leg::long(Contract::call(dec!(100), dec!(6.5)), 2).unwrap();

        let pnl = leg.pnl(dec!(110));
        assert_eq!(pnl.contract_price, dec!(6.5));
        assert_eq!(pnl.contract_value, dec!(10));
        assert_eq!(pnl.contract_pnl, dec!(3.5));
        assert_eq!(pnl.total_pnl, dec!(7));

        // Out of the money: lose the premium on both contracts
        assert_eq!(leg.pnl(dec!(90)).total_pnl, dec!(-13));
    }

    #[test]
    fn short_put_pnl() {
        let leg = Leg::short(Contract::put(dec!(95), dec!(1)), 1).unwrap();
        assert_eq!(leg.pnl(dec!(100)).total_pnl, dec!(1));
        assert_eq!(leg.pnl(dec!(90)).total_pnl, dec!(-4));
    }

    #[test]
    fn stock_pnl_is_relative_to_reference_price() {
        let long_stock = Leg::long(Contract::stock(dec!(95)), 1).unwrap();
        let pnl = long_stock.pnl(dec!(100));
        assert_eq!(pnl.contract_price, dec!(95));
        assert_eq!(pnl.contract_value, dec!(100));
        assert_eq!(pnl.total_pnl, dec!(5));

        let short_stock = Leg::short(Contract::stock(dec!(95)), 10).unwrap();
        assert_eq!(short_stock.pnl(dec!(90)).total_pnl, dec!(50));
    }

    #[test]
    fn leg_serde() {
        let leg = Leg::long(Contract::put(dec!(90), dec!(0.5)), 4).unwrap();
        let json = serde_json::to_string(&leg).unwrap();
        let parsed: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, leg);
    }

    #[test]
    fn leg_deserialize_validates() {
        let zero_quantity = r#"{"contract":{"kind":"CALL","strike":"100","premium":"1"},"quantity":0,"side":"long"}"#;
        let err = serde_json::from_str::<Leg>(zero_quantity).unwrap_err();
        assert!(err.to_string().contains("quantity must be positive"));

        let negative_strike = r#"{"contract":{"kind":"PUT","strike":"-5","premium":"1"},"quantity":1,"side":"short"}"#;
        let err = serde_json::from_str::<Leg>(negative_strike).unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));
    }
}
