//! Leg Record DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payoff::{Contract, ContractKind, Leg, PayoffError, PositionSide};

/// One leg as supplied by a position source.
///
/// `contract_type` and `side` are free text; they are only interpreted when
/// the record is converted into a [`Leg`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRecordDto {
    /// `call`, `put` or `stock` (any case).
    pub contract_type: String,
    /// Strike, or reference price for stock.
    pub strike: Decimal,
    /// Premium per share; ignored for stock.
    pub premium: Decimal,
    /// Number of contracts or shares.
    pub quantity: u32,
    /// `long` or `short` (any case).
    pub side: String,
}

impl LegRecordDto {
    /// Create a record.
    #[must_use]
    pub fn new(
        contract_type: impl Into<String>,
        strike: Decimal,
        premium: Decimal,
        quantity: u32,
        side: impl Into<String>,
    ) -> Self {
        Self {
            contract_type: contract_type.into(),
            strike,
            premium,
            quantity,
            side: side.into(),
        }
    }
}

impl TryFrom<&LegRecordDto> for Leg {
    type Error = PayoffError;

    fn try_from(record: &LegRecordDto) -> Result<Self, Self::Error> {
        let kind: ContractKind = record.contract_type.parse()?;
        let side: PositionSide = record.side.parse()?;

        let contract = match kind {
            ContractKind::Call => Contract::call(record.strike, record.premium),
            ContractKind::Put => Contract::put(record.strike, record.premium),
            ContractKind::Stock => Contract::stock(record.strike),
        };
        Self::new(contract, record.quantity, side)
    }
}

impl From<&Leg> for LegRecordDto {
    fn from(leg: &Leg) -> Self {
        let contract = leg.contract();
        Self {
            contract_type: contract.kind().to_string(),
            strike: contract.reference_price(),
            premium: contract.premium(),
            quantity: leg.quantity(),
            side: leg.side().to_string(),
        }
    }
}
