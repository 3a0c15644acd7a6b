//! Canonical Strategy Builders
//!
//! Convenience constructors for common multi-leg positions. Each returns a
//! [`Position`] with default analysis settings that callers may extend with
//! further legs.

use rust_decimal::Decimal;

use super::aggregate::Position;
use super::errors::PayoffError;
use super::value_objects::Contract;

/// Build an iron condor.
///
/// An iron condor consists of:
/// - Bull put spread (short put + long put `width` below)
/// - Bear call spread (short call + long call `width` above)
///
/// `premiums` are `(short_put, long_put, short_call, long_call)`.
///
/// # Errors
///
/// Returns an error if the short strikes are not ordered, the width is not
/// positive, or a wing strike would fall below zero.
pub fn iron_condor(
    short_put_strike: Decimal,
    short_call_strike: Decimal,
    width: Decimal,
    premiums: (Decimal, Decimal, Decimal, Decimal),
) -> Result<Position, PayoffError> {
    if short_put_strike >= short_call_strike {
        return Err(PayoffError::InvalidLeg {
            message: "Short put strike must be below short call strike".to_string(),
        });
    }
    if width <= Decimal::ZERO {
        return Err(PayoffError::InvalidLeg {
            message: format!("Wing width must be positive, got {width}"),
        });
    }

    let (sp_prem, lp_prem, sc_prem, lc_prem) = premiums;
    let mut position = Position::new();
    position
        .buy(Contract::put(short_put_strike - width, lp_prem), 1)?
        .sell(Contract::put(short_put_strike, sp_prem), 1)?
        .sell(Contract::call(short_call_strike, sc_prem), 1)?
        .buy(Contract::call(short_call_strike + width, lc_prem), 1)?;
    Ok(position)
}

/// Build a long straddle: long call and long put at the same strike.
///
/// # Errors
///
/// Returns an error if the strike or a premium is negative.
pub fn straddle(
    strike: Decimal,
    call_premium: Decimal,
    put_premium: Decimal,
) -> Result<Position, PayoffError> {
    let mut position = Position::new();
    position
        .buy(Contract::call(strike, call_premium), 1)?
        .buy(Contract::put(strike, put_premium), 1)?;
    Ok(position)
}

/// Build a covered call: long stock plus a short call against it.
///
/// # Errors
///
/// Returns an error if a price or the premium is negative.
pub fn covered_call(
    stock_price: Decimal,
    call_strike: Decimal,
    call_premium: Decimal,
) -> Result<Position, PayoffError> {
    let mut position = Position::new();
    position
        .buy(Contract::stock(stock_price), 1)?
        .sell(Contract::call(call_strike, call_premium), 1)?;
    Ok(position)
}
