//! Reserve deposits.
//!
//! Deposits only grow the two reserve counters; the last observed price and
//! the fee tier are carried over unchanged.

use crate::domain::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

use super::PoolState;

/// Computes the state after depositing `amount_x` and `amount_y`.
///
/// When `tolerance` is set and the pool already holds both tokens, the
/// deposit must keep `amount_x / amount_y` within `tolerance` of
/// `reserve_x / reserve_y`, measured as
/// `|amount_x·reserve_y − amount_y·reserve_x| ≤ tolerance × max(amount_x·reserve_y, amount_y·reserve_x)`.
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] if either amount is zero.
/// - [`AmmError::DepositRatioMismatch`] if the ratio check fails.
/// - [`AmmError::Overflow`] if a reserve or a cross product overflows.
pub fn deposit(
    state: &PoolState,
    amount_x: Amount,
    amount_y: Amount,
    tolerance: Option<BasisPoints>,
) -> Result<PoolState, AmmError> {
    if amount_x.is_zero() || amount_y.is_zero() {
        return Err(AmmError::InvalidInput("deposit amounts must be non-zero"));
    }

    if let Some(tolerance) = tolerance {
        if !state.is_empty() {
            check_ratio(state, amount_x, amount_y, tolerance)?;
        }
    }

    let reserve_x = state
        .reserve_x
        .checked_add(&amount_x)
        .ok_or(AmmError::Overflow("reserve_x overflow on deposit"))?;
    let reserve_y = state
        .reserve_y
        .checked_add(&amount_y)
        .ok_or(AmmError::Overflow("reserve_y overflow on deposit"))?;

    Ok(PoolState {
        reserve_x,
        reserve_y,
        ..*state
    })
}

fn check_ratio(
    state: &PoolState,
    amount_x: Amount,
    amount_y: Amount,
    tolerance: BasisPoints,
) -> Result<(), AmmError> {
    let lhs = amount_x.safe_mul(&state.reserve_y)?;
    let rhs = amount_y.safe_mul(&state.reserve_x)?;
    let (larger, smaller) = if lhs >= rhs { (lhs, rhs) } else { (rhs, lhs) };
    let deviation = larger.safe_sub(&smaller)?;
    let allowed = tolerance.apply(larger, Rounding::Down)?;
    if deviation > allowed {
        return Err(AmmError::DepositRatioMismatch);
    }
    Ok(())
}
