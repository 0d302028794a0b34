//! Liquidity deposits on top of [`SwapPool`].

use super::SwapPool;
use crate::domain::{Amount, Balances};
use crate::error::AmmError;

/// Pools that accept reserve deposits.
///
/// Share accounting is owned by the ledger layer; the pool only grows its
/// two reserve counters.
pub trait LiquidityPool: SwapPool {
    /// Adds `amount_x` and `amount_y` to the reserves and returns the
    /// committed balances.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if either amount is zero.
    /// - [`AmmError::DepositRatioMismatch`] if a deposit tolerance is
    ///   configured and the deposit skews the reserve ratio beyond it.
    /// - [`AmmError::Overflow`] if a reserve would overflow.
    fn add_liquidity(&mut self, amount_x: Amount, amount_y: Amount) -> Result<Balances, AmmError>;
}
