//! Core swap trait for executing trades and reading pool state.
//!
//! [`SwapPool`] covers the trading side of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] runs a trade and commits it.
//! 2. **Quote**: [`SwapPool::quote`] runs the same computation without
//!    committing anything.
//! 3. **Inspect**: [`SwapPool::balances`] and [`SwapPool::spot_price`]
//!    read the committed state.
//!
//! # Atomicity
//!
//! A swap either commits reserves, price and fee tier together or returns
//! an error and leaves the pool untouched.

use crate::domain::{Amount, Balances, Price, SwapDirection, SwapResult};
use crate::error::AmmError;

/// Trading interface of a two-reserve pool.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`]:
///
/// - [`AmmError::InvalidInput`]: `amount_in` is zero.
/// - [`AmmError::EmptyPool`]: either reserve is zero.
/// - [`AmmError::ZeroOutput`]: the trade is too small to release one unit.
/// - [`AmmError::InsufficientLiquidity`]: the trade would drain the output
///   reserve and the pool was built with a drain guard.
/// - [`AmmError::Overflow`]: an intermediate value left the `u128` range.
pub trait SwapPool {
    /// Executes a swap in the given direction and commits the new state.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn swap(&mut self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Computes what [`swap`](Self::swap) would do without committing.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn quote(&self, direction: SwapDirection, amount_in: Amount) -> Result<SwapResult, AmmError>;

    /// Returns the committed reserves and fee tier.
    #[must_use]
    fn balances(&self) -> Balances;

    /// Returns the marginal price of X in units of Y, scaled by the pool's
    /// price scale.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if scaling the Y reserve overflows.
    fn spot_price(&self) -> Result<Price, AmmError>;

    /// Sells `amount_in` of token X and returns the amount of Y released.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn swap_x_for_y(&mut self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.swap(SwapDirection::XToY, amount_in)
            .map(|result| result.amount_out())
    }

    /// Sells `amount_in` of token Y and returns the amount of X released.
    ///
    /// # Errors
    ///
    /// See the trait-level error list.
    fn swap_y_for_x(&mut self, amount_in: Amount) -> Result<Amount, AmmError> {
        self.swap(SwapDirection::YToX, amount_in)
            .map(|result| result.amount_out())
    }
}
