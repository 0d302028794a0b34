//! Constant-product swap engine.
//!
//! The engine turns a committed [`PoolState`] plus a trade into the next
//! `PoolState`.  It never writes into the state it reads: the whole trade
//! is computed into locals, and only [`SwapEngine::execute`] replaces the
//! caller's state once every check has passed.
//!
//! # Swap Algorithm (input side `i`, output side `o`)
//!
//! 1. `k = reserve_i × reserve_o` (checked)
//! 2. `reserve_i' = reserve_i + amount_in`
//! 3. `reserve_o' = ⌊k / reserve_i'⌋`, or with a deducted fee
//!    `⌈k / (reserve_i + amount_in − fee)⌉`
//! 4. `amount_out = reserve_o − reserve_o'` (must be non-zero; may be the
//!    whole output reserve unless the drain guard is enabled)
//! 5. `price = ⌊amount_in × scale / amount_out⌋`
//! 6. `fee tier = policy(previous price, price, base fee)`
//!
//! Both directions share this routine; [`SwapDirection::orient`] maps the
//! X/Y reserves to input/output sides and back.

use crate::config::PoolConfig;
use crate::domain::{Amount, FeeMode, Price, Rounding, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::FeePolicy;

use super::PoolState;

/// Computes and commits swaps against a [`PoolState`].
///
/// Borrowed from the owning pool for the duration of one operation.
#[derive(Debug, Clone, Copy)]
pub struct SwapEngine<'a, P> {
    policy: &'a P,
    price_scale: u128,
    fee_mode: FeeMode,
    drain_guard: bool,
}

impl<'a, P: FeePolicy> SwapEngine<'a, P> {
    /// Creates an engine that prices swaps with `policy` and the scale and
    /// fee mode from `config`.
    #[must_use]
    pub const fn new(policy: &'a P, config: &PoolConfig) -> Self {
        Self {
            policy,
            price_scale: config.price_scale(),
            fee_mode: config.fee_mode(),
            drain_guard: config.drain_guard(),
        }
    }

    /// Computes the outcome of a swap and the state it would commit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount_in` is zero.
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::ZeroOutput`] if the trade releases nothing.
    /// - [`AmmError::InsufficientLiquidity`] if the drain guard is enabled
    ///   and the output reserve would reach zero.
    /// - [`AmmError::Overflow`] if the reserve product, the new input
    ///   reserve, or the scaled price overflows.
    pub fn quote(
        &self,
        state: &PoolState,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(SwapResult, PoolState), AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidInput("swap amount must be non-zero"));
        }
        if state.is_empty() {
            return Err(AmmError::EmptyPool);
        }

        let (reserve_in, reserve_out) = direction.orient(state.reserve_x, state.reserve_y);

        let k = reserve_in
            .checked_mul(&reserve_out)
            .ok_or(AmmError::Overflow("reserve product overflow"))?;
        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(AmmError::Overflow("input reserve overflow"))?;

        let (fee_amount, new_reserve_out) = match self.fee_mode {
            FeeMode::Informational => (Amount::ZERO, k.safe_div(&new_reserve_in, Rounding::Down)?),
            FeeMode::Deducted => {
                let fee_amount = state.current_fee.apply(amount_in, Rounding::Up)?;
                let net_in = amount_in.safe_sub(&fee_amount)?;
                let effective_in = reserve_in.safe_add(&net_in)?;
                (fee_amount, k.safe_div(&effective_in, Rounding::Up)?)
            }
        };

        let amount_out = reserve_out.safe_sub(&new_reserve_out)?;
        if amount_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }
        if self.drain_guard && new_reserve_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let price = Price::from_ratio(amount_in, amount_out, self.price_scale)?;
        let fee = self
            .policy
            .compute_fee(state.last_price, price, state.base_fee);

        let (reserve_x, reserve_y) = direction.orient(new_reserve_in, new_reserve_out);
        let next = PoolState {
            reserve_x,
            reserve_y,
            last_price: price,
            base_fee: state.base_fee,
            current_fee: fee,
        };
        let result = SwapResult::new(direction, amount_in, amount_out, fee_amount, price, fee);
        Ok((result, next))
    }

    /// Runs [`quote`](Self::quote) and, on success, replaces `state` with
    /// the post-swap snapshot.  On error `state` is untouched.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote).
    pub fn execute(
        &self,
        state: &mut PoolState,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapResult, AmmError> {
        let (result, next) = self.quote(state, direction, amount_in)?;
        *state = next;
        Ok(result)
    }
}
