//! The mutable record a pool carries between operations.

use crate::domain::{Amount, Balances, BasisPoints, Price};

/// Reserves, last observed price and fee tier of one pool.
///
/// `PoolState` has no behaviour of its own.  It is only ever replaced
/// wholesale by the swap engine or the liquidity functions, so every value
/// a reader can observe is a complete, committed snapshot.
///
/// # Invariants
///
/// - `current_fee` is either `base_fee` or the policy's elevated tier.
/// - `last_price` is the price of the most recently completed swap, or
///   zero before the first swap.
/// - `base_fee` never changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolState {
    pub(crate) reserve_x: Amount,
    pub(crate) reserve_y: Amount,
    pub(crate) last_price: Price,
    pub(crate) base_fee: BasisPoints,
    pub(crate) current_fee: BasisPoints,
}

impl PoolState {
    /// Creates an empty state with the fee tier at `base_fee`.
    #[must_use]
    pub const fn new(base_fee: BasisPoints) -> Self {
        Self {
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            last_price: Price::ZERO,
            base_fee,
            current_fee: base_fee,
        }
    }

    /// Returns the reserve of token X.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the reserve of token Y.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the price observed by the most recent swap.
    #[must_use]
    pub const fn last_price(&self) -> Price {
        self.last_price
    }

    /// Returns the configured base fee.
    #[must_use]
    pub const fn base_fee(&self) -> BasisPoints {
        self.base_fee
    }

    /// Returns the fee tier in effect.
    #[must_use]
    pub const fn current_fee(&self) -> BasisPoints {
        self.current_fee
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_x.is_zero() || self.reserve_y.is_zero()
    }

    /// Returns the `(reserve_x, reserve_y, current_fee)` view.
    #[must_use]
    pub const fn balances(&self) -> Balances {
        Balances {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            current_fee: self.current_fee,
        }
    }

    /// Returns `reserve_x * reserve_y`, or `None` if it overflows.
    #[must_use]
    pub const fn invariant(&self) -> Option<Amount> {
        self.reserve_x.checked_mul(&self.reserve_y)
    }
}
