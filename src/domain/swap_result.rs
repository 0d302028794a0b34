//! Outcome of a swap.

use core::fmt;

use super::{Amount, BasisPoints, Price, SwapDirection};

/// Everything a committed (or quoted) swap produced.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee_amount < amount_in`; it is zero under
///   [`FeeMode::Informational`](super::FeeMode::Informational).
/// - `fee` is the tier the pool carries after the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee_amount: Amount,
    price: Price,
    fee: BasisPoints,
}

impl SwapResult {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee_amount: Amount,
        price: Price,
        fee: BasisPoints,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee_amount,
            price,
            fee,
        }
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the gross input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount released from the output reserve.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee charged on the input; zero when fees are informational.
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }

    /// Returns the price observed by this swap.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the fee tier in effect after this swap.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in={} out={} fee_amount={} price={} fee={}",
            self.direction, self.amount_in, self.amount_out, self.fee_amount, self.price, self.fee
        )
    }
}
