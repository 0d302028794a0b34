//! Read-only view of a pool's reserves and fee tier.

use core::fmt;

use super::{Amount, BasisPoints};

/// What callers see through the balances accessor.
///
/// Always taken from a fully committed pool state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Balances {
    /// Quantity of token X held by the pool.
    pub reserve_x: Amount,
    /// Quantity of token Y held by the pool.
    pub reserve_y: Amount,
    /// Fee tier in effect after the most recent swap.
    pub current_fee: BasisPoints,
}

impl fmt::Display for Balances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} fee={}",
            self.reserve_x, self.reserve_y, self.current_fee
        )
    }
}
