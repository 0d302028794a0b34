//! Canonically ordered pair of distinct tokens.

use core::fmt;

use super::{SwapDirection, TokenAddress};
use crate::error::AmmError;

/// The two tokens of a market, canonically sorted by address.
///
/// The lower address is token X and the higher address is token Y, so
/// `(A, B)` and `(B, A)` identify the same pool in a
/// [`PoolRegistry`](crate::registry::PoolRegistry).
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::{SwapDirection, TokenAddress, TokenPair};
///
/// let usdc = TokenAddress::from_bytes([1u8; 32]);
/// let weth = TokenAddress::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(weth, usdc).expect("distinct tokens");
/// assert_eq!(pair.token_x(), usdc);
/// assert_eq!(pair.direction_for(&usdc), Ok(SwapDirection::XToY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_x: TokenAddress,
    token_y: TokenAddress,
}

impl TokenPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both addresses are equal.
    pub fn new(first: TokenAddress, second: TokenAddress) -> Result<Self, AmmError> {
        if first == second {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        let (token_x, token_y) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { token_x, token_y })
    }

    /// Returns token X (lower address).
    #[must_use]
    pub const fn token_x(&self) -> TokenAddress {
        self.token_x
    }

    /// Returns token Y (higher address).
    #[must_use]
    pub const fn token_y(&self) -> TokenAddress {
        self.token_y
    }

    /// Returns `true` if `token` is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token_x == *token || self.token_y == *token
    }

    /// Maps the token being sold to the swap direction of this pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    pub fn direction_for(&self, token_in: &TokenAddress) -> Result<SwapDirection, AmmError> {
        if *token_in == self.token_x {
            Ok(SwapDirection::XToY)
        } else if *token_in == self.token_y {
            Ok(SwapDirection::YToX)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_x, self.token_y)
    }
}
