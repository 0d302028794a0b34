//! Which reserve a swap sells into.

use core::fmt;

/// Direction of a swap.
///
/// Both directions run through the same constant-product routine; the
/// direction only selects which reserve receives `amount_in` and which one
/// releases `amount_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SwapDirection {
    /// Sell token X, receive token Y.
    XToY = 0,
    /// Sell token Y, receive token X.
    YToX = 1,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }

    /// Orders `(x, y)` as `(input side, output side)` for this direction.
    #[must_use]
    pub const fn orient<T: Copy>(&self, x: T, y: T) -> (T, T) {
        match self {
            Self::XToY => (x, y),
            Self::YToX => (y, x),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => write!(f, "x->y"),
            Self::YToX => write!(f, "y->x"),
        }
    }
}
