//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the pool.
///
/// The constant-product formula floors toward zero; fee amounts and the
/// fee-retaining reserve update round up so the pool never loses value.
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
