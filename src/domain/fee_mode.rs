//! How the dynamic fee tier affects swap math.

/// Selects whether the fee tier is charged or only reported.
///
/// With [`FeeMode::Informational`] the tier is computed and stored after
/// every swap but nothing is deducted, so `reserve_x * reserve_y` may drift
/// down by rounding.  [`FeeMode::Deducted`] charges the tier in effect
/// before the swap on the input amount and keeps it in the pool, which
/// makes the reserve product non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FeeMode {
    /// Fee tier is tracked but not charged.
    #[default]
    Informational,
    /// Fee is deducted from the input and retained in the reserves.
    Deducted,
}

impl FeeMode {
    /// Returns `true` if swaps charge the fee.
    #[must_use]
    pub const fn is_deducted(&self) -> bool {
        matches!(self, Self::Deducted)
    }
}
