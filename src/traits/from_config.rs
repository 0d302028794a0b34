//! Construction of pools from configuration.

use crate::error::AmmError;

/// Builds a pool from its configuration.
///
/// Implementations validate the configuration first; a successfully built
/// pool is always in a valid initial state.
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
