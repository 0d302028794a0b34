//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use dynfee_amm::prelude::*;
//!
//! let mut pool = DynamicFeePool::from_config(&PoolConfig::default()).expect("valid config");
//! pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)).expect("deposit");
//! assert_eq!(pool.swap_x_for_y(Amount::new(500)), Ok(Amount::new(667)));
//! ```

// Domain types
pub use crate::domain::{
    Amount, Balances, BasisPoints, FeeMode, Price, SwapDirection, SwapResult, TokenAddress,
    TokenPair,
};

// Core traits
pub use crate::traits::{FeePolicy, FromConfig, LiquidityPool, SwapPool};

// Configuration
pub use crate::config::{FeePolicyConfig, PoolConfig};

// Fee policies
pub use crate::fee::VolatilityFeePolicy;

// Pools and registry
pub use crate::pools::{DynamicFeePool, SharedPool};
pub use crate::registry::PoolRegistry;

// Error types
pub use crate::error::{AmmError, Result};
