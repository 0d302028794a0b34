//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool is built from; it
//! embeds the [`FeePolicyConfig`] that parameterises the volatility fee.
//! Every constant the pool relies on (base fee, volatility threshold,
//! surcharge, price scale) is injected here rather than hard-coded.

mod fee_policy;
mod pool;

pub use fee_policy::{
    FeePolicyConfig, DEFAULT_BASE_FEE_BPS, DEFAULT_SURCHARGE_BPS, DEFAULT_VOLATILITY_THRESHOLD,
};
pub use pool::PoolConfig;
