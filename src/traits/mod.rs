//! Core trait abstractions.
//!
//! [`SwapPool`] executes and quotes trades, [`LiquidityPool`] adds reserve
//! deposits, [`FeePolicy`] decides the fee tier after each swap, and
//! [`FromConfig`] builds pools from configuration.

mod fee_policy;
mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use fee_policy::FeePolicy;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
