//! # Dynamic-Fee AMM
//!
//! Constant-product automated market maker whose fee tier reacts to price
//! volatility, built on integer-only arithmetic.
//!
//! A pool holds two reserves `x` and `y` and keeps `x × y = k` across
//! swaps.  Every swap observes a price `amount_in × scale / amount_out`;
//! when that price moved more than a threshold away from the previous
//! swap's price, the pool's fee tier becomes `base + surcharge`, otherwise
//! it falls back to `base`.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for config and snapshot types |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dynfee-amm = "0.1"
//! ```
//!
//! ## Create a pool and execute a swap
//!
//! ```rust
//! use dynfee_amm::config::PoolConfig;
//! use dynfee_amm::domain::{Amount, BasisPoints, Price, SwapDirection};
//! use dynfee_amm::pools::DynamicFeePool;
//! use dynfee_amm::traits::{FromConfig, LiquidityPool, SwapPool};
//!
//! // 1. Build an empty pool with the default parameters
//! //    (base fee 30 bp, threshold 100, surcharge 10 bp, scale 1e6)
//! let mut pool = DynamicFeePool::from_config(&PoolConfig::default()).expect("valid config");
//!
//! // 2. Seed the reserves
//! pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)).expect("deposit");
//!
//! // 3. Sell 500 X for Y
//! let result = pool.swap(SwapDirection::XToY, Amount::new(500)).expect("swap");
//! assert_eq!(result.amount_out(), Amount::new(667));
//! assert_eq!(result.price(), Price::new(749_625));
//!
//! // 4. The price jumped from 0 to 749 625, so the surcharge applies
//! assert_eq!(pool.balances().current_fee, BasisPoints::new(40));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolRegistry / SharedPool / DynamicFeePool
//! └──────┬───────┘
//!        │ swap / add_liquidity / quote
//!        ▼
//! ┌──────────────┐
//! │    Pools      │  DynamicFeePool commits, SharedPool serializes
//! └──────┬───────┘
//!        │ PoolState + SwapEngine
//!        ▼
//! ┌──────────────┐
//! │     Fee       │  FeePolicy: VolatilityFeePolicy
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Amount, Price, BasisPoints, SwapResult, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`BasisPoints`](domain::BasisPoints), etc. |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FeePolicy`](traits::FeePolicy), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Pool and fee policy parameters: [`PoolConfig`](config::PoolConfig) |
//! | [`fee`] | [`VolatilityFeePolicy`](fee::VolatilityFeePolicy) and [`compute_fee`](fee::compute_fee) |
//! | [`pools`] | [`DynamicFeePool`](pools::DynamicFeePool), [`SharedPool`](pools::SharedPool) and the swap engine |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) keyed by token pair |
//! | [`math`] | Checked arithmetic and rounding division |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for committed and rejected
//! operations, `trace` for fee tier decisions, `info` for registry
//! changes) and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod fee;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod registry;
pub mod traits;
