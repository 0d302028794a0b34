//! Pools keyed by token pair.
//!
//! The [`PoolRegistry`] owns one [`SharedPool`](crate::pools::SharedPool)
//! per canonical [`TokenPair`](crate::domain::TokenPair) and hands out
//! `Arc` handles to them, so independent markets can be traded from many
//! threads without sharing a lock.
//!
//! # Usage
//!
//! ```rust
//! use dynfee_amm::domain::{Amount, TokenAddress, TokenPair};
//! use dynfee_amm::registry::PoolRegistry;
//!
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let pair = TokenPair::new(usdc, weth).expect("distinct");
//!
//! let registry = PoolRegistry::default();
//! let pool = registry.create(pair).expect("new pool");
//! pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)).expect("deposit");
//!
//! let result = registry.swap(&pair, &usdc, Amount::new(500)).expect("swap");
//! assert_eq!(result.amount_out(), Amount::new(667));
//! ```

mod pool_registry;

pub use pool_registry::PoolRegistry;
